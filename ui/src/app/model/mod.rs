use crate::app::managers::StateManager;
use crate::app::state::DashboardState;
use crate::components::common::{ComponentId, Msg};
use crate::config::KeyBindingsConfig;
use crate::error::ErrorReporter;
use engine::taskpool::TaskPool;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{TerminalAdapter, TerminalBridge};
use tuirealm::{Application, Update};

mod initialization;
mod popup_management;
mod state_management;
mod update_handler;

pub use initialization::{event_listener, global_key_watcher_subscriptions, init_app};

/// Application model
pub struct Model<T>
where
    T: TerminalAdapter,
{
    /// Application
    pub app: Application<ComponentId, Msg, NoUserEvent>,
    /// Used to draw to terminal
    pub terminal: TerminalBridge<T>,

    /// Theme store, active section and generation flow
    pub state: DashboardState,
    pub state_manager: StateManager,

    pub taskpool: TaskPool,
    pub tx_to_main: Sender<Msg>,
    pub rx_to_main: Receiver<Msg>,

    pub error_reporter: ErrorReporter,

    pub keys: KeyBindingsConfig,
    pub generation_delay: Duration,
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_outside_msg(&mut self) {
        // Messages from background tasks
        while let Ok(msg) = self.rx_to_main.try_recv() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = self.update(msg);
            }
        }
    }

    pub fn shutdown(&mut self) {
        log::info!("Shutting down application");

        // Drop pending generations
        self.taskpool.cancel_all();
        self.taskpool.close();

        self.state_manager.shutdown();
    }
}

impl<T> Update<Msg> for Model<T>
where
    T: TerminalAdapter,
{
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        self.handle_update(msg)
    }
}
