use crate::app::model::Model;
use crate::app::state::CreatorOutcome;
use crate::components::common::{CreatorActivityMsg, Msg};
use crate::error::{handle_error, send_to_main};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_creator(&mut self, msg: CreatorActivityMsg) -> Option<Msg> {
        match self.state.apply_creator(&msg) {
            CreatorOutcome::Started(_) => {
                self.schedule_generation_finish();
                self.refresh_creator()
            }
            CreatorOutcome::PromptChanged(_) | CreatorOutcome::Finished { visible: true } => {
                self.refresh_creator()
            }
            CreatorOutcome::Finished { visible: false }
            | CreatorOutcome::Rejected(_)
            | CreatorOutcome::Ignored => None,
        }
    }

    fn schedule_generation_finish(&self) {
        let tx = self.tx_to_main.clone();
        self.taskpool.execute_after(self.generation_delay, async move {
            let finished = Msg::CreatorActivity(CreatorActivityMsg::GenerationFinished);
            if let Err(e) = send_to_main(&tx, finished) {
                handle_error(e);
            }
        });
    }

    fn refresh_creator(&mut self) -> Option<Msg> {
        if let Err(e) = self.remount_section_view() {
            log::error!("Failed to refresh creator studio: {e}");
            return Some(Msg::Error(e));
        }
        None
    }
}
