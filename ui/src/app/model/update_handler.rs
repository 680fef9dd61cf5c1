use super::Model;
use crate::components::common::{Msg, PopupActivityMsg};
use crate::error::handle_error;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn handle_update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;
        self.set_redraw(true);

        let result = match msg {
            Msg::AppClose => {
                self.shutdown();
                None
            }
            Msg::ForceRedraw => None,
            Msg::NavigationActivity(msg) => self.update_navigation(msg),
            Msg::ThemeActivity(msg) => self.update_theme(msg),
            Msg::CreatorActivity(msg) => self.update_creator(msg),
            Msg::ViewActivity(action) => self.update_view_controls(action),
            Msg::PopupActivity(msg) => self.update_popup(msg),
            Msg::Error(e) => {
                log::error!("Error received: {e}");
                self.update_popup(PopupActivityMsg::ShowError(e))
            }
        };

        if let Some(Msg::Error(e)) = result {
            log::error!("Error from message processing: {e}");
            if let Err(err) = self.mount_error_popup(&e) {
                log::error!("Failed to mount error popup: {err}");
                handle_error(e);
            }
            None
        } else {
            result
        }
    }
}
