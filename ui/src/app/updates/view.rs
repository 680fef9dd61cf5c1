use crate::app::model::Model;
use crate::components::common::Msg;
use engine::ViewAction;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_view_controls(&mut self, action: ViewAction) -> Option<Msg> {
        if !self.state.apply_view_action(action) {
            return None;
        }
        if let Err(e) = self.remount_section_view() {
            log::error!("Failed to refresh {}: {e}", self.state.active_section());
            return Some(Msg::Error(e));
        }
        None
    }
}
