use crate::app::model::Model;
use crate::components::common::{Msg, NavigationActivityMsg};
use engine::Section;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_navigation(&mut self, msg: NavigationActivityMsg) -> Option<Msg> {
        match msg {
            NavigationActivityMsg::SectionSelected(section) => self.handle_section_selected(section),
        }
    }

    fn handle_section_selected(&mut self, section: Section) -> Option<Msg> {
        if !self.state.select_section(section) {
            log::debug!("Section '{section}' already active");
            return None;
        }

        if let Err(e) = self.remount_section_view() {
            log::error!("Failed to show section '{section}': {e}");
            return Some(Msg::Error(e));
        }
        None
    }
}
