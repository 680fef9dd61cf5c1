use crate::components::common::ComponentId;

/// Loop flags and focus bookkeeping for the main loop.
pub struct StateManager {
    pub active_component: ComponentId,
    /// Focus to restore once a popup closes
    pub previous_component: Option<ComponentId>,
    pub quit: bool,
    pub redraw: bool,
}

impl StateManager {
    pub fn new() -> Self {
        Self {
            active_component: ComponentId::Sidebar,
            previous_component: None,
            quit: false,
            redraw: true,
        }
    }

    pub fn set_active_component(&mut self, component: ComponentId) {
        log::debug!(
            "Focus: {:?} -> {:?}",
            self.active_component,
            component
        );
        self.active_component = component;
        self.redraw = true;
    }

    /// Move focus to a popup, remembering the current component. A popup
    /// opened over another popup keeps the original return target.
    pub fn push_popup(&mut self, popup: ComponentId) {
        if self.previous_component.is_none() {
            self.previous_component = Some(self.active_component.clone());
        }
        self.set_active_component(popup);
    }

    /// Focus target after a popup closes.
    pub fn pop_popup(&mut self) -> ComponentId {
        let target = self
            .previous_component
            .take()
            .unwrap_or(ComponentId::Sidebar);
        self.set_active_component(target.clone());
        target
    }

    pub fn shutdown(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    pub fn set_redraw(&mut self, redraw: bool) {
        self.redraw = redraw;
    }

    pub fn redraw_complete(&mut self) {
        self.redraw = false;
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_focus_round_trip() {
        let mut state = StateManager::new();
        state.redraw_complete();

        state.push_popup(ComponentId::ThemePicker);
        assert_eq!(state.active_component, ComponentId::ThemePicker);
        assert!(state.needs_redraw());

        state.push_popup(ComponentId::ErrorPopup);
        assert_eq!(state.pop_popup(), ComponentId::Sidebar);
        assert_eq!(state.active_component, ComponentId::Sidebar);
        assert_eq!(state.pop_popup(), ComponentId::Sidebar);
    }

    #[test]
    fn test_shutdown_sets_quit() {
        let mut state = StateManager::default();
        assert!(!state.should_quit());
        state.shutdown();
        assert!(state.should_quit());
    }
}
