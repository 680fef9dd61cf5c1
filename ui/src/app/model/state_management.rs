use super::Model;
use crate::app::view;
use crate::components::common::ComponentId;
use crate::components::section_view::SectionView;
use crate::components::state::ComponentStateMount;
use crate::error::{AppError, AppResult};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn view(&mut self) -> AppResult<()> {
        let mut view_result: AppResult<()> = Ok(());

        let section = self.state.active_section();
        let palette = self.state.palette().current();
        let active_component = self.state_manager.active_component.clone();
        let keys = &self.keys;
        let app = &mut self.app;

        self.terminal
            .draw(|f| {
                view_result =
                    view::render_dashboard(app, f, &active_component, section, keys, &palette);
            })
            .map_err(|e| AppError::Component(format!("Failed to draw frame: {e}")))?;

        view_result
    }

    /// Rebuild the content area from the current section, its controls and the
    /// creator state.
    pub fn remount_section_view(&mut self) -> AppResult<()> {
        self.app.remount_with_state(
            ComponentId::SectionView,
            SectionView::new(
                self.state.active_section(),
                self.state.creator_snapshot(),
                self.state.controls(),
                self.state.palette(),
            ),
            Vec::default(),
        )?;
        self.set_redraw(true);
        Ok(())
    }

    pub fn set_redraw(&mut self, redraw: bool) {
        self.state_manager.set_redraw(redraw);
    }

    pub fn set_quit(&mut self, quit: bool) {
        self.state_manager.quit = quit;
    }
}
