use crate::components::common::Msg;
use crate::components::sections::{
    self, admin, agents, brand_kit, creator, dashboard, performance, simulations, strategy,
};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::theme::PaletteHandle;
use engine::{Section, ViewControls};
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::props::Style;
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::widgets::Block;
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

pub use sections::creator::CreatorSnapshot;

/// Content area. Remounted whenever the active section, its controls or the
/// creator snapshot change; colours are read from the palette on every frame.
pub struct SectionView {
    section: Section,
    creator: CreatorSnapshot,
    controls: ViewControls,
    palette: PaletteHandle,
}

impl SectionView {
    pub fn new(
        section: Section,
        creator: CreatorSnapshot,
        controls: ViewControls,
        palette: PaletteHandle,
    ) -> Self {
        Self {
            section,
            creator,
            controls,
            palette,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }
}

impl MockComponent for SectionView {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let palette = self.palette.current();

        frame.render_widget(
            Block::default().style(Style::default().bg(palette.background)),
            area,
        );
        let inner = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };

        match self.section {
            Section::Strategy => strategy::render(frame, inner, &palette),
            Section::Dashboard => dashboard::render(frame, inner, &palette),
            Section::Creator => creator::render(
                frame,
                inner,
                &palette,
                &self.creator,
                &self.controls.creator,
            ),
            Section::BrandKit => brand_kit::render(frame, inner, &palette),
            Section::Simulations => simulations::render(frame, inner, &palette),
            Section::Agents => agents::render(frame, inner, &palette, &self.controls.agents),
            Section::Performance => {
                performance::render(frame, inner, &palette, &self.controls.performance)
            }
            Section::Admin => admin::render(frame, inner, &palette, self.controls.admin_tab),
        }
    }

    fn query(&self, _attr: Attribute) -> Option<AttrValue> {
        None
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        State::One(StateValue::String(self.section.id().to_string()))
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for SectionView {
    fn on(&mut self, _ev: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}

impl ComponentState for SectionView {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting section view for '{}'", self.section);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sections::test_support::render_to_text;
    use engine::Theme;

    #[test]
    fn test_every_section_renders_its_title() {
        let palette = PaletteHandle::new(Theme::Light);
        let titles = [
            (Section::Strategy, "Strategy Studio"),
            (Section::Dashboard, "Campaign Dashboard"),
            (Section::Creator, "Creator Studio"),
            (Section::BrandKit, "Brand Kit"),
            (Section::Simulations, "Simulations"),
            (Section::Agents, "Agents"),
            (Section::Performance, "Performance Cockpit"),
            (Section::Admin, "Admin Controls"),
        ];
        for (section, title) in titles {
            let mut view = SectionView::new(
                section,
                CreatorSnapshot::default(),
                ViewControls::default(),
                palette.clone(),
            );
            assert_eq!(view.section(), section);
            let text = render_to_text(150, 40, |f| view.view(f, f.area()));
            assert!(text.contains(title), "{section} should show {title}");
        }
    }
}
