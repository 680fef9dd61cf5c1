use crate::components::common::CreatorActivityMsg;
use crate::components::section_view::CreatorSnapshot;
use crate::theme::PaletteHandle;
use engine::generation::{GenerationFlow, GenerationRejected};
use engine::{Section, Theme, ThemeStore, ViewAction, ViewControls, ViewShell};

/// What a creator message did to the generation flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatorOutcome {
    /// Nothing changed: outside the creator studio, prompt locked, or no
    /// generation was running.
    Ignored,
    PromptChanged(String),
    /// A generation started; the caller schedules its completion.
    Started(String),
    Rejected(GenerationRejected),
    /// A generation was counted. `visible` is `true` when the creator studio
    /// is on screen and needs a refresh.
    Finished { visible: bool },
}

/// Everything the dashboard remembers between frames. Nothing here is
/// persisted; a restart begins from configuration again.
pub struct DashboardState {
    themes: ThemeStore,
    shell: ViewShell,
    palette: PaletteHandle,
    generation: GenerationFlow,
    controls: ViewControls,
}

impl DashboardState {
    pub fn new(theme: Theme, section: Section) -> Self {
        let mut themes = ThemeStore::with_theme(theme);
        let palette = PaletteHandle::new(theme);
        // The palette lives as long as the store, so the id is never needed.
        themes.subscribe(palette.clone());

        let mut shell = ViewShell::new();
        shell.select(section);

        Self {
            themes,
            shell,
            palette,
            generation: GenerationFlow::new(),
            controls: ViewControls::new(),
        }
    }

    /// Handle to the palette that follows the theme store.
    pub fn palette(&self) -> PaletteHandle {
        self.palette.clone()
    }

    pub fn theme(&self) -> Theme {
        self.themes.theme()
    }

    pub fn active_section(&self) -> Section {
        self.shell.active_section()
    }

    pub fn generation(&self) -> &GenerationFlow {
        &self.generation
    }

    pub fn creator_snapshot(&self) -> CreatorSnapshot {
        CreatorSnapshot::from_flow(&self.generation)
    }

    pub fn controls(&self) -> ViewControls {
        self.controls
    }

    pub fn apply_theme(&mut self, theme: Theme) {
        self.themes.set_theme(theme);
    }

    /// Advance to the next theme in selector order.
    pub fn cycle_theme(&mut self) -> Theme {
        let next = self.themes.theme().next();
        self.themes.set_theme(next);
        next
    }

    /// Returns `true` when the active section changed.
    pub fn select_section(&mut self, section: Section) -> bool {
        let previous = self.shell.active_section();
        self.shell.select(section);
        previous != section
    }

    /// Apply a section-local action to the active section's controls.
    /// Returns `true` when the content area needs a refresh.
    pub fn apply_view_action(&mut self, action: ViewAction) -> bool {
        self.controls.apply(self.shell.active_section(), action)
    }

    /// Preset and generate requests only act inside the creator studio.
    /// Completion is not a request and always counts, wherever the user is.
    pub fn apply_creator(&mut self, msg: &CreatorActivityMsg) -> CreatorOutcome {
        let in_creator = self.shell.active_section() == Section::Creator;
        match msg {
            CreatorActivityMsg::NextPreset | CreatorActivityMsg::Generate if !in_creator => {
                log::debug!("Ignoring {msg:?} outside the creator studio");
                CreatorOutcome::Ignored
            }
            CreatorActivityMsg::NextPreset => {
                if self.generation.is_generating() {
                    log::debug!("Prompt is locked while generating");
                    return CreatorOutcome::Ignored;
                }
                let prompt = self.generation.next_preset().to_string();
                log::debug!("Prompt preset loaded: {prompt}");
                CreatorOutcome::PromptChanged(prompt)
            }
            CreatorActivityMsg::Generate => match self.generation.begin() {
                Ok(prompt) => CreatorOutcome::Started(prompt),
                Err(rejected) => {
                    log::debug!("Generate ignored: {rejected}");
                    CreatorOutcome::Rejected(rejected)
                }
            },
            CreatorActivityMsg::GenerationFinished => {
                if self.generation.finish() {
                    CreatorOutcome::Finished {
                        visible: in_creator,
                    }
                } else {
                    CreatorOutcome::Ignored
                }
            }
        }
    }
}
