//! Simulated creative generation.
//!
//! The creator studio pretends to generate a creative: a non-empty prompt is
//! submitted, a fixed delay elapses, the flow returns to idle with the prompt
//! cleared. Nothing is produced besides a completion counter. The delay itself
//! is driven by the caller (see [`crate::taskpool::TaskPool`]).

use crate::catalog::creator::PROMPT_PRESETS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    Generating,
}

/// Why [`GenerationFlow::begin`] refused to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GenerationRejected {
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error("a generation is already running")]
    AlreadyRunning,
}

#[derive(Debug, Clone)]
pub struct GenerationFlow {
    state: GenerationState,
    prompt: String,
    preset_cursor: Option<usize>,
    completed: u32,
}

impl GenerationFlow {
    pub fn new() -> Self {
        Self {
            state: GenerationState::Idle,
            prompt: String::new(),
            preset_cursor: None,
            completed: 0,
        }
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    pub fn is_generating(&self) -> bool {
        self.state == GenerationState::Generating
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Load the next preset prompt, wrapping around. Ignored while generating.
    pub fn next_preset(&mut self) -> &str {
        if !self.is_generating() {
            let next = self
                .preset_cursor
                .map_or(0, |cursor| (cursor + 1) % PROMPT_PRESETS.len());
            self.preset_cursor = Some(next);
            self.prompt = PROMPT_PRESETS[next].to_string();
        }
        &self.prompt
    }

    /// Start generating. Returns the submitted prompt.
    pub fn begin(&mut self) -> Result<String, GenerationRejected> {
        if self.is_generating() {
            return Err(GenerationRejected::AlreadyRunning);
        }
        if self.prompt.trim().is_empty() {
            return Err(GenerationRejected::EmptyPrompt);
        }
        self.state = GenerationState::Generating;
        log::info!("Generation started: {}", self.prompt);
        Ok(self.prompt.clone())
    }

    /// Finish the running generation: back to idle, prompt cleared. A finish
    /// without a running generation is ignored and returns `false`.
    pub fn finish(&mut self) -> bool {
        if !self.is_generating() {
            log::debug!("Ignoring generation finish while idle");
            return false;
        }
        self.state = GenerationState::Idle;
        self.prompt.clear();
        self.completed += 1;
        log::info!("Generation finished ({} total)", self.completed);
        true
    }
}

impl Default for GenerationFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err_eq, assert_ok_eq};

    #[test]
    fn test_empty_prompt_is_rejected() {
        let mut flow = GenerationFlow::new();
        assert_err_eq!(flow.begin(), GenerationRejected::EmptyPrompt);
        flow.set_prompt("   ");
        assert_err_eq!(flow.begin(), GenerationRejected::EmptyPrompt);
        assert_eq!(flow.state(), GenerationState::Idle);
    }

    #[test]
    fn test_full_cycle_clears_prompt() {
        let mut flow = GenerationFlow::new();
        flow.set_prompt("Summer promo");
        assert_ok_eq!(flow.begin(), "Summer promo".to_string());
        assert!(flow.is_generating());
        assert_err_eq!(flow.begin(), GenerationRejected::AlreadyRunning);

        assert!(flow.finish());
        assert_eq!(flow.state(), GenerationState::Idle);
        assert_eq!(flow.prompt(), "");
        assert_eq!(flow.completed(), 1);
    }

    #[test]
    fn test_finish_while_idle_is_ignored() {
        let mut flow = GenerationFlow::new();
        assert!(!flow.finish());
        assert_eq!(flow.completed(), 0);
    }

    #[test]
    fn test_presets_cycle_and_freeze_while_generating() {
        let mut flow = GenerationFlow::new();
        let first = flow.next_preset().to_string();
        assert_eq!(first, PROMPT_PRESETS[0]);
        let second = flow.next_preset().to_string();
        assert_eq!(second, PROMPT_PRESETS[1 % PROMPT_PRESETS.len()]);

        flow.begin().expect("prompt loaded");
        assert_eq!(flow.next_preset(), second);

        for _ in 0..PROMPT_PRESETS.len() {
            flow.finish();
            flow.next_preset();
        }
        assert!(!flow.prompt().is_empty());
    }
}
