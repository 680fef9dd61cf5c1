use serde::Deserialize;

/// Key bindings configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct KeyBindingsConfig {
    // Global keys
    key_quit: Option<char>,
    key_theme: Option<char>,
    key_cycle_theme: Option<char>,

    // Creator studio
    key_generate: Option<char>,
    key_next_prompt: Option<char>,

    // Section controls
    key_next_option: Option<char>,
    key_alt_option: Option<char>,
    key_toggle: Option<char>,

    // Navigation keys
    key_down: Option<char>,
    key_up: Option<char>,
}

impl KeyBindingsConfig {
    // Global keys
    pub fn quit(&self) -> char {
        self.key_quit.unwrap_or('q')
    }

    pub fn theme(&self) -> char {
        self.key_theme.unwrap_or('t')
    }

    pub fn cycle_theme(&self) -> char {
        self.key_cycle_theme.unwrap_or('T')
    }

    // Creator studio
    pub fn generate(&self) -> char {
        self.key_generate.unwrap_or('g')
    }

    pub fn next_prompt(&self) -> char {
        self.key_next_prompt.unwrap_or('p')
    }

    // Section controls
    pub fn next_option(&self) -> char {
        self.key_next_option.unwrap_or('n')
    }

    pub fn alt_option(&self) -> char {
        self.key_alt_option.unwrap_or('m')
    }

    pub fn toggle(&self) -> char {
        self.key_toggle.unwrap_or('o')
    }

    // Navigation keys
    pub fn down(&self) -> char {
        self.key_down.unwrap_or('j')
    }

    pub fn up(&self) -> char {
        self.key_up.unwrap_or('k')
    }
}
