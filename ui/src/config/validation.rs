use super::app::AppConfig;
use engine::{InvalidThemeError, Theme};

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid theme: {0}")]
    Theme(#[from] InvalidThemeError),
    #[error("Invalid generation_delay_ms: {configured} (min: {min_limit}, max: {max_limit})")]
    GenerationDelay {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid poll_timeout_ms: {configured} (min: {min_limit}, max: {max_limit})")]
    PollTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid tick_interval_millis: {configured} (min: {min_limit}, max: {max_limit})")]
    TickInterval {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error(
        "Invalid crossterm_input_listener_interval_ms: {configured} (min: {min_limit}, max: {max_limit})"
    )]
    InputInterval {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
}

impl ConfigValidationError {
    /// Fatal errors stop startup. An unknown theme only falls back to the default.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ConfigValidationError::Theme(_))
    }

    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::Theme(e) => {
                let valid: Vec<&str> = Theme::ALL.iter().map(|t| t.id()).collect();
                format!(
                    "Unknown theme '{}'!\n\n\
                    Valid themes: {}\n\n\
                    Falling back to the {} theme. Please update theme in config.toml.",
                    e.name,
                    valid.join(", "),
                    Theme::default()
                )
            }
            ConfigValidationError::GenerationDelay {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Generation delay out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update generation_delay_ms in config.toml to a value between {min_limit} and {max_limit}."
                )
            }
            ConfigValidationError::PollTimeout {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Poll timeout out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update poll_timeout_ms in config.toml to a value between {min_limit} and {max_limit}."
                )
            }
            ConfigValidationError::TickInterval {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Tick interval out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update tick_interval_millis in config.toml to a value between {min_limit} and {max_limit}."
                )
            }
            ConfigValidationError::InputInterval {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Input listener interval out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update crossterm_input_listener_interval_ms in config.toml to a value between {min_limit} and {max_limit}."
                )
            }
        }
    }
}

/// Configuration loading result
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}
