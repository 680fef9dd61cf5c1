use super::{LoggingConfig, keys::KeyBindingsConfig, validation::ConfigValidationError};
use engine::{Section, Theme};
use serde::Deserialize;
use std::time::Duration;

pub const MIN_GENERATION_DELAY_MS: u64 = 100;
pub const MAX_GENERATION_DELAY_MS: u64 = 60_000;
pub const MIN_POLL_TIMEOUT_MS: u64 = 1;
pub const MAX_POLL_TIMEOUT_MS: u64 = 1_000;
pub const MIN_TICK_INTERVAL_MS: u64 = 10;
pub const MAX_TICK_INTERVAL_MS: u64 = 10_000;
pub const MIN_INPUT_INTERVAL_MS: u64 = 1;
pub const MAX_INPUT_INTERVAL_MS: u64 = 1_000;

const DEFAULT_GENERATION_DELAY_MS: u64 = 3_000;
const DEFAULT_POLL_TIMEOUT_MS: u64 = 50;
const DEFAULT_TICK_INTERVAL_MS: u64 = 250;
const DEFAULT_INPUT_INTERVAL_MS: u64 = 20;

/// Main application configuration
#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    theme: Option<String>,
    default_section: Option<String>,
    generation_delay_ms: Option<u64>,
    crossterm_input_listener_interval_ms: Option<u64>,
    crossterm_input_listener_retries: Option<usize>,
    poll_timeout_ms: Option<u64>,
    tick_interval_millis: Option<u64>,

    #[serde(default)]
    keys: KeyBindingsConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if let Some(name) = self.theme.as_deref() {
            if let Err(e) = name.parse::<Theme>() {
                errors.push(ConfigValidationError::Theme(e));
            }
        }

        let delay = self.generation_delay_ms();
        if !(MIN_GENERATION_DELAY_MS..=MAX_GENERATION_DELAY_MS).contains(&delay) {
            errors.push(ConfigValidationError::GenerationDelay {
                configured: delay,
                min_limit: MIN_GENERATION_DELAY_MS,
                max_limit: MAX_GENERATION_DELAY_MS,
            });
        }

        let poll = self.poll_timeout_ms();
        if !(MIN_POLL_TIMEOUT_MS..=MAX_POLL_TIMEOUT_MS).contains(&poll) {
            errors.push(ConfigValidationError::PollTimeout {
                configured: poll,
                min_limit: MIN_POLL_TIMEOUT_MS,
                max_limit: MAX_POLL_TIMEOUT_MS,
            });
        }

        let tick = self.tick_interval_ms();
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&tick) {
            errors.push(ConfigValidationError::TickInterval {
                configured: tick,
                min_limit: MIN_TICK_INTERVAL_MS,
                max_limit: MAX_TICK_INTERVAL_MS,
            });
        }

        let input = self.input_interval_ms();
        if !(MIN_INPUT_INTERVAL_MS..=MAX_INPUT_INTERVAL_MS).contains(&input) {
            errors.push(ConfigValidationError::InputInterval {
                configured: input,
                min_limit: MIN_INPUT_INTERVAL_MS,
                max_limit: MAX_INPUT_INTERVAL_MS,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Configured theme. Invalid names are reported by [`AppConfig::validate`]
    /// and resolve to the default here.
    pub fn theme(&self) -> Theme {
        self.theme
            .as_deref()
            .and_then(|name| name.parse().ok())
            .unwrap_or_default()
    }

    pub fn default_section(&self) -> Section {
        self.default_section
            .as_deref()
            .map(Section::from_id_or_default)
            .unwrap_or_default()
    }

    pub fn generation_delay_ms(&self) -> u64 {
        self.generation_delay_ms.unwrap_or(DEFAULT_GENERATION_DELAY_MS)
    }

    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms())
    }

    fn input_interval_ms(&self) -> u64 {
        self.crossterm_input_listener_interval_ms
            .unwrap_or(DEFAULT_INPUT_INTERVAL_MS)
    }

    fn poll_timeout_ms(&self) -> u64 {
        self.poll_timeout_ms.unwrap_or(DEFAULT_POLL_TIMEOUT_MS)
    }

    fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_millis.unwrap_or(DEFAULT_TICK_INTERVAL_MS)
    }

    /// Timings are clamped to the validated range; the event listener
    /// rejects zero durations.
    pub fn crossterm_input_listener_interval(&self) -> Duration {
        Duration::from_millis(
            self.input_interval_ms()
                .clamp(MIN_INPUT_INTERVAL_MS, MAX_INPUT_INTERVAL_MS),
        )
    }

    pub fn crossterm_input_listener_retries(&self) -> usize {
        self.crossterm_input_listener_retries.unwrap_or(5)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(
            self.poll_timeout_ms()
                .clamp(MIN_POLL_TIMEOUT_MS, MAX_POLL_TIMEOUT_MS),
        )
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(
            self.tick_interval_ms()
                .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS),
        )
    }

    pub fn keys(&self) -> &KeyBindingsConfig {
        &self.keys
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_ok!(config.validate());
        assert_eq!(config.theme(), Theme::Light);
        assert_eq!(config.default_section(), Section::Dashboard);
        assert_eq!(config.generation_delay(), Duration::from_millis(3_000));
        assert_eq!(config.poll_timeout(), Duration::from_millis(50));
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert_eq!(config.crossterm_input_listener_retries(), 5);
    }

    #[test]
    fn test_unknown_theme_is_a_validation_error() {
        let config = AppConfig {
            theme: Some("sepia".to_string()),
            ..AppConfig::default()
        };
        let errors = assert_err!(config.validate());
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ConfigValidationError::Theme(_)));
        assert_eq!(config.theme(), Theme::Light);
    }

    #[test]
    fn test_unknown_section_falls_back() {
        let config = AppConfig {
            default_section: Some("billing".to_string()),
            ..AppConfig::default()
        };
        assert_ok!(config.validate());
        assert_eq!(config.default_section(), Section::Dashboard);
    }

    #[test]
    fn test_out_of_range_values_are_collected() {
        let config = AppConfig {
            generation_delay_ms: Some(5),
            poll_timeout_ms: Some(0),
            ..AppConfig::default()
        };
        let errors = assert_err!(config.validate());
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.is_fatal()));
    }

    #[test]
    fn test_zero_intervals_are_rejected_and_clamped() {
        let config = AppConfig {
            poll_timeout_ms: Some(0),
            tick_interval_millis: Some(0),
            crossterm_input_listener_interval_ms: Some(0),
            ..AppConfig::default()
        };
        let errors = assert_err!(config.validate());
        assert_eq!(errors.len(), 3);
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ConfigValidationError::TickInterval { configured: 0, .. }))
        );
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ConfigValidationError::InputInterval { configured: 0, .. }))
        );

        assert_eq!(config.poll_timeout(), Duration::from_millis(MIN_POLL_TIMEOUT_MS));
        assert_eq!(config.tick_interval(), Duration::from_millis(MIN_TICK_INTERVAL_MS));
        assert_eq!(
            config.crossterm_input_listener_interval(),
            Duration::from_millis(MIN_INPUT_INTERVAL_MS)
        );
    }
}
