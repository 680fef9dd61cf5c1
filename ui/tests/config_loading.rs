use claims::{assert_err, assert_ok};
use engine::{Section, Theme};
use orchestrator::app::model::event_listener;
use orchestrator::config::{ConfigLoadResult, ConfigValidationError, load_config_file};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = assert_ok!(tempfile::Builder::new().suffix(".toml").tempfile());
    assert_ok!(file.write_all(contents.as_bytes()));
    file
}

fn load(contents: &str) -> orchestrator::config::AppConfig {
    let file = write_config(contents);
    match load_config_file(file.path()) {
        ConfigLoadResult::Success(config) => *config,
        ConfigLoadResult::LoadError(e) | ConfigLoadResult::DeserializeError(e) => {
            panic!("config failed to load: {e}")
        }
    }
}

#[test]
fn test_full_config_file() {
    let config = load(
        r#"
theme = "neon"
default_section = "creator"
generation_delay_ms = 500
poll_timeout_ms = 20

[keys]
key_quit = "x"
key_generate = "G"

[logging]
level = "debug"
file = "custom.log"
"#,
    );

    assert_ok!(config.validate());
    assert_eq!(config.theme(), Theme::Neon);
    assert_eq!(config.default_section(), Section::Creator);
    assert_eq!(config.generation_delay(), Duration::from_millis(500));
    assert_eq!(config.poll_timeout(), Duration::from_millis(20));
    assert_eq!(config.keys().quit(), 'x');
    assert_eq!(config.keys().generate(), 'G');
    assert_eq!(config.keys().theme(), 't');
    assert_eq!(config.logging().level(), "debug");
    assert_eq!(config.logging().file(), Some("custom.log"));
}

#[test]
fn test_empty_file_uses_defaults() {
    let config = load("");
    assert_ok!(config.validate());
    assert_eq!(config.theme(), Theme::Light);
    assert_eq!(config.default_section(), Section::Dashboard);
}

#[test]
fn test_invalid_theme_is_reported_and_default_kept() {
    let config = load(r#"theme = "sepia""#);

    let errors = assert_err!(config.validate());
    assert_eq!(errors.len(), 1);
    assert!(matches!(&errors[0], ConfigValidationError::Theme(e) if e.name == "sepia"));
    assert!(!errors[0].is_fatal());
    assert_eq!(config.theme(), Theme::Light);
}

#[test]
fn test_unknown_section_falls_back_to_dashboard() {
    let config = load(r#"default_section = "billing""#);
    assert_ok!(config.validate());
    assert_eq!(config.default_section(), Section::Dashboard);
}

#[test]
fn test_out_of_range_delay_is_fatal() {
    let config = load("generation_delay_ms = 70000");
    let errors = assert_err!(config.validate());
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigValidationError::GenerationDelay {
            configured: 70_000,
            ..
        }
    )));
    assert!(errors.iter().all(ConfigValidationError::is_fatal));
}

#[test]
fn test_wrong_type_is_a_deserialize_error() {
    let file = write_config(r#"generation_delay_ms = "soon""#);
    assert!(matches!(
        load_config_file(file.path()),
        ConfigLoadResult::DeserializeError(_)
    ));
}

#[test]
fn test_missing_file_is_a_load_error() {
    let dir = assert_ok!(tempfile::tempdir());
    let path = dir.path().join("missing.toml");
    assert!(matches!(
        load_config_file(&path),
        ConfigLoadResult::LoadError(_)
    ));
}

#[test]
fn test_zero_poll_timeout_still_builds_listener() {
    let config = load("poll_timeout_ms = 0");

    let errors = assert_err!(config.validate());
    assert!(matches!(
        errors[0],
        ConfigValidationError::PollTimeout { configured: 0, .. }
    ));
    assert!(errors[0].is_fatal());

    // The error screen for this file runs on the same listener settings
    assert_eq!(config.poll_timeout(), Duration::from_millis(1));
    let _listener = event_listener(&config);
}

#[test]
fn test_zero_tick_and_input_intervals_are_fatal() {
    let config = load(
        r#"
tick_interval_millis = 0
crossterm_input_listener_interval_ms = 0
"#,
    );

    let errors = assert_err!(config.validate());
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(ConfigValidationError::is_fatal));
    let _listener = event_listener(&config);
}
