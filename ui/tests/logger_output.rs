use claims::assert_ok;
use orchestrator::config::{ConfigLoadResult, load_config_file};
use orchestrator::logger::setup_logger;
use std::io::Write;

// The global logger can be installed once per process, so this binary holds a
// single test.
#[test]
fn test_logger_writes_startup_lines_to_the_file() {
    let dir = assert_ok!(tempfile::tempdir());
    let log_path = dir.path().join("orchestrator.log");

    let mut config_file = assert_ok!(tempfile::Builder::new().suffix(".toml").tempfile());
    assert_ok!(write!(
        config_file,
        "[logging]\nlevel = \"debug\"\nfile = {:?}\n",
        log_path.display().to_string()
    ));

    let config = match load_config_file(config_file.path()) {
        ConfigLoadResult::Success(config) => config,
        ConfigLoadResult::LoadError(e) | ConfigLoadResult::DeserializeError(e) => {
            panic!("config failed to load: {e}")
        }
    };

    assert_ok!(setup_logger(config.logging()));
    log::logger().flush();

    let written = assert_ok!(std::fs::read_to_string(&log_path));
    assert!(written.contains("Logging to file:"));
    assert!(written.contains("Logger initialized with level: debug"));
}
