use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod app;
pub mod keys;
pub mod validation;

pub use app::AppConfig;
pub use keys::KeyBindingsConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Prefix for environment overrides, e.g. `ORCHESTRATOR__THEME=neon`.
pub const ENV_PREFIX: &str = "ORCHESTRATOR";

const APP_DIR: &str = "orchestrator";
const CONFIG_FILE: &str = "config.toml";

/// Per-user configuration file, `$XDG_CONFIG_HOME/orchestrator/config.toml` on Linux.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load configuration from every source, lowest priority first: `config.toml`
/// in the working directory, the per-user file, `extra_file` when given, then
/// environment variables. Only `extra_file` is required to exist.
pub fn load_config(extra_file: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let mut builder = Config::builder().add_source(File::with_name(CONFIG_FILE).required(false));

    if let Some(user_file) = user_config_path() {
        builder = builder.add_source(File::from(user_file).required(false));
    }

    if let Some(path) = extra_file {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    finish(builder)
}

/// Load configuration from a single file, ignoring every other source.
pub fn load_config_file(path: &Path) -> ConfigLoadResult {
    finish(Config::builder().add_source(File::from(path).required(true)))
}

fn finish(builder: ConfigBuilder<DefaultState>) -> ConfigLoadResult {
    let config = match builder.build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => ConfigLoadResult::Success(Box::new(app_config)),
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
