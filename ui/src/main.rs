use anyhow::anyhow;
use clap::Parser;
use orchestrator::app::application_lifecycle::{ApplicationLifecycle, StartupOptions};
use orchestrator::cli::Cli;
use orchestrator::config::{self, ConfigLoadResult};
use orchestrator::logger::setup_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match config::load_config(cli.config.as_deref()) {
        ConfigLoadResult::Success(config) => config,
        ConfigLoadResult::LoadError(message) | ConfigLoadResult::DeserializeError(message) => {
            eprintln!("Critical Error: {message}");
            return Err(anyhow!(message));
        }
    };

    setup_logger(config.logging())?;

    let options = StartupOptions::resolve(&config, cli.theme(), cli.section());
    let Some(mut model) =
        ApplicationLifecycle::start(&config, options).map_err(|e| anyhow!("{e}"))?
    else {
        return Ok(());
    };

    ApplicationLifecycle::setup_terminal(&mut model).map_err(|e| anyhow!("{e}"))?;
    let run_result = ApplicationLifecycle::run_application_loop(&mut model);
    ApplicationLifecycle::shutdown_application(model).map_err(|e| anyhow!("{e}"))?;
    run_result.map_err(|e| anyhow!("{e}"))
}
