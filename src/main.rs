use std::process::ExitCode;

use anyhow::{Context, anyhow};
use tracing::{debug, info};

use person_pipeline::{Cli, ConfigManager, Output, PersonPipeline, logging};

/// A record failed validation or the save gate
const EXIT_REJECTED: u8 = 1;
/// Bad arguments, configuration or input
const EXIT_USAGE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_USAGE)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    cli.validate().map_err(|e| anyhow!(e))?;

    let config = ConfigManager::load_config(&cli)
        .await
        .context("failed to load configuration")?;
    let _log_guard = logging::init_logging(&config).context("failed to initialize logging")?;
    debug!(?config, "configuration loaded");

    let output = Output::from_config(&config);
    let pipeline = PersonPipeline::standard();
    let command = cli.command.name();

    match cli.command.execute(&pipeline) {
        Ok(outcome) => {
            info!(command, "command succeeded");
            if let Some(text) = output.format_outcome(command, &outcome) {
                println!("{}", text);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_rejection() => {
            info!(command, error = %e, "record rejected");
            eprintln!("{}", output.format_error(command, &e));
            Ok(ExitCode::from(EXIT_REJECTED))
        }
        Err(e) => Err(e).with_context(|| format!("{} failed", command)),
    }
}
