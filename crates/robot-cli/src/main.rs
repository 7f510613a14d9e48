mod cli;
mod config;
mod error;
mod output;

use std::process::ExitCode;

use clap::Parser;
use robot_api::RobotClient;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Usage errors exit here, before config or network.
    let cli = Cli::parse();

    // Init tracing
    let default_level = if config::debug_enabled(|key| std::env::var(key).ok()) {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(out) => {
            if !out.is_empty() {
                print!("{out}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let config = AppConfig::from_env()?;
    tracing::debug!(user = config.account.user(), url = %config.robot_url, "loaded config");

    let client = RobotClient::with_base_url(config.account, &config.robot_url)?;
    cli::run(cli, &client).await
}
