mod config;
mod core;
mod errors;
mod logging;
mod memory;
mod models;
mod providers;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use dotenv::dotenv;
use tracing::info;

use crate::config::Config;
use crate::errors::ConfigError;
use crate::core::runtime::Runtime;
use crate::memory::PollState;
use crate::providers::{practicum::Practicum, telegram::Telegram};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, anyhow::Error> {
    if let Err(e) = dotenv() {
        eprintln!("Error loading .env file: {}", e);
    }

    let log_file = env::var_os("LOG_FILE").map(PathBuf::from);
    logging::init_logging(log_file.as_deref())?;

    let config = match startup(Config::from_env()) {
        Ok(config) => config,
        Err(code) => return Ok(code),
    };

    info!(
        endpoint = %config.endpoint,
        statuses = ?config.verdicts.codes().collect::<Vec<_>>(),
        "Configuration loaded"
    );

    let practicum = Practicum::new(
        &config.endpoint,
        config.credentials.practicum_token(),
        config.request_timeout,
    )?;
    let mut telegram = Telegram::new(
        config.credentials.telegram_token(),
        config.credentials.telegram_chat_id(),
    );
    if let Some(api_url) = config.telegram_api_url.clone() {
        telegram = telegram.with_api_url(api_url);
    }

    let mut runtime = Runtime::new(
        practicum,
        telegram,
        config.verdicts.clone(),
        config.retry_period,
        PollState::default(),
    );

    tokio::select! {
        result = runtime.run_periodically() => result?,
        _ = tokio::signal::ctrl_c() => info!("Received interrupt, shutting down"),
    }

    Ok(ExitCode::SUCCESS)
}

/// Validates the loaded configuration before anything touches the network.
/// Failures are logged as critical and turned into the process exit code.
fn startup(loaded: Result<Config, ConfigError>) -> Result<Config, ExitCode> {
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            critical!("Invalid configuration: {}", e);
            return Err(ExitCode::FAILURE);
        }
    };

    if !config.credentials.check_tokens() {
        critical!(
            missing = ?config.credentials.missing(),
            "Required credentials are missing, the bot cannot start"
        );
        return Err(ExitCode::FAILURE);
    }

    Ok(config)
}
