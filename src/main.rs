use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use exchange::cli::args::{Cli, usage_message};
use exchange::cli::ui;
use exchange::core::config::AppConfig;
use exchange::core::log::init_logging;
use exchange::core::{ConversionRequest, ExchangeError};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", ui::style_text(&usage_message(&e), ui::StyleType::Error));
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.verbose);

    match convert(cli).await {
        Ok(line) => {
            println!("{}", ui::style_text(&line, ui::StyleType::Result));
            ExitCode::SUCCESS
        }
        Err(e) => {
            let network = e
                .downcast_ref::<ExchangeError>()
                .is_some_and(ExchangeError::is_network);
            // The message itself is printed below
            tracing::debug!(network, "Conversion failed");
            eprintln!("{}", ui::style_text(&format!("{e:#}"), ui::StyleType::Error));
            ExitCode::FAILURE
        }
    }
}

async fn convert(cli: Cli) -> Result<String> {
    // Local input is checked before any network I/O
    let request = ConversionRequest::parse(&cli.from, &cli.to, cli.amount.as_deref())?;

    let mut config = AppConfig::load(cli.config_path.as_deref()).context("Failed to load configuration")?;
    if let Some(provider) = cli.provider {
        config.provider = provider;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    tracing::debug!(?config, "Resolved configuration");

    Ok(exchange::run(&request, &config).await?)
}
