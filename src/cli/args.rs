use crate::core::{ExchangeError, ProviderKind};
use clap::Parser;
use clap::error::ErrorKind;

#[derive(Parser, Debug)]
#[command(name = "exchange", version, about)]
pub struct Cli {
    /// Currency to convert from, e.g. usd
    pub from: String,

    /// Currency to convert to, e.g. eur
    pub to: String,

    /// Amount in the source currency
    #[arg(allow_negative_numbers = true)]
    pub amount: Option<String>,

    /// Exchange rate provider, overrides the configuration file
    #[arg(short, long, value_enum)]
    pub provider: Option<ProviderKind>,

    /// Request timeout in seconds
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Path to optional configuration file
    #[arg(short, long)]
    pub config_path: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// One-line diagnostic for an argument error. Missing or surplus positionals
/// get the bare usage line, anything else also names the rejected input.
pub fn usage_message(err: &clap::Error) -> String {
    let usage = ExchangeError::Usage.to_string();
    if matches!(
        err.kind(),
        ErrorKind::MissingRequiredArgument | ErrorKind::TooManyValues
    ) {
        return usage;
    }

    let rendered = err.to_string();
    let detail = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ");
    if detail.is_empty() {
        usage
    } else {
        format!("{usage} ({detail})")
    }
}
