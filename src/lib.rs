pub mod cli;
pub mod core;
pub mod fetcher;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::{ConversionRequest, ExchangeError};
use crate::fetcher::RateFetcher;
use tracing::{debug, info};

/// Converts `request` with the provider selected in `config` and returns the output line.
pub async fn run(request: &ConversionRequest, config: &AppConfig) -> Result<String, ExchangeError> {
    let provider = providers::build_provider(config.provider, config);
    info!(
        kind = %config.provider,
        provider = provider.name(),
        from = %request.from,
        to = %request.to,
        "Converting {}",
        request.amount
    );

    let fetcher = RateFetcher::new(provider, config.timeout())?;
    let conversion = fetcher.convert(request).await?;
    debug!(?conversion, "Conversion complete");

    conversion.display_line()
}
