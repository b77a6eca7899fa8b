//! Failure kinds of a conversion

use crate::core::currency::CurrencyCode;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("Usage: exchange <from> <to> [<amount>=1]")]
    Usage,

    #[error("Could not fetch exchange rates from {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} timed out after {}s", .timeout.as_secs())]
    Timeout { url: String, timeout: Duration },

    #[error("Could not parse exchange rate response")]
    Parse(#[source] serde_json::Error),

    #[error("Could not fetch exchange rates for source currency: '{0}'")]
    Validation(CurrencyCode),

    #[error("Could not fetch exchange rates for target currency: '{0}'")]
    CurrencyNotFound(CurrencyCode),

    #[error("Could not convert string to a number: '{0}'")]
    AmountParse(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ExchangeError {
    /// Transport level failures, timeouts included.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }
}
