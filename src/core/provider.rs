//! Exchange rate provider abstraction

use crate::core::currency::CurrencyCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;

/// Response-shape contract of one exchange rate API.
///
/// Implementations only interpret an already parsed document; the HTTP
/// exchange lives in [`crate::fetcher::RateFetcher`].
pub trait RateProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// URL returning the rates for `base`.
    fn build_url(&self, base: &CurrencyCode) -> String;

    /// Provider specific success check. The base code is checked separately.
    fn validate(&self, document: &Value) -> bool;

    fn extract_base_code<'a>(&self, document: &'a Value) -> Option<&'a str>;

    fn extract_rates<'a>(&self, document: &'a Value) -> Option<&'a Map<String, Value>>;

    /// Unix timestamp of the last rate update.
    fn extract_timestamp(&self, document: &Value) -> Option<i64>;
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// open.er-api.com
    #[default]
    OpenErApi,
    /// api.exchangerate-api.com
    ExchangerateApi,
}

impl Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ProviderKind::OpenErApi => "open_er_api",
                ProviderKind::ExchangerateApi => "exchangerate_api",
            }
        )
    }
}
