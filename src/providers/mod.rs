pub mod exchangerate_api;
pub mod open_er_api;

use crate::core::config::AppConfig;
use crate::core::{ProviderKind, RateProvider};
use exchangerate_api::ExchangerateApiProvider;
use open_er_api::OpenErApiProvider;

/// Instantiates the provider selected by `kind`, pointed at its configured base URL.
pub fn build_provider(kind: ProviderKind, config: &AppConfig) -> Box<dyn RateProvider> {
    let base_url = config.base_url(kind);
    match kind {
        ProviderKind::OpenErApi => Box::new(OpenErApiProvider::new(base_url)),
        ProviderKind::ExchangerateApi => Box::new(ExchangerateApiProvider::new(base_url)),
    }
}
