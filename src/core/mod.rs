//! Core business logic abstractions

pub mod config;
pub mod currency;
pub mod error;
pub mod log;
pub mod provider;

// Re-export main types for cleaner imports
pub use currency::{Conversion, ConversionRequest, CurrencyCode};
pub use error::ExchangeError;
pub use provider::{ProviderKind, RateProvider};
