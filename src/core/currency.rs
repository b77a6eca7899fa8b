//! Currency conversion types

use crate::core::error::ExchangeError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An ISO-style currency code, always stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: &str) -> Self {
        CurrencyCode(code.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub amount: f64,
}

impl ConversionRequest {
    /// Builds a request from raw command line values. The amount defaults to 1.
    pub fn parse(from: &str, to: &str, amount: Option<&str>) -> Result<Self, ExchangeError> {
        let amount = match amount {
            Some(raw) => parse_amount(raw)?,
            None => 1.0,
        };

        Ok(ConversionRequest {
            from: CurrencyCode::new(from),
            to: CurrencyCode::new(to),
            amount,
        })
    }
}

fn parse_amount(raw: &str) -> Result<f64, ExchangeError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ExchangeError::AmountParse(raw.to_string())),
    }
}

/// Outcome of a single conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Unix timestamp of the provider's last rate update
    pub updated_at: i64,
    pub rate: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub amount: f64,
}

impl Conversion {
    pub fn converted_amount(&self) -> f64 {
        self.amount * self.rate
    }
}
