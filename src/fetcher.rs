use crate::core::{Conversion, ConversionRequest, CurrencyCode, ExchangeError, RateProvider};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Runs one conversion against a single provider.
pub struct RateFetcher {
    client: reqwest::Client,
    provider: Box<dyn RateProvider>,
    timeout: Duration,
}

impl RateFetcher {
    pub fn new(provider: Box<dyn RateProvider>, timeout: Duration) -> Result<Self, ExchangeError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("exchange/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ExchangeError::Unknown(format!("Failed to build HTTP client: {e}")))?;

        Ok(RateFetcher {
            client,
            provider,
            timeout,
        })
    }

    /// Downloads and parses the rate document for `source`.
    ///
    /// The HTTP status is not inspected: providers answer unknown codes with
    /// an error document that [`RateFetcher::validate`] rejects.
    #[instrument(
        name = "RateFetch",
        skip(self, source),
        fields(provider = self.provider.name(), source = %source)
    )]
    pub async fn fetch_rates(&self, source: &CurrencyCode) -> Result<Value, ExchangeError> {
        let url = self.provider.build_url(source);
        debug!("Requesting exchange rates from {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        debug!(status = %response.status(), "Received provider response");

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        serde_json::from_str(&body).map_err(ExchangeError::Parse)
    }

    fn transport_error(&self, url: &str, source: reqwest::Error) -> ExchangeError {
        if source.is_timeout() {
            ExchangeError::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else {
            ExchangeError::Network {
                url: url.to_string(),
                source,
            }
        }
    }

    pub fn validate(&self, document: &Value, source: &CurrencyCode) -> bool {
        self.provider.validate(document)
            && self.provider.extract_base_code(document) == Some(source.as_str())
    }

    pub fn lookup_rate(&self, document: &Value, target: &CurrencyCode) -> Result<f64, ExchangeError> {
        let rate = self
            .provider
            .extract_rates(document)
            .and_then(|rates| rates.get(target.as_str()))
            .ok_or_else(|| ExchangeError::CurrencyNotFound(target.clone()))?;

        rate.as_f64()
            .ok_or_else(|| ExchangeError::Unknown(format!("Rate for {target} is not a number: {rate}")))
    }

    pub async fn convert(&self, request: &ConversionRequest) -> Result<Conversion, ExchangeError> {
        let document = self.fetch_rates(&request.from).await?;

        if !self.validate(&document, &request.from) {
            debug!(response = %document, "Response failed validation");
            return Err(ExchangeError::Validation(request.from.clone()));
        }

        let rate = self.lookup_rate(&document, &request.to)?;
        let updated_at = self
            .provider
            .extract_timestamp(&document)
            .ok_or_else(|| ExchangeError::Validation(request.from.clone()))?;

        Ok(Conversion {
            updated_at,
            rate,
            from: request.from.clone(),
            to: request.to.clone(),
            amount: request.amount,
        })
    }
}
