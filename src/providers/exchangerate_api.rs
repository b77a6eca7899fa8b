use crate::core::{CurrencyCode, RateProvider};
use serde_json::{Map, Value};

const PROVIDER_ID: &str = "https://www.exchangerate-api.com";

/// Legacy v4 endpoint of api.exchangerate-api.com.
pub struct ExchangerateApiProvider {
    base_url: String,
}

impl ExchangerateApiProvider {
    pub fn new(base_url: &str) -> Self {
        ExchangerateApiProvider {
            base_url: base_url.to_string(),
        }
    }
}

/// Success is signalled by the `provider` field; an explicit
/// `"result": "error"` overrides it.
pub fn is_success(document: &Value) -> bool {
    let Some(provider) = document.get("provider") else {
        return false;
    };
    if document.get("result").and_then(Value::as_str) == Some("error") {
        return false;
    }
    provider.as_str() == Some(PROVIDER_ID)
}

impl RateProvider for ExchangerateApiProvider {
    fn name(&self) -> &'static str {
        "api.exchangerate-api.com"
    }

    fn build_url(&self, base: &CurrencyCode) -> String {
        format!("{}{}", self.base_url, base)
    }

    fn validate(&self, document: &Value) -> bool {
        is_success(document)
    }

    fn extract_base_code<'a>(&self, document: &'a Value) -> Option<&'a str> {
        document.get("base").and_then(Value::as_str)
    }

    fn extract_rates<'a>(&self, document: &'a Value) -> Option<&'a Map<String, Value>> {
        document.get("rates").and_then(Value::as_object)
    }

    fn extract_timestamp(&self, document: &Value) -> Option<i64> {
        document.get("time_last_updated").and_then(Value::as_i64)
    }
}
