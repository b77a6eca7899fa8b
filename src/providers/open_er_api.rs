use crate::core::{CurrencyCode, RateProvider};
use serde_json::{Map, Value};

/// Free tier of ExchangeRate-API served from open.er-api.com.
pub struct OpenErApiProvider {
    base_url: String,
}

impl OpenErApiProvider {
    pub fn new(base_url: &str) -> Self {
        OpenErApiProvider {
            base_url: base_url.to_string(),
        }
    }
}

/// A response is usable only when it carries `"result": "success"`.
pub fn is_success(document: &Value) -> bool {
    document.get("result").and_then(Value::as_str) == Some("success")
}

impl RateProvider for OpenErApiProvider {
    fn name(&self) -> &'static str {
        "open.er-api.com"
    }

    fn build_url(&self, base: &CurrencyCode) -> String {
        format!("{}{}", self.base_url, base)
    }

    fn validate(&self, document: &Value) -> bool {
        is_success(document)
    }

    fn extract_base_code<'a>(&self, document: &'a Value) -> Option<&'a str> {
        document.get("base_code").and_then(Value::as_str)
    }

    fn extract_rates<'a>(&self, document: &'a Value) -> Option<&'a Map<String, Value>> {
        document.get("rates").and_then(Value::as_object)
    }

    fn extract_timestamp(&self, document: &Value) -> Option<i64> {
        document.get("time_last_update_unix").and_then(Value::as_i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_success() {
        assert!(is_success(&json!({"result": "success"})));
        assert!(!is_success(&json!({"result": "error", "error-type": "unsupported-code"})));
        assert!(!is_success(&json!({"base_code": "USD", "rates": {"EUR": 0.9}})));
        assert!(!is_success(&json!({"result": true})));
    }

    #[test]
    fn test_field_extraction() {
        let provider = OpenErApiProvider::new("https://open.er-api.com/v6/latest/");
        let document = json!({
            "result": "success",
            "base_code": "USD",
            "time_last_update_unix": 1700000000,
            "rates": {"USD": 1, "EUR": 0.9}
        });

        assert_eq!(
            provider.build_url(&CurrencyCode::new("usd")),
            "https://open.er-api.com/v6/latest/USD"
        );
        assert_eq!(provider.extract_base_code(&document), Some("USD"));
        assert_eq!(provider.extract_timestamp(&document), Some(1700000000));
        let rates = provider.extract_rates(&document).unwrap();
        assert_eq!(rates.len(), 2);
        assert_eq!(rates["EUR"].as_f64(), Some(0.9));
    }
}
