use std::process::Output;
use tokio::process::Command;
use tracing::info;

// Adds automatic logging to test
mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const USD_RESPONSE: &str = r#"{"result":"success","base_code":"USD","rates":{"EUR":0.9,"GBP":0.7931,"JPY":149.52},"time_last_update_unix":1700000000}"#;

    pub async fn create_mock_server(code: &str, status: u16, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        let url_path = format!("/v6/latest/{code}");

        Mock::given(method("GET"))
            .and(path(&url_path))
            .respond_with(ResponseTemplate::new(status).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    /// Writes a config pointing the default provider at the mock server.
    pub fn write_config(mock_server: &MockServer) -> tempfile::NamedTempFile {
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let config_content = format!(
            r#"
            provider: open_er_api
            timeout_secs: 5
            providers:
              open_er_api:
                base_url: "{}/v6/latest/"
        "#,
            mock_server.uri()
        );
        std::fs::write(config_file.path(), config_content).expect("Failed to write config file");
        config_file
    }
}

async fn exchange(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_exchange"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("Failed to run exchange binary")
}

async fn exchange_with_config(config: &tempfile::NamedTempFile, args: &[&str]) -> Output {
    let config_path = config.path().to_str().unwrap();
    let mut all_args = vec!["--config-path", config_path];
    all_args.extend_from_slice(args);
    exchange(&all_args).await
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_with_mock() {
    let mock_server = test_utils::create_mock_server("USD", 200, test_utils::USD_RESPONSE).await;
    let config = test_utils::write_config(&mock_server);

    let output = exchange_with_config(&config, &["usd", "eur", "10"]).await;
    info!(stdout = %stdout(&output), stderr = %stderr(&output), "exchange finished");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let line = stdout(&output);
    assert!(line.starts_with("[At: "), "{line}");
    assert!(line.contains("Rate: 0.9"), "{line}");
    assert!(line.contains("10 USD = 9 EUR"), "{line}");
    assert_eq!(line.lines().count(), 1);
}

#[test_log::test(tokio::test)]
async fn test_lowercase_and_default_amount_match() {
    let mock_server = test_utils::create_mock_server("USD", 200, test_utils::USD_RESPONSE).await;
    let config = test_utils::write_config(&mock_server);

    let lower = exchange_with_config(&config, &["usd", "gbp"]).await;
    let upper = exchange_with_config(&config, &["USD", "GBP", "1"]).await;

    assert!(lower.status.success());
    assert_eq!(stdout(&lower), stdout(&upper));
    assert!(stdout(&lower).contains("[Rate: 0.7931]: 1 USD = 0.7931 GBP"));
}

#[test_log::test(tokio::test)]
async fn test_missing_target_currency() {
    let mock_server = test_utils::create_mock_server("USD", 200, test_utils::USD_RESPONSE).await;
    let config = test_utils::write_config(&mock_server);

    let output = exchange_with_config(&config, &["usd", "xyz"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("'XYZ'"), "{}", stderr(&output));
}

#[test_log::test(tokio::test)]
async fn test_verbose_failure_is_reported_once() {
    let mock_server = test_utils::create_mock_server("USD", 200, test_utils::USD_RESPONSE).await;
    let config = test_utils::write_config(&mock_server);

    let output = exchange_with_config(&config, &["-v", "usd", "xyz"]).await;
    assert_eq!(output.status.code(), Some(1));
    let message = stderr(&output);
    assert_eq!(
        message
            .matches("Could not fetch exchange rates for target currency: 'XYZ'")
            .count(),
        1,
        "{message}"
    );
}

#[test_log::test(tokio::test)]
async fn test_error_document_names_source_currency() {
    let body = r#"{"result":"error","error-type":"unsupported-code","rates":{"EUR":0.9}}"#;
    let mock_server = test_utils::create_mock_server("ABC", 404, body).await;
    let config = test_utils::write_config(&mock_server);

    let output = exchange_with_config(&config, &["abc", "eur"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("Could not fetch exchange rates for source currency: 'ABC'"),
        "{}",
        stderr(&output)
    );
}

#[test_log::test(tokio::test)]
async fn test_malformed_amount_skips_request() {
    let mock_server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(test_utils::USD_RESPONSE))
        .expect(0)
        .mount(&mock_server)
        .await;
    let config = test_utils::write_config(&mock_server);

    let output = exchange_with_config(&config, &["usd", "eur", "ten"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("'ten'"), "{}", stderr(&output));
    mock_server.verify().await;
}

#[test_log::test(tokio::test)]
async fn test_usage_error_exits_with_one() {
    for args in [vec![], vec!["usd"]] {
        let output = exchange(&args).await;
        assert_eq!(output.status.code(), Some(1));
        assert!(stdout(&output).is_empty());
        assert!(stderr(&output).contains("Usage: exchange <from> <to>"));
    }
}

#[test_log::test(tokio::test)]
async fn test_missing_config_file_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("config.yaml");

    let output = exchange(&["--config-path", missing.to_str().unwrap(), "usd", "eur"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load configuration"));
}

#[test_log::test(tokio::test)]
async fn test_provider_flag_overrides_config() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v4/latest/USD"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"provider":"https://www.exchangerate-api.com","base":"USD","time_last_updated":1700000000,"rates":{"EUR":0.92}}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    // File selects open_er_api, the flag switches to exchangerate_api
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_content = format!(
        r#"
        provider: open_er_api
        providers:
          open_er_api:
            base_url: "{uri}/v6/latest/"
          exchangerate_api:
            base_url: "{uri}/v4/latest/"
    "#,
        uri = mock_server.uri()
    );
    std::fs::write(config_file.path(), config_content).expect("Failed to write config file");

    let output =
        exchange_with_config(&config_file, &["-p", "exchangerate-api", "usd", "eur", "2"]).await;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(
        stdout(&output).contains("[Rate: 0.92]: 2 USD = 1.84 EUR"),
        "{}",
        stdout(&output)
    );
    mock_server.verify().await;
}

#[test_log::test(tokio::test)]
async fn test_timeout_flag_overrides_config() {
    use std::time::Duration;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(test_utils::USD_RESPONSE)
                .set_delay(Duration::from_secs(4)),
        )
        .mount(&mock_server)
        .await;
    // Config allows 5s, the flag cuts it to 1s
    let config = test_utils::write_config(&mock_server);

    let output = exchange_with_config(&config, &["--timeout", "1", "usd", "eur"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(
        stderr(&output).contains("timed out after 1s"),
        "{}",
        stderr(&output)
    );
}

#[test_log::test(tokio::test)]
async fn test_invalid_flag_value_is_named() {
    for args in [
        vec!["--timeout", "0", "usd", "eur"],
        vec!["-p", "bogus", "usd", "eur"],
    ] {
        let output = exchange(&args).await;
        assert_eq!(output.status.code(), Some(1));
        let message = stderr(&output);
        assert!(message.starts_with("Usage: exchange <from> <to>"), "{message}");
        assert!(message.contains(&format!("'{}'", args[1])), "{message}");
        assert_eq!(message.lines().count(), 1);
    }
}
