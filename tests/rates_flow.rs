use std::time::Duration;

use chrono::NaiveDate;
use ratescribe::bot::{format_rates, rates_message, RateFetcher, CURRENCIES, RATES_FAILED_MESSAGE};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod test_utils {
    use super::*;

    pub async fn create_mock_server(response: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v4/latest/USD"))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub fn fetcher(mock_server: &MockServer) -> RateFetcher {
        let url = format!("{}/v4/latest/USD", mock_server.uri());
        RateFetcher::new(&url, Duration::from_secs(5)).expect("Failed to build fetcher")
    }
}

#[tokio::test]
async fn test_fetch_then_format_full_catalog() {
    let body = r#"{
        "base": "USD",
        "rates": {"USD": 1, "CNY": 7.24, "KZT": 446.5, "RUB": 92.25, "UAH": 41.1, "EUR": 0.93, "GBP": 0.79, "JPY": 155.2}
    }"#;
    let mock_server =
        test_utils::create_mock_server(ResponseTemplate::new(200).set_body_string(body)).await;
    let fetcher = test_utils::fetcher(&mock_server);
    let timestamp = NaiveDate::from_ymd_opt(2024, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 0)
        .unwrap();

    let snapshot = fetcher.fetch().await.expect("Fetch should succeed");
    let text = format_rates(&snapshot, CURRENCIES, timestamp);

    assert!(text.contains("🕐 31.12.2024 23:59"));
    for entry in CURRENCIES {
        let rate = snapshot.get(entry.code).unwrap();
        let line = format!("{} <b>{}</b>\n1 USD = {:.4} {}", entry.flag, entry.name, rate, entry.code);
        assert!(text.contains(&line), "missing line for {}", entry.code);
    }
    assert!(!text.contains("data unavailable"));
    assert!(!text.contains("JPY"));
}

#[tokio::test]
async fn test_rates_message_spec_example() {
    let body = r#"{"rates": {"CNY": 7.1234, "EUR": 0.9000}}"#;
    let mock_server =
        test_utils::create_mock_server(ResponseTemplate::new(200).set_body_string(body)).await;
    let fetcher = test_utils::fetcher(&mock_server);
    let timestamp = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();

    let text = rates_message(&fetcher, timestamp).await;

    assert!(text.contains("1 USD = 7.1234 CNY"));
    assert!(text.contains("1 USD = 0.9000 EUR"));
    for name in ["Kazakhstani Tenge", "Russian Ruble", "Ukrainian Hryvnia", "British Pound"] {
        assert!(text.contains(&format!("{name}: data unavailable")), "{name} should be unavailable");
    }
}

#[tokio::test]
async fn test_rates_message_on_malformed_body() {
    let mock_server = test_utils::create_mock_server(
        ResponseTemplate::new(200).set_body_string("not json at all"),
    )
    .await;
    let fetcher = test_utils::fetcher(&mock_server);
    let timestamp = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();

    assert_eq!(rates_message(&fetcher, timestamp).await, RATES_FAILED_MESSAGE);
}
