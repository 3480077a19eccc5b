use std::{collections::HashMap, time::Duration};

use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

/* API contains the logic for calling the external exchange rate provider.
 * Links the bot's logic with the rates it needs from the internet.
 * Called by the rates handler only, once per invocation, with no retries.
 */

pub const RATES_API_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";
pub const RATES_API_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("Request timed out")]
    Timeout,
    #[error("Network error: {0}")]
    Network(reqwest::Error),
    #[error("Unexpected response status: {0}")]
    Status(StatusCode),
    #[error("Malformed response body: {0}")]
    Malformed(serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(reqwest_error: reqwest::Error) -> FetchError {
        if reqwest_error.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(reqwest_error)
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(serde_error: serde_json::Error) -> FetchError {
        FetchError::Malformed(serde_error)
    }
}

/* Rates fetched for a single command invocation.
 * Values are units of each currency per 1 unit of the base currency.
 */
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateSnapshot {
    rates: HashMap<String, f64>,
}

impl RateSnapshot {
    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl From<HashMap<String, f64>> for RateSnapshot {
    fn from(rates: HashMap<String, f64>) -> RateSnapshot {
        RateSnapshot { rates }
    }
}

// Only the rates object is of interest, everything else in the body is ignored.
#[derive(Deserialize)]
struct RatesResponse {
    rates: Option<HashMap<String, Value>>,
}

// Non-numeric entries are dropped, they show up as unavailable like any missing code.
fn parse_rates(rates: HashMap<String, Value>) -> HashMap<String, f64> {
    rates
        .into_iter()
        .filter_map(|(code, value)| match value.as_f64() {
            Some(rate) => Some((code, rate)),
            None => {
                log::warn!("Rates API - Skipping non-numeric rate for {}: {}", code, value);
                None
            }
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct RateFetcher {
    client: Client,
    url: String,
}

impl RateFetcher {
    pub fn new(url: &str, timeout: Duration) -> Result<RateFetcher, FetchError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(RateFetcher {
            client,
            url: url.to_string(),
        })
    }

    /* Fetches the latest rates.
     * Failures are logged here with their cause; callers only decide what the user sees.
     */
    pub async fn fetch(&self) -> Result<RateSnapshot, FetchError> {
        match self.try_fetch().await {
            Ok(snapshot) => {
                log::debug!(
                    "Rates API - Received {} rates from {}",
                    snapshot.len(),
                    self.url
                );
                Ok(snapshot)
            }
            Err(err) => {
                match &err {
                    FetchError::Timeout => log::error!(
                        "Rates API - Request to {} timed out",
                        self.url
                    ),
                    FetchError::Network(cause) => log::error!(
                        "Rates API - Request to {} failed: {:?}",
                        self.url,
                        cause
                    ),
                    FetchError::Status(status) => log::error!(
                        "Rates API - Request to {} returned status {}",
                        self.url,
                        status
                    ),
                    FetchError::Malformed(cause) => log::error!(
                        "Rates API - Could not parse response from {}: {}",
                        self.url,
                        cause
                    ),
                }
                Err(err)
            }
        }
    }

    async fn try_fetch(&self) -> Result<RateSnapshot, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let parsed: RatesResponse = serde_json::from_str(&body)?;

        Ok(RateSnapshot::from(parse_rates(parsed.rates.unwrap_or_default())))
    }
}
