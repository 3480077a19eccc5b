use std::time::Duration;

use super::api::{RATES_API_TIMEOUT, RATES_API_URL};

/* Configuration is read once from the environment at startup.
 * Only the bot token is required; the rates endpoint and timeout may be overridden.
 */

pub const TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const RATES_URL_VAR: &str = "EXCHANGE_RATES_URL";
pub const RATES_TIMEOUT_VAR: &str = "RATES_TIMEOUT_SECS";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Bot token not found! Set the TELEGRAM_BOT_TOKEN environment variable")]
    MissingToken,
    #[error("Invalid RATES_TIMEOUT_SECS value '{0}', expected a positive number of seconds")]
    InvalidTimeout(String),
}

#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub rates_url: String,
    pub request_timeout: Duration,
}

// Keeps the token out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("rates_url", &self.rates_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let token = read(TOKEN_VAR).ok_or(ConfigError::MissingToken)?;

        let rates_url = read(RATES_URL_VAR).unwrap_or_else(|| RATES_API_URL.to_string());

        let request_timeout = match read(RATES_TIMEOUT_VAR) {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(value)),
            },
            None => RATES_API_TIMEOUT,
        };

        Ok(Config {
            token,
            rates_url,
            request_timeout,
        })
    }
}
