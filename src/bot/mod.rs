// bot/mod.rs

// Exported functions
pub use self::dispatcher::{register_commands, run_dispatcher, schema};
pub use self::handler::{help_message, rates_message, start_message};
pub use self::processor::format_rates;

// Exported structs and types
pub use self::api::{FetchError, RateFetcher, RateSnapshot, RATES_API_TIMEOUT, RATES_API_URL};
pub use self::config::{Config, ConfigError};
pub use self::currency::{CurrencyEntry, BASE_CURRENCY, CURRENCIES};
pub use self::dispatcher::{BotError, Command, HandlerResult};
pub use self::handler::{RATES_FAILED_MESSAGE, RATES_PENDING_MESSAGE};

// Declare submodules
mod api;
mod config;
mod currency;
mod dispatcher;
mod handler;
mod processor;
