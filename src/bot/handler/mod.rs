// Exported functions
pub use self::general::{action_help, action_start, help_message, ignore_message, start_message};
pub use self::rates::{action_rates, rates_message};

// Exported constants
pub use self::constants::{RATES_FAILED_MESSAGE, RATES_PENDING_MESSAGE};

// Submodules
mod constants;
mod general;
mod rates;
mod utils;

#[cfg(test)]
pub mod test_utils;
