// Commands, as shown to users.
pub const COMMAND_HELP: &str = "/help";
pub const COMMAND_RATES: &str = "/rates";

pub const RATES_SOURCE: &str = "exchangerate-api.com";

pub const RATES_PENDING_MESSAGE: &str = "⏳ Fetching the latest rates...";
pub const RATES_FAILED_MESSAGE: &str = "❌ Could not fetch exchange rates. Please try again later.";

pub const UNKNOWN_USER_NAME: &str = "there";
