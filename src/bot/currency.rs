/* Currency catalog.
 * The fixed, ordered set of currencies the bot reports against the base currency.
 * The order here is the order in which rates are displayed.
 */

pub const BASE_CURRENCY: &str = "USD";
pub const BASE_CURRENCY_NAME: &str = "US Dollar";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

pub static CURRENCIES: &[CurrencyEntry] = &[
    CurrencyEntry {
        code: "CNY",
        name: "Chinese Yuan",
        flag: "🇨🇳",
    },
    CurrencyEntry {
        code: "KZT",
        name: "Kazakhstani Tenge",
        flag: "🇰🇿",
    },
    CurrencyEntry {
        code: "RUB",
        name: "Russian Ruble",
        flag: "🇷🇺",
    },
    CurrencyEntry {
        code: "UAH",
        name: "Ukrainian Hryvnia",
        flag: "🇺🇦",
    },
    CurrencyEntry {
        code: "EUR",
        name: "Euro",
        flag: "🇪🇺",
    },
    CurrencyEntry {
        code: "GBP",
        name: "British Pound",
        flag: "🇬🇧",
    },
];
