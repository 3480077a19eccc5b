use chrono::NaiveDateTime;

use super::{
    api::RateSnapshot,
    currency::{CurrencyEntry, BASE_CURRENCY, BASE_CURRENCY_NAME},
};

/* Processor turns fetched rates into the text the bot replies with.
 * It does no I/O: the handler supplies the snapshot and the time of formatting.
 * Output is meant for Telegram's HTML parse mode, bold only on headers and names.
 */

const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";
const UNAVAILABLE_MESSAGE: &str = "data unavailable";

fn display_header(timestamp: NaiveDateTime) -> String {
    format!(
        "💵 <b>{BASE_CURRENCY_NAME} exchange rates ({BASE_CURRENCY})</b>\n🕐 {}",
        timestamp.format(TIMESTAMP_FORMAT)
    )
}

fn display_entry(entry: &CurrencyEntry, rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!(
            "{} <b>{}</b>\n1 {BASE_CURRENCY} = {:.4} {}",
            entry.flag, entry.name, rate, entry.code
        ),
        None => format!("{} {}: {UNAVAILABLE_MESSAGE}", entry.flag, entry.name),
    }
}

/* Formats a rates table, one block per catalog entry in catalog order.
 * Codes missing from the snapshot are shown as unavailable instead of failing the reply.
 */
pub fn format_rates(
    snapshot: &RateSnapshot,
    catalog: &[CurrencyEntry],
    timestamp: NaiveDateTime,
) -> String {
    let mut blocks = vec![display_header(timestamp)];
    blocks.extend(
        catalog
            .iter()
            .map(|entry| display_entry(entry, snapshot.get(entry.code))),
    );

    blocks.join("\n\n")
}
