use chrono::{Local, NaiveDateTime};
use teloxide::{payloads::SendMessageSetters, prelude::*, types::ParseMode};

use crate::bot::{
    api::RateFetcher, currency::CURRENCIES, dispatcher::HandlerResult, processor::format_rates,
};

use super::{
    constants::{RATES_FAILED_MESSAGE, RATES_PENDING_MESSAGE},
    utils::{send_bot_message, sender_id},
};

/* Fetches the rates and builds the final reply.
 * On a failed fetch the apology is returned and nothing is formatted.
 */
pub async fn rates_message(fetcher: &RateFetcher, timestamp: NaiveDateTime) -> String {
    match fetcher.fetch().await {
        Ok(snapshot) => format_rates(&snapshot, CURRENCIES, timestamp),
        Err(_) => RATES_FAILED_MESSAGE.to_string(),
    }
}

/* Rates command.
 * Acknowledges first, then replies with the rates table or an apology.
 * Always sends exactly two messages.
 */
pub async fn action_rates(bot: Bot, msg: Message, fetcher: RateFetcher) -> HandlerResult {
    log::info!(
        "Rates - User {} requested rates in chat {}",
        sender_id(&msg),
        msg.chat.id
    );

    send_bot_message(&bot, &msg, RATES_PENDING_MESSAGE).await?;

    let reply = rates_message(&fetcher, Local::now().naive_local()).await;

    send_bot_message(&bot, &msg, reply)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}
