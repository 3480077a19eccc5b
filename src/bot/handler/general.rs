use teloxide::{
    payloads::SendMessageSetters, prelude::*, types::ParseMode, utils::command::BotCommands,
};

use crate::bot::dispatcher::{Command, HandlerResult};

use super::{
    constants::{COMMAND_HELP, COMMAND_RATES, RATES_SOURCE, UNKNOWN_USER_NAME},
    utils::{send_bot_message, sender_id},
};

/* Greeting shown on /start, plain text.
 */
pub fn start_message(first_name: Option<&str>) -> String {
    let name = first_name.unwrap_or(UNKNOWN_USER_NAME);
    let introduction = format!("Hello, {name}! 👋");
    let about = "I can tell you the current US Dollar exchange rates for several currencies.";
    let commands = format!(
        "📊 Available commands:\n{COMMAND_RATES} - Show all rates\n{COMMAND_HELP} - Help"
    );

    format!("{introduction}\n\n{about}\n\n{commands}")
}

/* Command reference shown on /help, HTML.
 */
pub fn help_message() -> String {
    let commands = Command::descriptions().to_string();
    let source_info = format!("Rates are fetched live from the {RATES_SOURCE} API.");

    format!("💱 <b>Exchange Rates Bot</b>\n\nCommands:\n{commands}\n\n{source_info}")
}

/* Non-command message.
 * The bot only answers its commands, anything else is dropped without a reply.
 */
pub async fn ignore_message(msg: Message) -> HandlerResult {
    log::debug!(
        "Ignored non-command message from {} in chat {}",
        sender_id(&msg),
        msg.chat.id
    );
    Ok(())
}

/* Start command.
 * Greets the user by first name.
 */
pub async fn action_start(bot: Bot, msg: Message) -> HandlerResult {
    log::info!(
        "Start - User {} started the bot in chat {}",
        sender_id(&msg),
        msg.chat.id
    );

    let first_name = msg.from().map(|user| user.first_name.as_str());
    send_bot_message(&bot, &msg, start_message(first_name)).await?;
    Ok(())
}

/* Help command.
 * Displays a list of commands available to the user.
 */
pub async fn action_help(bot: Bot, msg: Message) -> HandlerResult {
    log::info!(
        "Help - User {} requested help in chat {}",
        sender_id(&msg),
        msg.chat.id
    );

    send_bot_message(&bot, &msg, help_message())
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}
