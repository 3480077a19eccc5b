use teloxide::{
    dispatching::UpdateHandler, prelude::*, utils::command::BotCommands, RequestError,
};

use super::{
    api::RateFetcher,
    handler::{action_help, action_rates, action_start, ignore_message},
};

/* Dispatcher routes incoming updates to the command handlers.
 * Handlers are stateless; the only shared dependency is the rate fetcher,
 * which is cloned into every update and never mutated.
 */

/* Types */
pub type HandlerResult = Result<(), BotError>;

#[derive(thiserror::Error, Debug)]
pub enum BotError {
    #[error("Request error: {0}")]
    RequestError(RequestError),
}

impl From<RequestError> for BotError {
    fn from(request_error: RequestError) -> BotError {
        BotError::RequestError(request_error)
    }
}

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Start the bot.")]
    Start,
    #[command(description = "Show this help message.")]
    Help,
    #[command(description = "Show the current US Dollar exchange rates.")]
    Rates,
}

pub fn schema() -> UpdateHandler<BotError> {
    use dptree::case;

    let command_handler = teloxide::filter_command::<Command, _>()
        .branch(case![Command::Start].endpoint(action_start))
        .branch(case![Command::Help].endpoint(action_help))
        .branch(case![Command::Rates].endpoint(action_rates));

    Update::filter_message()
        .branch(command_handler)
        .branch(dptree::endpoint(ignore_message))
}

/* Publishes the command list to Telegram so clients can suggest it.
 * Not fatal: the bot still answers commands if this fails.
 */
pub async fn register_commands(bot: &Bot) {
    match bot.set_my_commands(Command::bot_commands()).await {
        Ok(_) => log::info!("Registered {} bot commands", Command::bot_commands().len()),
        Err(err) => log::warn!("Failed to register bot commands: {}", err),
    }
}

/* Main Dispatch function */
pub async fn run_dispatcher(bot: Bot, fetcher: RateFetcher) {
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![fetcher])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
