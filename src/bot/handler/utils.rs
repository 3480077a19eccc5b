use teloxide::{payloads::SendMessage, prelude::*, requests::JsonRequest};

/* Common utilities for handlers. */

// Builds a reply into the chat the message came from. Caller sets parse mode and awaits.
pub fn send_bot_message<T>(bot: &Bot, msg: &Message, text: T) -> JsonRequest<SendMessage>
where
    T: Into<String>,
{
    bot.send_message(msg.chat.id, text)
}

// Identifies the sender for logs, service messages have none.
pub fn sender_id(msg: &Message) -> String {
    match msg.from() {
        Some(user) => user.id.to_string(),
        None => "<unknown>".to_string(),
    }
}
