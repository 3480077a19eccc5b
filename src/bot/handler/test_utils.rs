use serde_json::{json, Value};
use teloxide::{
    prelude::*,
    types::{Me, Update},
};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/* Fixtures for driving handlers against a mock Telegram Bot API. */

pub const CHAT_ID: i64 = 42;
pub const BOT_TOKEN: &str = "123456:TEST-TOKEN";
pub const BOT_USERNAME: &str = "ratescribe_bot";

fn message_json(text: &str) -> Value {
    json!({
        "message_id": 1,
        "date": 1714550400,
        "chat": {"id": CHAT_ID, "type": "private", "first_name": "Alice"},
        "from": {"id": 7, "is_bot": false, "first_name": "Alice"},
        "text": text
    })
}

pub fn user_message(text: &str) -> Message {
    serde_json::from_value(message_json(text)).unwrap()
}

pub fn user_update(text: &str) -> Update {
    serde_json::from_str(&json!({"update_id": 1, "message": message_json(text)}).to_string()).unwrap()
}

pub fn bot_me() -> Me {
    serde_json::from_value(json!({
        "id": 1,
        "is_bot": true,
        "first_name": "RateScribe",
        "username": BOT_USERNAME,
        "can_join_groups": true,
        "can_read_all_group_messages": false,
        "supports_inline_queries": false
    }))
    .unwrap()
}

// Every POST is treated as a successful sendMessage.
pub async fn create_telegram_server() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": true, "result": message_json("reply")})),
        )
        .mount(&mock_server)
        .await;

    mock_server
}

pub fn bot_for(mock_server: &MockServer) -> Bot {
    Bot::new(BOT_TOKEN).set_api_url(mock_server.uri().parse().unwrap())
}

// Methods of all requests the server saw, in arrival order.
pub async fn request_methods(mock_server: &MockServer) -> Vec<String> {
    mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.method.to_string())
        .collect()
}

// JSON payloads of the messages the bot sent, in order.
pub async fn sent_messages(mock_server: &MockServer) -> Vec<Value> {
    mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.method.to_string() == "POST")
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}
