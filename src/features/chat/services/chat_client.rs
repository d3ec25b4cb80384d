use crate::core::error::ClientError;
use crate::core::models::{ChatReply, ChatRequest, ConversationHandle};
use crate::core::services::{ApiClient, Method};

/// Post one message to the assistant.
///
/// Without a handle the backend opens a new conversation; the returned handle
/// must be passed on every later call to keep server-side context.
pub async fn send_message(
    api: &ApiClient,
    user_id: &str,
    text: &str,
    conversation: Option<&ConversationHandle>,
) -> Result<ChatReply, ClientError> {
    let request = ChatRequest {
        message: text.to_string(),
        conversation_id: conversation.cloned(),
    };
    api.call(Method::Post, format!("/{}/chat", urlencoding::encode(user_id)))
        .json(&request)?
        .with_cookies()
        .failure_message("Failed to send message")
        .send_json()
        .await
}
