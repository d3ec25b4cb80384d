use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timestamp::parse_timestamp;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry of the append-only message log. `id` is a local render key only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content, Utc::now())
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content, Utc::now())
    }
}

/// Server-assigned conversation identifier. Opaque to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ConversationHandle(String);

impl ConversationHandle {
    #[cfg(test)]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Body of `POST /{user_id}/chat`. `conversation_id` is always sent, `null` for a new conversation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    pub conversation_id: Option<ConversationHandle>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChatReply {
    pub response: String,
    pub conversation_id: ConversationHandle,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ChatReply {
    /// Server timestamp when it parses, otherwise the local receive time.
    pub fn received_at(&self) -> DateTime<Utc> {
        self.timestamp
            .as_deref()
            .and_then(parse_timestamp)
            .unwrap_or_else(Utc::now)
    }
}
