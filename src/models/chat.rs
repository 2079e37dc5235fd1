use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed assistant reply appended when a send fails.
pub const CHAT_ERROR_REPLY: &str =
    "Sorry, I encountered an error processing your request. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single chat turn. Never mutated after creation; the surrounding
/// conversation is append-only for the lifetime of the page session.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub citations: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub model_used: Option<String>,
}

/// Request body for `POST /api/chat/message`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
    pub use_rag: bool,
}

/// Response body for `POST /api/chat/message`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    #[serde(default)]
    pub citations: Vec<String>,
    pub session_id: String,
    #[serde(default)]
    pub model_used: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Response body for the session history endpoint. The server returns raw
/// storage rows, so individual messages stay untyped.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatHistory {
    pub session_id: String,
    #[serde(default)]
    pub messages: Vec<serde_json::Value>,
    #[serde(default)]
    pub total_messages: u32,
}

/// Append-only message log backing the chat hook. Transitions return a new
/// `Conversation`, leaving prior entries untouched.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Appends a user turn, timestamped locally.
    pub fn with_user_message(&self, content: &str, now: DateTime<Utc>) -> Self {
        self.appended(ChatMessage {
            id: format!("user_{}", now.timestamp_millis()),
            role: ChatRole::User,
            content: content.to_string(),
            citations: Vec::new(),
            timestamp: now,
            model_used: None,
        })
    }

    /// Appends an assistant turn built from a successful response. The
    /// server timestamp wins over the local clock.
    pub fn with_assistant_reply(&self, response: &ChatResponse, now: DateTime<Utc>) -> Self {
        self.appended(ChatMessage {
            id: format!("assistant_{}", now.timestamp_millis()),
            role: ChatRole::Assistant,
            content: response.message.clone(),
            citations: response.citations.clone(),
            timestamp: response.timestamp,
            model_used: response.model_used.clone(),
        })
    }

    /// Appends the fixed apology turn used when a send fails.
    pub fn with_error_reply(&self, now: DateTime<Utc>) -> Self {
        self.appended(ChatMessage {
            id: format!("error_{}", now.timestamp_millis()),
            role: ChatRole::Assistant,
            content: CHAT_ERROR_REPLY.to_string(),
            citations: Vec::new(),
            timestamp: now,
            model_used: None,
        })
    }

    fn appended(&self, message: ChatMessage) -> Self {
        let mut messages = self.messages.clone();
        messages.push(message);
        Self { messages }
    }
}
