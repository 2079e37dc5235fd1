use crate::config::Config;
use crate::models::{
    chat::{ChatHistory, ChatRequest, ChatResponse},
    error::AppError,
};
use crate::services::client::ApiClient;

pub fn history_path(session_id: &str, limit: u32) -> String {
    format!("/api/chat/sessions/{session_id}/history?limit={limit}")
}

/// Sends one chat turn.
pub async fn send_message(
    client: &ApiClient,
    request: &ChatRequest,
) -> Result<ChatResponse, AppError> {
    client.post_json("/api/chat/message", request).await
}

/// Fetches the stored history for a session.
pub async fn chat_history(
    client: &ApiClient,
    session_id: &str,
    limit: u32,
) -> Result<ChatHistory, AppError> {
    client.get_json(&history_path(session_id, limit)).await
}

/// No-op connectivity check for the chat subsystem.
pub async fn test_chat(client: &ApiClient) -> Result<serde_json::Value, AppError> {
    client.get_json("/api/chat/test").await
}

// CONVENIENCE FUNCTIONS

/// Sends a chat turn with RAG enabled, using a default client.
pub async fn send_chat_message(message: &str, session_id: &str) -> Result<ChatResponse, AppError> {
    let request = ChatRequest {
        message: message.to_string(),
        session_id: session_id.to_string(),
        use_rag: true,
    };
    send_message(&ApiClient::new()?, &request).await
}

/// Fetches session history at the default page size.
pub async fn fetch_chat_history(session_id: &str) -> Result<ChatHistory, AppError> {
    chat_history(&ApiClient::new()?, session_id, Config::DEFAULT_HISTORY_LIMIT).await
}
