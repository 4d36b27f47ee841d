//! Wire-protocol DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's message payloads. Fields the client does
//! not render are still carried so a message survives a serde round-trip.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Author role of a chat message.
///
/// Unrecognized roles are preserved verbatim in `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    Assistant,
    System,
    Function,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
            Self::Function => "function",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "user" => Self::User,
            "assistant" => Self::Assistant,
            "system" => Self::System,
            "function" => Self::Function,
            _ => Self::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

/// A single chat turn as delivered by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    /// Message text; absent for some function-call messages.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub is_function_call: bool,
    /// Name of the function being invoked when `is_function_call` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub func_name: Option<String>,
    /// Function-call arguments. Carried, never rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub func_arguments: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intended_recipient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl ChatMessage {
    /// Plain message with `role` and `content` only.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
            is_function_call: false,
            func_name: None,
            func_arguments: None,
            author: None,
            intended_recipient: None,
            finish_reason: None,
        }
    }

    pub fn content_str(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

/// Outbound socket payload: `{"question": ..., "session_id": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamRequest {
    pub question: String,
    pub session_id: String,
}

/// Body of `POST /chat/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostChatRequest {
    pub question: String,
}

/// Response of `POST /chat/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostChatResponse {
    pub responses: Vec<ChatMessage>,
}
