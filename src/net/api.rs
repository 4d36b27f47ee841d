//! Request/response chat transport.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `ChatError::Unavailable` since the endpoint
//! is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! There is no retry and no timeout. Failures come back as `ChatError` and
//! are only ever logged to the developer console.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatMessage, PostChatRequest, PostChatResponse};
use crate::error::ChatError;
use crate::state::chat::ChatState;

/// `Content-Type` sent with every `POST /chat/` body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Post one question to `endpoint` and return the backend's responses.
///
/// # Errors
///
/// Returns `ChatError::Transport` if the request cannot be completed,
/// `ChatError::Status` for a non-success status, and `ChatError::Decode`
/// if the body is not a `{"responses": [...]}` object.
pub async fn post_chat(endpoint: &str, question: &str) -> Result<Vec<ChatMessage>, ChatError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .body(encode_request(question)?)
            .map_err(|e| ChatError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ChatError::Status(resp.status()));
        }
        let text = resp.text().await.map_err(|e| ChatError::Transport(e.to_string()))?;
        decode_response(&text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, question);
        Err(ChatError::Unavailable)
    }
}

/// Serialize the `POST /chat/` body sent by `post_chat`.
///
/// # Errors
///
/// Returns `ChatError::Decode` if serialization fails.
pub fn encode_request(question: &str) -> Result<String, ChatError> {
    Ok(serde_json::to_string(&PostChatRequest { question: question.to_owned() })?)
}

/// Decode a `POST /chat/` body into its responses.
///
/// # Errors
///
/// Returns `ChatError::Decode` if `responses` is missing or malformed.
pub fn decode_response(text: &str) -> Result<Vec<ChatMessage>, ChatError> {
    let body: PostChatResponse = serde_json::from_str(text)?;
    Ok(body.responses)
}

/// Fold a finished call into `state`: responses are appended in order and the
/// draft is cleared whether or not the call succeeded.
pub fn apply_post_outcome(state: &mut ChatState, outcome: Result<Vec<ChatMessage>, ChatError>) {
    match outcome {
        Ok(responses) => state.extend(responses),
        Err(e) => leptos::logging::error!("chat request failed: {e}"),
    }
    state.draft.clear();
}
