//! Client-side error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is reported to the developer console by the caller. None of
//! them is surfaced to the end user as UI.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failures raised by the chat transports and payload codecs.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The streaming socket is not in the open state.
    #[error("websocket is not open")]
    NotConnected,
    /// A server payload could not be decoded into the expected shape.
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
    /// The browser failed to complete the network call.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The server answered with a non-success HTTP status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The operation needs a browser environment.
    #[error("not available outside the browser")]
    Unavailable,
}
