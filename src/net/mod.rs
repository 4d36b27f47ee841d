//! Networking modules for the two chat transports.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_socket` owns the streaming WebSocket, `api` handles the single-shot
//! HTTP variant, and `types` defines the shared wire schema.

pub mod api;
pub mod chat_socket;
pub mod types;
