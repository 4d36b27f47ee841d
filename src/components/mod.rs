//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the message log and input row; pages own the transport
//! and pass state in through props.

pub mod chat_input;
pub mod message_list;
