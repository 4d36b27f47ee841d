//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `chat` holds the message log each page renders; `session` owns the
//! persistent identifier the streaming variant sends with every question.

pub mod chat;
pub mod session;
