//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its transport and message log and delegates rendering
//! details to `components`.

pub mod classic;
pub mod streaming;
