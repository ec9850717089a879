//! Domain layer for echo-chat
//!
//! This crate contains the core entities and rules for chat sessions:
//! messages, sessions, title derivation, and preview truncation.
//! It has no I/O and no dependencies on the other layers.

pub mod session;
pub mod util;

// Re-export commonly used types
pub use session::entities::{ChatSession, Message, Role, derive_title, NEW_SESSION_TITLE};
pub use util::truncate_str;
