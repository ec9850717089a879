//! Chat session domain.
//!
//! - [`entities::ChatSession`] — a conversation with its derived display fields
//! - [`entities::Message`] — a single message within a session

pub mod entities;
