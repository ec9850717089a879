//! Remote assistant adapter.
//!
//! [`http::HttpAssistantClient`] implements the application layer's
//! `AssistantGateway` port over the single-message `/chat` protocol.

pub mod error;
pub mod http;
