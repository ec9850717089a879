//! Assistant adapter error types

use thiserror::Error;

/// Failures absorbed by the HTTP assistant client.
///
/// None of these escape the adapter: the gateway port converts them all
/// into the fallback reply.
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned status {0}")]
    Status(u16),
}
