//! Assistant gateway port
//!
//! Defines the interface for the one-shot exchange with the remote
//! assistant service.

use async_trait::async_trait;

/// Reply substituted when the remote assistant cannot be reached or
/// returns an unusable response.
pub const FALLBACK_REPLY: &str = "Sorry, there was an error getting a response.";

/// Gateway to the remote assistant
///
/// One request, one reply. Implementations absorb every transport and
/// protocol failure and return [`FALLBACK_REPLY`] in its place, so callers
/// never see an error — only a degraded reply.
#[async_trait]
pub trait AssistantGateway: Send + Sync {
    /// Send one message and return the assistant's reply text.
    async fn ask(&self, content: &str) -> String;
}
