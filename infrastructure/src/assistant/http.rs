//! HTTP client for the remote assistant endpoint.

use super::error::AssistantError;
use async_trait::async_trait;
use echo_application::ports::assistant_gateway::{AssistantGateway, FALLBACK_REPLY};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Request body for the `/chat` endpoint.
///
/// The service accepts a list of messages plus a capability flag asking for
/// search-augmented answers; this client always sends exactly one message
/// with search enabled.
#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    message: [&'a str; 1],
    allow_search: bool,
}

/// Assistant client speaking the single-message `/chat` protocol.
///
/// All transport and protocol failures are converted into the fixed
/// fallback reply; `ask` never surfaces an error to the caller.
pub struct HttpAssistantClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpAssistantClient {
    /// Create a client posting to `<base_url>/chat` with the given request
    /// timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AssistantError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, http })
    }

    async fn try_ask(&self, content: &str) -> Result<String, AssistantError> {
        let url = format!("{}/chat", self.base_url);
        let body = AskRequest {
            message: [content],
            allow_search: true,
        };

        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssistantError::Status(status.as_u16()));
        }

        let value: serde_json::Value = response.json().await?;
        Ok(extract_reply(value))
    }
}

#[async_trait]
impl AssistantGateway for HttpAssistantClient {
    async fn ask(&self, content: &str) -> String {
        match self.try_ask(content).await {
            Ok(reply) => {
                debug!(bytes = reply.len(), "Assistant reply received");
                reply
            }
            Err(e) => {
                warn!(error = %e, "Assistant request failed; using fallback reply");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}

/// Extract the reply text from a response body.
///
/// The service answers with a bare JSON string holding the reply. Any other
/// JSON shape is passed through as its compact serialization rather than
/// rejected, keeping the body opaque to this client.
fn extract_reply(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
