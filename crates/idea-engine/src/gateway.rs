//! Agent gateway seam
//!
//! The engine talks to two agent identities (idea generation, email
//! sending) through one narrow interface. Transport details stay behind the
//! trait; tests substitute mocks or scripted gateways.

use async_trait::async_trait;
use idea_envelope::AgentReply;
use serde_json::json;

/// Gateway transport errors
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// HTTP request failed (connection, timeout, non-success status, body)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Narrow interface to the external agent platform
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AgentGateway: Send + Sync {
    /// Send `message` to the agent identified by `agent_id`
    ///
    /// Returns the raw reply envelope; normalization is the caller's job.
    async fn invoke(&self, message: &str, agent_id: &str) -> Result<AgentReply, GatewayError>;
}

/// HTTP implementation of the agent gateway
#[derive(Debug, Clone)]
pub struct HttpAgentGateway {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAgentGateway {
    /// Create a gateway against `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AgentGateway for HttpAgentGateway {
    async fn invoke(&self, message: &str, agent_id: &str) -> Result<AgentReply, GatewayError> {
        let url = format!("{}/v1/agents/invoke", self.base_url.trim_end_matches('/'));
        tracing::debug!(%agent_id, %url, "invoking agent");

        let reply = self
            .client
            .post(url)
            .json(&json!({ "message": message, "agent_id": agent_id }))
            .send()
            .await?
            .error_for_status()?
            .json::<AgentReply>()
            .await?;

        tracing::debug!(success = reply.success, "agent replied");
        Ok(reply)
    }
}
