use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use vip_agent_application::ports::ListenerSource;
use vip_agent_domain::{DomainError, ListenerDescriptor, ListenersResponse};

const USER_AGENT: &str = concat!("vip-agent/", env!("CARGO_PKG_VERSION"));

/// Listener discovery client for a single sidecar identity.
pub struct PilotClient {
    http_client: reqwest::Client,
    listeners_url: String,
}

impl PilotClient {
    pub fn new(listeners_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        Ok(Self {
            http_client,
            listeners_url: listeners_url.into(),
        })
    }

    pub fn listeners_url(&self) -> &str {
        &self.listeners_url
    }
}

#[async_trait]
impl ListenerSource for PilotClient {
    async fn fetch_listeners(&self) -> Result<Vec<ListenerDescriptor>, DomainError> {
        let response = self
            .http_client
            .get(&self.listeners_url)
            .send()
            .await
            .map_err(|e| {
                DomainError::Transport(format!("fetch error for {}: {}", self.listeners_url, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.listeners_url, status = status.as_u16(), "Pilot returned non-success status");
            return Err(DomainError::Transport(format!(
                "HTTP {} for {}",
                status.as_u16(),
                self.listeners_url
            )));
        }

        let body = response.text().await.map_err(|e| {
            DomainError::Transport(format!("read error for {}: {}", self.listeners_url, e))
        })?;

        let decoded: ListenersResponse =
            serde_json::from_str(&body).map_err(|e| DomainError::Decode(e.to_string()))?;

        debug!(
            url = %self.listeners_url,
            listeners = decoded.listeners.len(),
            "Fetched listeners"
        );

        Ok(decoded.listeners)
    }
}
