use async_trait::async_trait;
use vip_agent_domain::{DomainError, ListenerDescriptor};

/// Source of the control plane's current listener set.
#[async_trait]
pub trait ListenerSource: Send + Sync {
    /// Fails with `DomainError::Transport` when the control plane cannot be
    /// reached and `DomainError::Decode` when the body is not a listener list.
    async fn fetch_listeners(&self) -> Result<Vec<ListenerDescriptor>, DomainError>;
}
