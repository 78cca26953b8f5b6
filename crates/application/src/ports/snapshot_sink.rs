use async_trait::async_trait;
use vip_agent_domain::{DomainError, MappingSnapshot};

/// Additional consumer of every published snapshot (e.g. a local hosts file).
#[async_trait]
pub trait SnapshotSink: Send + Sync {
    fn name(&self) -> &str;

    async fn sync(&self, snapshot: &MappingSnapshot) -> Result<(), DomainError>;
}
