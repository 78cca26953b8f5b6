use super::FetchMappingsUseCase;
use crate::ports::{MappingStore, SnapshotSink};
use std::sync::Arc;
use tracing::{debug, error};
use vip_agent_domain::DomainError;

/// Use case: one full refresh cycle.
/// Fetch a snapshot, hand it to every sink, then publish it to the store.
pub struct RefreshMappingsUseCase {
    fetch: Arc<FetchMappingsUseCase>,
    store: Arc<dyn MappingStore>,
    sinks: Vec<Arc<dyn SnapshotSink>>,
}

impl RefreshMappingsUseCase {
    pub fn new(fetch: Arc<FetchMappingsUseCase>, store: Arc<dyn MappingStore>) -> Self {
        Self {
            fetch,
            store,
            sinks: Vec::new(),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn SnapshotSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Returns the number of published mappings. On error, whether from the
    /// poll or from a sink, nothing is published to the store.
    pub async fn execute(&self) -> Result<usize, DomainError> {
        let snapshot = self.fetch.execute().await?;
        let count = snapshot.len();

        for sink in &self.sinks {
            sink.sync(&snapshot).await.map_err(|e| {
                error!(sink = sink.name(), error = %e, "Snapshot sink failed");
                e
            })?;
            debug!(sink = sink.name(), mappings = count, "Snapshot sink updated");
        }

        self.store.replace(snapshot);

        Ok(count)
    }
}
