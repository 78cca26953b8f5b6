use crate::ports::ListenerSource;
use std::sync::Arc;
use tracing::{debug, info, warn};
use vip_agent_domain::{DomainError, Extraction, MappingExtractor, MappingSnapshot};

/// Use case: poll the control plane once and reduce the listener set to a
/// mapping snapshot.
///
/// All-or-nothing: the first extraction error aborts the poll and discards
/// whatever was extracted before it.
pub struct FetchMappingsUseCase {
    source: Arc<dyn ListenerSource>,
    extractor: MappingExtractor,
}

impl FetchMappingsUseCase {
    pub fn new(source: Arc<dyn ListenerSource>, extractor: MappingExtractor) -> Self {
        Self { source, extractor }
    }

    pub async fn execute(&self) -> Result<MappingSnapshot, DomainError> {
        let listeners = self.source.fetch_listeners().await?;
        let total = listeners.len();

        let mut mappings = Vec::new();
        let mut skipped = 0usize;

        for listener in &listeners {
            match self.extractor.extract(listener) {
                Ok(Extraction::Mapped(mapping)) => mappings.push(mapping),
                Ok(Extraction::Skipped(reason)) => {
                    skipped += 1;
                    debug!(listener = %listener.name, reason = %reason, "Listener skipped");
                }
                Err(e) => {
                    warn!(listener = %listener.name, error = %e, "Listener violates naming contract");
                    return Err(e.into());
                }
            }
        }

        let mapped = mappings.len();
        let snapshot: MappingSnapshot = mappings.into_iter().collect();

        if snapshot.len() < mapped {
            debug!(
                mapped,
                distinct = snapshot.len(),
                "Duplicate hostnames collapsed, last listener wins"
            );
        }

        info!(
            listeners = total,
            mapped,
            skipped,
            "Listener set reduced to mapping snapshot"
        );

        Ok(snapshot)
    }
}
