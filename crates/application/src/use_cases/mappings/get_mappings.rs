use crate::ports::MappingStore;
use std::sync::Arc;
use vip_agent_domain::MappingSnapshot;

pub struct GetMappingsUseCase {
    store: Arc<dyn MappingStore>,
}

impl GetMappingsUseCase {
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> Arc<MappingSnapshot> {
        self.store.snapshot()
    }
}
