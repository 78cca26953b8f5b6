use crate::ports::MappingStore;
use std::net::IpAddr;
use std::sync::Arc;

pub struct LookupHostUseCase {
    store: Arc<dyn MappingStore>,
}

impl LookupHostUseCase {
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self { store }
    }

    /// `None` is a legitimate answer, not an error.
    pub fn execute(&self, hostname: &str) -> Option<IpAddr> {
        self.store.lookup(hostname)
    }
}
