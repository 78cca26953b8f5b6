use arc_swap::ArcSwap;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info};
use vip_agent_application::ports::MappingStore;
use vip_agent_domain::{normalize_query_name, MappingSnapshot};

/// Lock-free snapshot holder. Readers never block the refresh loop.
pub struct SnapshotMappingStore {
    current: ArcSwap<MappingSnapshot>,
}

impl SnapshotMappingStore {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(MappingSnapshot::empty()),
        }
    }
}

impl Default for SnapshotMappingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MappingStore for SnapshotMappingStore {
    fn replace(&self, snapshot: MappingSnapshot) {
        info!(mappings = snapshot.len(), "Replacing virtual IP mappings");
        for (hostname, ip) in snapshot.iter() {
            debug!(hostname, ip = %ip, "Mapping");
        }
        self.current.store(Arc::new(snapshot));
    }

    fn lookup(&self, hostname: &str) -> Option<IpAddr> {
        let key = normalize_query_name(hostname);
        let found = self.current.load().get(key);
        match found {
            Some(ip) => debug!(hostname = key, ip = %ip, "Mapping found"),
            None => debug!(hostname = key, "No mapping"),
        }
        found
    }

    fn snapshot(&self) -> Arc<MappingSnapshot> {
        self.current.load_full()
    }
}
