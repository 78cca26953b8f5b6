#![allow(dead_code)]

use async_trait::async_trait;
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use vip_agent_application::ports::{ListenerSource, MappingStore};
use vip_agent_application::use_cases::{FetchMappingsUseCase, RefreshMappingsUseCase};
use vip_agent_domain::{
    normalize_query_name, DomainError, FilterConfig, ListenerDescriptor, MappingExtractor,
    MappingSnapshot, Route,
};

pub fn egress_listener(hostname: &str, vip: &str) -> ListenerDescriptor {
    ListenerDescriptor::new(
        hostname,
        vec![FilterConfig::with_routes(vec![Route::new(
            format!("out.{}|http", hostname),
            vec![format!("{}/32", vip).as_str()],
        )])],
    )
}

/// Serves a scripted sequence of poll results; the last one repeats.
pub struct ScriptedListenerSource {
    script: RwLock<Vec<Result<Vec<ListenerDescriptor>, DomainError>>>,
    call_count: AtomicU64,
}

impl ScriptedListenerSource {
    pub fn new(script: Vec<Result<Vec<ListenerDescriptor>, DomainError>>) -> Self {
        Self {
            script: RwLock::new(script),
            call_count: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListenerSource for ScriptedListenerSource {
    async fn fetch_listeners(&self) -> Result<Vec<ListenerDescriptor>, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let mut script = self.script.write().unwrap();
        if script.len() > 1 {
            script.remove(0)
        } else {
            script
                .first()
                .cloned()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }
}

pub struct MockMappingStore {
    current: RwLock<Arc<MappingSnapshot>>,
}

impl MockMappingStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(MappingSnapshot::empty())),
        }
    }
}

impl MappingStore for MockMappingStore {
    fn replace(&self, snapshot: MappingSnapshot) {
        *self.current.write().unwrap() = Arc::new(snapshot);
    }

    fn lookup(&self, hostname: &str) -> Option<IpAddr> {
        self.current
            .read()
            .unwrap()
            .get(normalize_query_name(hostname))
    }

    fn snapshot(&self) -> Arc<MappingSnapshot> {
        self.current.read().unwrap().clone()
    }
}

pub fn refresh_use_case(
    source: Arc<ScriptedListenerSource>,
    store: Arc<MockMappingStore>,
) -> Arc<RefreshMappingsUseCase> {
    let extractor = MappingExtractor::new("127.128.0.0/9".parse().unwrap(), "istio.local");
    let fetch = Arc::new(FetchMappingsUseCase::new(source, extractor));
    Arc::new(RefreshMappingsUseCase::new(fetch, store))
}
