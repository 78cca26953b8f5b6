use std::sync::Arc;
use tracing::info;
use vip_agent_api::AppState;
use vip_agent_application::ports::MappingStore;
use vip_agent_application::use_cases::{
    FetchMappingsUseCase, GetMappingsUseCase, LookupHostUseCase, RefreshMappingsUseCase,
};
use vip_agent_domain::{listeners_url, AgentSettings, MappingExtractor};
use vip_agent_infrastructure::pilot::PilotClient;
use vip_agent_infrastructure::store::SnapshotMappingStore;
use vip_agent_infrastructure::system::HostsFileSink;

pub struct Services {
    pub refresh_mappings: Arc<RefreshMappingsUseCase>,
    pub lookup_host: Arc<LookupHostUseCase>,
    pub get_mappings: Arc<GetMappingsUseCase>,
}

impl Services {
    pub fn new(settings: &AgentSettings) -> anyhow::Result<Self> {
        let store: Arc<dyn MappingStore> = Arc::new(SnapshotMappingStore::new());

        let url = listeners_url(&settings.pilot_base_url, &settings.local_ip.to_string());
        info!(url = %url, "Polling Pilot listeners");
        let pilot = Arc::new(PilotClient::new(url, settings.request_timeout)?);

        let extractor = MappingExtractor::new(settings.virtual_ip_range, settings.tld.clone());
        let fetch = Arc::new(FetchMappingsUseCase::new(pilot, extractor));

        let mut refresh = RefreshMappingsUseCase::new(fetch, store.clone());
        if let Some(path) = &settings.hosts_file {
            info!(path = %path.display(), "Hosts file sink enabled");
            refresh = refresh.with_sink(Arc::new(HostsFileSink::new(path.clone())));
        }

        Ok(Self {
            refresh_mappings: Arc::new(refresh),
            lookup_host: Arc::new(LookupHostUseCase::new(store.clone())),
            get_mappings: Arc::new(GetMappingsUseCase::new(store)),
        })
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            lookup_host: self.lookup_host.clone(),
            get_mappings: self.get_mappings.clone(),
        }
    }
}
