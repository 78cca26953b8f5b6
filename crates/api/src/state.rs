use std::sync::Arc;
use vip_agent_application::use_cases::{GetMappingsUseCase, LookupHostUseCase};

#[derive(Clone)]
pub struct AppState {
    pub lookup_host: Arc<LookupHostUseCase>,
    pub get_mappings: Arc<GetMappingsUseCase>,
}
