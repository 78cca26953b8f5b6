use serde::{Deserialize, Serialize};
use vip_agent_domain::Mapping;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingResponse {
    pub hostname: String,
    pub virtual_ip: String,
}

impl From<Mapping> for MappingResponse {
    fn from(mapping: Mapping) -> Self {
        Self {
            hostname: mapping.hostname,
            virtual_ip: mapping.virtual_ip.to_string(),
        }
    }
}
