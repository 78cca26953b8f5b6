pub mod dns_json;
pub mod health;
pub mod mapping;

pub use dns_json::{DnsAnswer, DnsJsonResponse, DnsQueryParams, DnsQuestion};
pub use health::HealthResponse;
pub use mapping::MappingResponse;
