//! VIP Agent Domain Layer
pub mod config;
pub mod errors;
pub mod extractor;
pub mod listener;
pub mod mapping;
pub mod virtual_ip;

pub use config::{AgentSettings, CliOverrides, Config, ConfigError};
pub use errors::{DomainError, ExtractionError};
pub use extractor::{Extraction, MappingExtractor, SkipReason};
pub use listener::{
    listeners_url, FilterConfig, FilterSettings, ListenerDescriptor, ListenersResponse, Route,
    RouteConfig,
};
pub use mapping::{normalize_query_name, Mapping, MappingSnapshot};
pub use virtual_ip::VirtualIpRange;
