pub mod fetch_mappings;
pub mod get_mappings;
pub mod lookup_host;
pub mod refresh_mappings;

pub use fetch_mappings::FetchMappingsUseCase;
pub use get_mappings::GetMappingsUseCase;
pub use lookup_host::LookupHostUseCase;
pub use refresh_mappings::RefreshMappingsUseCase;
