pub mod mappings;

pub use mappings::{
    FetchMappingsUseCase, GetMappingsUseCase, LookupHostUseCase, RefreshMappingsUseCase,
};
