pub mod mapping_refresh;

pub use mapping_refresh::MappingRefreshJob;
