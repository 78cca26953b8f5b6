mod listener_source;
mod mapping_store;
mod snapshot_sink;

pub use listener_source::ListenerSource;
pub use mapping_store::MappingStore;
pub use snapshot_sink::SnapshotSink;
