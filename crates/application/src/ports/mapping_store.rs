use std::net::IpAddr;
use std::sync::Arc;
use vip_agent_domain::MappingSnapshot;

/// Holds the one current snapshot.
///
/// One writer, many concurrent readers. A reader observes either the old or
/// the new snapshot in full, never a mix.
pub trait MappingStore: Send + Sync {
    /// Swaps in `snapshot` wholesale. Nothing from the previous snapshot
    /// survives.
    fn replace(&self, snapshot: MappingSnapshot);

    /// Looks `hostname` up after stripping one trailing dot.
    fn lookup(&self, hostname: &str) -> Option<IpAddr>;

    fn snapshot(&self) -> Arc<MappingSnapshot>;
}
