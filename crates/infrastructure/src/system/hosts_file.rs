use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};
use vip_agent_application::ports::SnapshotSink;
use vip_agent_domain::{DomainError, MappingSnapshot};

/// Mirrors the snapshot into a hosts(5) style file for resolvers that read
/// one, one `<ip>\t<hostname>` line per mapping ordered by hostname.
///
/// The file is written next to its target and renamed into place, so a
/// reader never sees a half-written table.
pub struct HostsFileSink {
    path: PathBuf,
}

impl HostsFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn render(snapshot: &MappingSnapshot) -> String {
        let mut out = String::new();
        for mapping in snapshot.sorted_mappings() {
            out.push_str(&format!("{}\t{}\n", mapping.virtual_ip, mapping.hostname));
        }
        out
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "hosts".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SnapshotSink for HostsFileSink {
    fn name(&self) -> &str {
        "hosts_file"
    }

    async fn sync(&self, snapshot: &MappingSnapshot) -> Result<(), DomainError> {
        let staging = self.staging_path();

        fs::write(&staging, Self::render(snapshot))
            .await
            .map_err(|e| {
                DomainError::IoError(format!("Failed to write {}: {}", staging.display(), e))
            })?;

        if let Err(e) = fs::rename(&staging, &self.path).await {
            if let Err(cleanup) = fs::remove_file(&staging).await {
                warn!(path = %staging.display(), error = %cleanup, "Failed to remove staging file");
            }
            return Err(DomainError::IoError(format!(
                "Failed to move {} into place: {}",
                self.path.display(),
                e
            )));
        }

        debug!(path = %self.path.display(), mappings = snapshot.len(), "Hosts file written");
        Ok(())
    }
}
