use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use vip_agent_application::use_cases::RefreshMappingsUseCase;
use vip_agent_domain::DomainError;

/// Background job that keeps the mapping store in step with Pilot.
///
///   - First poll runs immediately so lookups are served as soon as possible
///   - Then sleeps `interval` between the end of one poll and the next
///   - Fail-fast: the first failed poll ends the job with its error
pub struct MappingRefreshJob {
    refresh: Arc<RefreshMappingsUseCase>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl MappingRefreshJob {
    pub fn new(refresh: Arc<RefreshMappingsUseCase>, interval: Duration) -> Self {
        Self {
            refresh,
            interval,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self: Arc<Self>) -> JoinHandle<Result<(), DomainError>> {
        info!(
            interval_ms = self.interval.as_millis() as u64,
            "Starting mapping refresh job"
        );

        tokio::spawn(async move { self.run().await })
    }

    /// Returns `Ok(())` only when cancelled.
    pub async fn run(&self) -> Result<(), DomainError> {
        loop {
            let polled = tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("MappingRefreshJob: shutting down");
                    return Ok(());
                }
                result = self.refresh.execute() => result,
            };

            if let Err(e) = polled {
                error!(error = %e, "MappingRefreshJob: refresh failed, stopping");
                return Err(e);
            }

            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("MappingRefreshJob: shutting down");
                    return Ok(());
                }
                _ = tokio::time::sleep(self.interval) => {}
            }
        }
    }
}
