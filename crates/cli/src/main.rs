use clap::Parser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use vip_agent_domain::CliOverrides;
use vip_agent_jobs::MappingRefreshJob;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "vip-agent")]
#[command(version)]
#[command(about = "Serves Istio virtual IP mappings to BOSH DNS over HTTP")]
struct Cli {
    /// Configuration file path (TOML, or JSON with a .json extension)
    #[arg(short = 'c', long, value_name = "FILE")]
    config: String,

    /// Lookup endpoint port
    #[arg(short = 'p', long)]
    listen_port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        listen_port: cli.listen_port,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(&cli.config, cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting vip-agent v{}", env!("CARGO_PKG_VERSION"));

    let settings = config.agent_settings()?;
    let listen_addr = config.server.listen_address()?;

    let services = di::Services::new(&settings)?;
    let shutdown = CancellationToken::new();

    let refresh_job = Arc::new(
        MappingRefreshJob::new(services.refresh_mappings.clone(), settings.refresh_interval)
            .with_cancellation(shutdown.clone()),
    );
    let mut job_handle = refresh_job.start();

    let web_shutdown = shutdown.clone();
    let mut web_handle = tokio::spawn(async move {
        server::start_web_server(listen_addr, services.app_state(), web_shutdown).await
    });

    tokio::select! {
        joined = &mut job_handle => {
            shutdown.cancel();
            let _ = web_handle.await;
            match joined {
                Ok(Ok(())) => info!("Refresh job stopped"),
                Ok(Err(e)) => {
                    error!(error = %e, "Refreshing mappings failed");
                    return Err(e.into());
                }
                Err(e) => {
                    error!(error = %e, "Refresh job panicked");
                    return Err(e.into());
                }
            }
        }
        served = &mut web_handle => {
            shutdown.cancel();
            let _ = job_handle.await;
            match served {
                Ok(result) => result?,
                Err(e) => return Err(e.into()),
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
            shutdown.cancel();
            let _ = job_handle.await;
            let _ = web_handle.await;
        }
    }

    info!("vip-agent shutdown complete");
    Ok(())
}
