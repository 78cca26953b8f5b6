use vip_agent_domain::{CliOverrides, Config};

pub fn load_config(path: &str, overrides: CliOverrides) -> anyhow::Result<Config> {
    Config::load(path, overrides).map_err(|e| {
        // Logging is not initialised yet.
        eprintln!("Failed to load configuration from {}: {}", path, e);
        anyhow::anyhow!(e)
    })
}
