use super::duration::parse_duration;
use super::errors::ConfigError;
use crate::virtual_ip::VirtualIpRange;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Raw `[agent]` section, as written in the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AgentConfig {
    /// Pause between two control plane polls, e.g. "5s".
    pub refresh_interval: String,

    /// Range virtual IPs are allocated from, e.g. "127.128.0.0/9".
    pub virtual_ip_cidr: String,

    /// Suffix every inferred hostname must end with.
    pub tld: String,

    pub pilot_base_url: String,

    /// Address this sidecar is registered under in Pilot.
    pub local_ip: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout: String,

    /// When set, every published snapshot is also written here in hosts
    /// file format.
    #[serde(default)]
    pub hosts_file: Option<String>,
}

/// Validated, typed form of [`AgentConfig`].
#[derive(Debug, Clone)]
pub struct AgentSettings {
    pub refresh_interval: Duration,
    pub request_timeout: Duration,
    pub virtual_ip_range: VirtualIpRange,
    pub tld: String,
    pub pilot_base_url: String,
    pub local_ip: IpAddr,
    pub hosts_file: Option<PathBuf>,
}

impl AgentConfig {
    pub fn settings(&self) -> Result<AgentSettings, ConfigError> {
        let refresh_interval = parse_duration(&self.refresh_interval).map_err(|e| {
            ConfigError::Validation(format!("parsing refresh interval: {}", e))
        })?;
        if refresh_interval.is_zero() {
            return Err(ConfigError::Validation(
                "expected positive refresh interval".to_string(),
            ));
        }

        let request_timeout = parse_duration(&self.request_timeout)
            .map_err(|e| ConfigError::Validation(format!("parsing request timeout: {}", e)))?;
        if request_timeout.is_zero() {
            return Err(ConfigError::Validation(
                "expected positive request timeout".to_string(),
            ));
        }

        let virtual_ip_range: VirtualIpRange = self
            .virtual_ip_cidr
            .parse()
            .map_err(|e| ConfigError::Validation(format!("parsing virtual_ip_cidr: {}", e)))?;

        if self.tld.len() < 2 {
            return Err(ConfigError::Validation(format!("invalid tld {:?}", self.tld)));
        }

        if !self.pilot_base_url.starts_with("http") {
            return Err(ConfigError::Validation(format!(
                "invalid pilot_base_url: {}",
                self.pilot_base_url
            )));
        }

        let local_ip: IpAddr = self.local_ip.parse().map_err(|_| {
            ConfigError::Validation(format!("invalid local_ip: {}", self.local_ip))
        })?;

        Ok(AgentSettings {
            refresh_interval,
            request_timeout,
            virtual_ip_range,
            tld: self.tld.clone(),
            pilot_base_url: self.pilot_base_url.clone(),
            local_ip,
            hosts_file: self
                .hosts_file
                .as_deref()
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        })
    }
}

fn default_request_timeout() -> String {
    "10s".to_string()
}
