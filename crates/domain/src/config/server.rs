use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Port the DNS-over-HTTP lookup endpoint listens on.
    pub listen_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl ServerConfig {
    pub fn listen_address(&self) -> Result<SocketAddr, ConfigError> {
        if self.listen_port == 0 {
            return Err(ConfigError::Validation(format!(
                "invalid listen port {}",
                self.listen_port
            )));
        }

        let ip: IpAddr = self.bind_address.parse().map_err(|_| {
            ConfigError::Validation(format!("invalid bind_address: {}", self.bind_address))
        })?;

        Ok(SocketAddr::new(ip, self.listen_port))
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}
