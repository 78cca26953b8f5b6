pub mod agent;
pub mod duration;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use agent::{AgentConfig, AgentSettings};
pub use duration::parse_duration;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
