use thiserror::Error;

/// Structural contract violations on a listener that already looked like a
/// virtual IP egress listener (`out.` cluster, /32 destination in range).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("listener {listener}: malformed cluster name {cluster:?}, expected out.<hostname>|<tag>")]
    MalformedClusterName { listener: String, cluster: String },

    #[error("failed parsing DNS name from {listener}: {hostname:?} does not end with {suffix:?}")]
    HostnameSuffixMismatch {
        listener: String,
        hostname: String,
        suffix: String,
    },
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Mapping extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Control plane request failed: {0}")]
    Transport(String),

    #[error("Failed to decode listeners response: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Invalid CIDR format: {0}")]
    InvalidCidr(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),
}
