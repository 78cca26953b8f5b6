use crate::errors::DomainError;
use ipnetwork::IpNetwork;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// The reserved address range virtual IPs are allocated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualIpRange {
    network: IpNetwork,
}

impl VirtualIpRange {
    pub fn new(network: IpNetwork) -> Self {
        Self { network }
    }

    pub fn network(&self) -> IpNetwork {
        self.network
    }

    /// Addresses of the other family are never contained.
    pub fn contains(&self, ip: IpAddr) -> bool {
        self.network.contains(ip)
    }
}

impl FromStr for VirtualIpRange {
    type Err = DomainError;

    fn from_str(cidr: &str) -> Result<Self, Self::Err> {
        let cidr = cidr.trim();
        if cidr.is_empty() {
            return Err(DomainError::InvalidCidr("CIDR cannot be empty".to_string()));
        }
        if !cidr.contains('/') {
            return Err(DomainError::InvalidCidr(format!(
                "{} must include a prefix length (e.g., 127.128.0.0/9)",
                cidr
            )));
        }

        let network: IpNetwork = cidr
            .parse()
            .map_err(|e| DomainError::InvalidCidr(format!("{}: {}", cidr, e)))?;

        Ok(Self { network })
    }
}

impl fmt::Display for VirtualIpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.network)
    }
}
