//! Heuristic inference of hostname to virtual IP mappings from listeners.
//!
//! Pilot does not publish the mapping directly. An egress listener generated
//! for a virtual IP has a primary route whose cluster is named
//! `out.<hostname>|<tag>` and whose first destination is the virtual IP as a
//! host route, e.g.
//!
//! ```text
//! cluster:             out.example-httpbin.banana.sample-deployment.boshy|other-http
//! destination_ip_list: ["127.128.0.4/32"]
//! ```
//!
//! Listeners that do not look like this are skipped. Listeners that pass the
//! relevance gate and then break the naming contract are errors: they mean
//! Pilot and the agent disagree about the convention.

use crate::errors::ExtractionError;
use crate::listener::{ListenerDescriptor, Route};
use crate::mapping::Mapping;
use crate::virtual_ip::VirtualIpRange;
use ipnetwork::IpNetwork;
use std::fmt;
use std::net::IpAddr;

pub const EGRESS_CLUSTER_PREFIX: &str = "out.";

const HOST_ROUTE_SUFFIX: &str = "/32";
const CLUSTER_TAG_SEPARATOR: char = '|';

/// Why a listener carries no virtual IP mapping. Not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    NoFilters,
    NoRoutes,
    ForeignCluster,
    NoDestinationIps,
    NotHostRoute,
    UnparseableDestination,
    OutsideVirtualIpRange,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoFilters => "no filters",
            Self::NoRoutes => "no routes",
            Self::ForeignCluster => "wrong cluster prefix",
            Self::NoDestinationIps => "no destination IPs",
            Self::NotHostRoute => "wrong ip subnet mask size",
            Self::UnparseableDestination => "unable to parse dest ip as cidr",
            Self::OutsideVirtualIpRange => "vip not contained in expected cidr range",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Mapped(Mapping),
    Skipped(SkipReason),
}

impl Extraction {
    pub fn mapping(self) -> Option<Mapping> {
        match self {
            Self::Mapped(mapping) => Some(mapping),
            Self::Skipped(_) => None,
        }
    }
}

/// Decides, one listener at a time, whether a listener encodes a mapping.
///
/// Pure: the same listener and configuration always give the same result.
#[derive(Debug, Clone)]
pub struct MappingExtractor {
    range: VirtualIpRange,
    hostname_suffix: String,
}

impl MappingExtractor {
    pub fn new(range: VirtualIpRange, hostname_suffix: impl Into<String>) -> Self {
        Self {
            range,
            hostname_suffix: hostname_suffix.into(),
        }
    }

    pub fn range(&self) -> VirtualIpRange {
        self.range
    }

    pub fn hostname_suffix(&self) -> &str {
        &self.hostname_suffix
    }

    /// Inspects the listener's primary route (see
    /// [`ListenerDescriptor::primary_route`]) and nothing else.
    pub fn extract(&self, listener: &ListenerDescriptor) -> Result<Extraction, ExtractionError> {
        let (route, virtual_ip) = match self.admit(listener) {
            Ok(admitted) => admitted,
            Err(reason) => return Ok(Extraction::Skipped(reason)),
        };

        let parts: Vec<&str> = route.cluster.split(CLUSTER_TAG_SEPARATOR).collect();
        let [service, _tag] = parts.as_slice() else {
            return Err(ExtractionError::MalformedClusterName {
                listener: listener.name.clone(),
                cluster: route.cluster.clone(),
            });
        };

        let hostname = service
            .strip_prefix(EGRESS_CLUSTER_PREFIX)
            .unwrap_or(*service);
        if !hostname.ends_with(self.hostname_suffix.as_str()) {
            return Err(ExtractionError::HostnameSuffixMismatch {
                listener: listener.name.clone(),
                hostname: hostname.to_string(),
                suffix: self.hostname_suffix.clone(),
            });
        }

        Ok(Extraction::Mapped(Mapping::new(hostname, virtual_ip)))
    }

    /// Relevance gate: everything that fails here is simply not a virtual IP
    /// egress listener.
    fn admit<'a>(
        &self,
        listener: &'a ListenerDescriptor,
    ) -> Result<(&'a Route, IpAddr), SkipReason> {
        let route = listener.primary_route()?;

        if !route.cluster.starts_with(EGRESS_CLUSTER_PREFIX) {
            return Err(SkipReason::ForeignCluster);
        }

        let destination = route
            .destination_ip_list
            .first()
            .ok_or(SkipReason::NoDestinationIps)?;
        if !destination.ends_with(HOST_ROUTE_SUFFIX) {
            return Err(SkipReason::NotHostRoute);
        }

        let network: IpNetwork = destination
            .parse()
            .map_err(|_| SkipReason::UnparseableDestination)?;
        let virtual_ip = network.ip();

        if !self.range.contains(virtual_ip) {
            return Err(SkipReason::OutsideVirtualIpRange);
        }

        Ok((route, virtual_ip))
    }
}
