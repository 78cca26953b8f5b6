use serde::Serialize;
use std::collections::HashMap;
use std::net::IpAddr;

/// A verified hostname to virtual IP pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mapping {
    pub hostname: String,
    pub virtual_ip: IpAddr,
}

impl Mapping {
    pub fn new(hostname: impl Into<String>, virtual_ip: IpAddr) -> Self {
        Self {
            hostname: hostname.into(),
            virtual_ip,
        }
    }
}

/// The complete hostname to virtual IP table produced by one successful poll.
///
/// Never patched after construction; a new poll builds a new snapshot.
/// Keys carry no trailing dot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingSnapshot {
    entries: HashMap<String, IpAddr>,
}

impl MappingSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact-key lookup. Callers normalize query names first.
    pub fn get(&self, hostname: &str) -> Option<IpAddr> {
        self.entries.get(hostname).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, IpAddr)> {
        self.entries.iter().map(|(host, ip)| (host.as_str(), *ip))
    }

    /// Mappings ordered by hostname, for listings and file output.
    pub fn sorted_mappings(&self) -> Vec<Mapping> {
        let mut mappings: Vec<Mapping> = self
            .entries
            .iter()
            .map(|(host, ip)| Mapping::new(host.clone(), *ip))
            .collect();
        mappings.sort_by(|a, b| a.hostname.cmp(&b.hostname));
        mappings
    }
}

/// When two mappings share a hostname the later one wins.
impl FromIterator<Mapping> for MappingSnapshot {
    fn from_iter<I: IntoIterator<Item = Mapping>>(iter: I) -> Self {
        let mut entries = HashMap::new();
        for mapping in iter {
            entries.insert(mapping.hostname, mapping.virtual_ip);
        }
        Self { entries }
    }
}

/// Strips exactly one trailing dot. BOSH DNS sends fully-qualified names,
/// Pilot cluster names never carry the dot.
pub fn normalize_query_name(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}
