//! Listener descriptors as reported by the Pilot listener discovery API.
//!
//! Field names follow the v1 LDS JSON shape. Pilot has emitted both the
//! capitalised and the lowercase spelling of the envelope keys, so both are
//! accepted. Explicit `null` decodes the same as an absent field.

use crate::extractor::SkipReason;
use serde::{Deserialize, Deserializer, Serialize};

/// Builds the listener discovery URL for a sidecar running on `local_ip`.
pub fn listeners_url(pilot_base_url: &str, local_ip: &str) -> String {
    format!(
        "{}/v1/listeners/x/sidecar~{}~x~x",
        pilot_base_url.trim_end_matches('/'),
        local_ip
    )
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ListenersResponse {
    #[serde(
        rename = "Listeners",
        alias = "listeners",
        default,
        deserialize_with = "null_as_default"
    )]
    pub listeners: Vec<ListenerDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ListenerDescriptor {
    /// Diagnostic only.
    #[serde(
        rename = "Name",
        alias = "name",
        default,
        deserialize_with = "null_as_default"
    )]
    pub name: String,

    #[serde(
        rename = "Address",
        alias = "address",
        default,
        deserialize_with = "null_as_default"
    )]
    pub address: String,

    #[serde(
        rename = "Filters",
        alias = "filters",
        default,
        deserialize_with = "null_as_default"
    )]
    pub filters: Vec<FilterConfig>,
}

impl ListenerDescriptor {
    pub fn new(name: impl Into<String>, filters: Vec<FilterConfig>) -> Self {
        Self {
            name: name.into(),
            address: String::new(),
            filters,
        }
    }

    /// Returns the route that decides whether this listener carries a
    /// virtual IP mapping.
    ///
    /// Only the first route of the first filter is ever inspected. Egress
    /// listeners generated for a virtual IP carry exactly one active route;
    /// anything after it is ignored rather than merged.
    pub fn primary_route(&self) -> Result<&Route, SkipReason> {
        let filter = self.filters.first().ok_or(SkipReason::NoFilters)?;
        filter
            .config
            .route_config
            .routes
            .first()
            .ok_or(SkipReason::NoRoutes)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterConfig {
    #[serde(
        rename = "Config",
        alias = "config",
        default,
        deserialize_with = "null_as_default"
    )]
    pub config: FilterSettings,
}

impl FilterConfig {
    pub fn with_routes(routes: Vec<Route>) -> Self {
        Self {
            config: FilterSettings {
                route_config: RouteConfig { routes },
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterSettings {
    #[serde(default, deserialize_with = "null_as_default")]
    pub route_config: RouteConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Route {
    /// `out.<hostname>|<tag>` for virtual IP egress routes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cluster: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub destination_ip_list: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_ports: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_ip_list: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ports: Option<String>,
}

impl Route {
    pub fn new(cluster: impl Into<String>, destination_ip_list: Vec<&str>) -> Self {
        Self {
            cluster: cluster.into(),
            destination_ip_list: destination_ip_list.into_iter().map(String::from).collect(),
            ..Self::default()
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
