//! Record types for area and daemon configuration.
//!
//! Field names on the wire follow the daemon's config schema
//! (`domain`, `include_interface_regexes`, `import_policy_name`,
//! `v4_over_v6_nexthop`). Unknown keys are ignored when reading.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration scope of one routing area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaConfig {
    /// Area identifier. Must be unique within a daemon config; not checked here.
    pub area_id: String,

    /// Regexes selecting which neighbors belong to this area, in order.
    #[serde(default)]
    pub neighbor_regexes: Vec<String>,

    /// Regexes selecting which interfaces belong to this area, in order.
    #[serde(default, rename = "include_interface_regexes")]
    pub interface_regexes: Vec<String>,

    /// Name of the import policy applied to this area.
    #[serde(
        default,
        rename = "import_policy_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub policy: Option<String>,

    /// Allocate adjacency labels for this area.
    #[serde(default)]
    pub enable_adj_labels: bool,
}

/// Full configuration of one daemon instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenrDaemonConfig {
    // =========================================================================
    // Identity
    // =========================================================================
    /// Node name (default: empty; tests usually supply or generate one).
    pub node_name: String,

    /// Domain name (default: "domain").
    #[serde(rename = "domain", default = "default_domain_name")]
    pub domain_name: String,

    /// Areas in insertion order.
    pub areas: Vec<AreaConfig>,

    // =========================================================================
    // Feature flags
    // =========================================================================
    /// IPv4 support (default: true).
    #[serde(default = "default_true")]
    pub enable_v4: bool,

    /// Segment routing support (default: false).
    pub enable_segment_routing: bool,

    /// Compute routes without programming them (default: true).
    #[serde(default = "default_true")]
    pub dryrun: bool,

    /// IPv4 prefixes with IPv6 next-hops (default: false).
    #[serde(rename = "v4_over_v6_nexthop")]
    pub enable_v4_over_v6_nexthop: bool,

    /// Adjacency label allocation (default: false).
    pub enable_adj_labels: bool,

    /// Prepend label allocation (default: false). Expects segment routing.
    pub enable_prepend_labels: bool,
}

impl Default for OpenrDaemonConfig {
    fn default() -> Self {
        Self {
            node_name: String::new(),
            domain_name: default_domain_name(),
            areas: Vec::new(),
            enable_v4: default_true(),
            enable_segment_routing: false,
            dryrun: default_true(),
            enable_v4_over_v6_nexthop: false,
            enable_adj_labels: false,
            enable_prepend_labels: false,
        }
    }
}

impl OpenrDaemonConfig {
    /// Look up an area by identifier. Returns the first match.
    pub fn area(&self, area_id: &str) -> Option<&AreaConfig> {
        self.areas.iter().find(|a| a.area_id == area_id)
    }

    /// Area identifiers in insertion order.
    pub fn area_ids(&self) -> Vec<&str> {
        self.areas.iter().map(|a| a.area_id.as_str()).collect()
    }
}
