//! Daemon config construction.

use crate::config::types::{default_domain_name, default_true};
use crate::config::{AreaConfig, OpenrDaemonConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Inputs to [`get_basic_openr_config`].
///
/// Every field has a default suited to unit tests. The struct deserializes
/// with the same defaults so a test environment can keep it in a YAML file.
/// Keys match the daemon config's wire keys, so a saved `OpenrDaemonConfig`
/// reads back as options; the Rust field names are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicConfigOptions {
    /// Node name (default: ""). See [`crate::random::random_node_name`].
    pub node_name: String,

    /// Domain name (default: "domain").
    #[serde(
        rename = "domain",
        alias = "domain_name",
        default = "default_domain_name"
    )]
    pub domain_name: String,

    /// Areas, kept in the given order (default: empty).
    pub areas: Vec<AreaConfig>,

    /// IPv4 support (default: true).
    #[serde(default = "default_true")]
    pub enable_v4: bool,

    /// Segment routing (default: false).
    pub enable_segment_routing: bool,

    /// Dry-run mode (default: true).
    #[serde(default = "default_true")]
    pub dryrun: bool,

    /// IPv4 over IPv6 next-hops (default: false).
    #[serde(rename = "v4_over_v6_nexthop", alias = "enable_v4_over_v6_nexthop")]
    pub enable_v4_over_v6_nexthop: bool,

    /// Adjacency label allocation (default: false).
    pub enable_adj_labels: bool,

    /// Prepend label allocation (default: false). Only meaningful with
    /// segment routing; the combination is not checked here.
    pub enable_prepend_labels: bool,
}

impl Default for BasicConfigOptions {
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

/// Build a daemon config for a unit-test environment.
///
/// Each option is assigned to the matching field as-is; nothing is derived
/// from other fields and the areas are not inspected.
pub fn get_basic_openr_config(opts: BasicConfigOptions) -> OpenrDaemonConfig {
    let BasicConfigOptions {
        node_name,
        domain_name,
        areas,
        enable_v4,
        enable_segment_routing,
        dryrun,
        enable_v4_over_v6_nexthop,
        enable_adj_labels,
        enable_prepend_labels,
    } = opts;

    if enable_prepend_labels && !enable_segment_routing {
        warn!(
            node = %node_name,
            "prepend labels enabled without segment routing; the daemon will likely reject this config"
        );
    }

    let config = OpenrDaemonConfig {
        node_name,
        domain_name,
        areas,
        enable_v4,
        enable_segment_routing,
        dryrun,
        enable_v4_over_v6_nexthop,
        enable_adj_labels,
        enable_prepend_labels,
    };

    debug!(
        node = %config.node_name,
        domain = %config.domain_name,
        areas = ?config.area_ids(),
        "built daemon config"
    );
    config
}
