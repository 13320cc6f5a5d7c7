//! Area config construction.

use crate::config::AreaConfig;
use tracing::debug;

/// Optional inputs to [`create_area_config`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaConfigOptions {
    /// Import policy name (default: none).
    pub policy: Option<String>,

    /// Allocate adjacency labels in this area (default: false).
    pub enable_adj_labels: bool,
}

impl AreaConfigOptions {
    /// Options naming an import policy, adjacency labels off.
    pub fn with_policy(policy: impl Into<String>) -> Self {
        Self {
            policy: Some(policy.into()),
            ..Default::default()
        }
    }
}

/// Build one area config.
///
/// Every value is copied verbatim. Regexes are not compiled and the area id
/// is not checked for uniqueness; both are left to whoever loads the config.
pub fn create_area_config<N, I>(
    area_id: impl Into<String>,
    neighbor_regexes: N,
    interface_regexes: I,
    opts: AreaConfigOptions,
) -> AreaConfig
where
    N: IntoIterator,
    N::Item: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
{
    let AreaConfigOptions {
        policy,
        enable_adj_labels,
    } = opts;

    let area = AreaConfig {
        area_id: area_id.into(),
        neighbor_regexes: neighbor_regexes.into_iter().map(Into::into).collect(),
        interface_regexes: interface_regexes.into_iter().map(Into::into).collect(),
        policy,
        enable_adj_labels,
    };

    debug!(
        area_id = %area.area_id,
        neighbors = area.neighbor_regexes.len(),
        interfaces = area.interface_regexes.len(),
        "built area config"
    );
    area
}
