//! Implementation of the `openr-testcfg area` command.

use super::emit;
use crate::builder::{AreaConfigOptions, create_area_config};
use crate::cli::AreaArgs;
use crate::config::{AreaConfig, render_as};
use crate::error::Result;

/// Execute the `area` command.
pub fn cmd_area(args: AreaArgs) -> Result<()> {
    let area = build_area_config(&args);
    let rendered = render_as(&area, args.output.resolved_format(), "area config")?;
    emit(&args.output, &rendered)
}

pub(crate) fn build_area_config(args: &AreaArgs) -> AreaConfig {
    create_area_config(
        args.area_id.as_str(),
        &args.neighbor_regexes,
        &args.interface_regexes,
        AreaConfigOptions {
            policy: args.policy.clone(),
            enable_adj_labels: args.enable_adj_labels,
        },
    )
}
