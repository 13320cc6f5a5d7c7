//! Implementation of the `openr-testcfg basic` command.
//!
//! Options are layered: builder defaults, then the `--options` file, then
//! individual flags. An `--areas` file replaces any areas from the options
//! file rather than appending to them.

use super::emit;
use crate::builder::{BasicConfigOptions, get_basic_openr_config};
use crate::cli::BasicArgs;
use crate::config::{AreaConfig, OpenrDaemonConfig, load_file, render_as};
use crate::error::Result;
use crate::random::random_node_name;

/// Execute the `basic` command.
pub fn cmd_basic(args: BasicArgs) -> Result<()> {
    let config = build_basic_config(&args)?;
    let rendered = render_as(&config, args.output.resolved_format(), "daemon config")?;
    emit(&args.output, &rendered)
}

/// Resolve the builder options from `args` and build the config.
pub(crate) fn build_basic_config(args: &BasicArgs) -> Result<OpenrDaemonConfig> {
    let mut opts = match &args.options {
        Some(path) => load_file::<BasicConfigOptions>(path, "builder options")?,
        None => BasicConfigOptions::default(),
    };

    if let Some(name) = &args.node_name {
        opts.node_name = name.clone();
    }
    if let Some(len) = args.random_node_name {
        opts.node_name = random_node_name(args.node_prefix.as_deref().unwrap_or(""), len);
    }
    if let Some(domain) = &args.domain {
        opts.domain_name = domain.clone();
    }
    if let Some(path) = &args.areas {
        opts.areas = AreaConfig::load_list(path)?;
    }

    let overrides = [
        (args.enable_v4, &mut opts.enable_v4),
        (args.enable_segment_routing, &mut opts.enable_segment_routing),
        (args.dryrun, &mut opts.dryrun),
        (args.enable_v4_over_v6_nexthop, &mut opts.enable_v4_over_v6_nexthop),
        (args.enable_adj_labels, &mut opts.enable_adj_labels),
        (args.enable_prepend_labels, &mut opts.enable_prepend_labels),
    ];
    for (flag, field) in overrides {
        if let Some(value) = flag {
            *field = value;
        }
    }

    Ok(get_basic_openr_config(opts))
}
