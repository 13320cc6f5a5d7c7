//! CLI argument parsing for openr-testcfg.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::ConfigFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// openr-testcfg: generate and inspect Open/R configs for test environments.
#[derive(Parser, Debug)]
#[command(name = "openr-testcfg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for openr-testcfg.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a daemon config with test defaults.
    ///
    /// Starts from the defaults (or an options file) and applies flags on top.
    Basic(BasicArgs),

    /// Build a single area config.
    Area(AreaArgs),

    /// Print a random alphanumeric string.
    RandomStr(RandomStrArgs),

    /// Parse a config file and print it as JSON.
    ///
    /// Prints `FAILED: <reason>` and exits non-zero when the file cannot be parsed.
    Show(ShowArgs),

    /// Compare two config files.
    ///
    /// Prints SAME, or DIFF FOUND! followed by one line per differing field.
    Compare(CompareArgs),
}

/// Output format selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}

impl From<OutputFormat> for ConfigFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Yaml => ConfigFormat::Yaml,
            OutputFormat::Json => ConfigFormat::Json,
        }
    }
}

/// Where and how to write a generated config.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format. Defaults to the --output extension, else YAML.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write to this file (atomically) instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// Resolve the effective output format.
    pub fn resolved_format(&self) -> ConfigFormat {
        match (self.format, self.output.as_deref()) {
            (Some(f), _) => f.into(),
            (None, Some(path)) => ConfigFormat::from_path(path),
            (None, None) => ConfigFormat::Yaml,
        }
    }

    /// Output file, if any.
    pub fn output_path(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

/// Arguments for the `basic` command.
#[derive(Parser, Debug, Default)]
pub struct BasicArgs {
    /// YAML or JSON file with builder options; flags below override it.
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Node name.
    #[arg(long, conflicts_with = "random_node_name")]
    pub node_name: Option<String>,

    /// Generate a node name with this many random characters.
    #[arg(long, value_name = "LEN")]
    pub random_node_name: Option<usize>,

    /// Prefix for a generated node name.
    #[arg(long, requires = "random_node_name")]
    pub node_prefix: Option<String>,

    /// Domain name.
    #[arg(long)]
    pub domain: Option<String>,

    /// YAML or JSON file holding a list of area configs.
    #[arg(long)]
    pub areas: Option<PathBuf>,

    /// IPv4 support.
    #[arg(long, value_name = "BOOL")]
    pub enable_v4: Option<bool>,

    /// Segment routing.
    #[arg(long, value_name = "BOOL")]
    pub enable_segment_routing: Option<bool>,

    /// Dry-run mode.
    #[arg(long, value_name = "BOOL")]
    pub dryrun: Option<bool>,

    /// IPv4 over IPv6 next-hops.
    #[arg(long, value_name = "BOOL")]
    pub enable_v4_over_v6_nexthop: Option<bool>,

    /// Adjacency label allocation.
    #[arg(long, value_name = "BOOL")]
    pub enable_adj_labels: Option<bool>,

    /// Prepend label allocation.
    #[arg(long, value_name = "BOOL")]
    pub enable_prepend_labels: Option<bool>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `area` command.
#[derive(Parser, Debug, Default)]
pub struct AreaArgs {
    /// Area identifier.
    #[arg(long)]
    pub area_id: String,

    /// Neighbor regex (repeatable, order kept).
    #[arg(long = "neighbor-regex", value_name = "REGEX")]
    pub neighbor_regexes: Vec<String>,

    /// Interface regex (repeatable, order kept).
    #[arg(long = "interface-regex", value_name = "REGEX")]
    pub interface_regexes: Vec<String>,

    /// Import policy name.
    #[arg(long)]
    pub policy: Option<String>,

    /// Allocate adjacency labels in this area.
    #[arg(long)]
    pub enable_adj_labels: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `random-str` command.
#[derive(Parser, Debug)]
pub struct RandomStrArgs {
    /// Number of characters.
    pub len: usize,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Config file (YAML, or JSON with a .json extension).
    pub file: PathBuf,
}

/// Arguments for the `compare` command.
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Reference config file.
    pub left: PathBuf,

    /// Config file compared against the reference.
    pub right: PathBuf,
}

impl Command {
    /// Whether a failure is reported on stdout as part of the command's
    /// own output rather than as an error on stderr.
    pub fn reports_failure_inline(&self) -> bool {
        matches!(self, Command::Show(_))
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
