//! Implementation of the `openr-testcfg compare` command.

use crate::cli::CompareArgs;
use crate::config::{ConfigDifference, OpenrDaemonConfig, diff_configs};
use crate::error::{Result, TestCfgError};
use std::path::Path;

/// Execute the `compare` command.
///
/// Exits with the config-mismatch code when the files differ.
pub fn cmd_compare(args: CompareArgs) -> Result<()> {
    let diffs = compare_files(&args.left, &args.right)?;

    if diffs.is_empty() {
        println!("SAME");
        return Ok(());
    }

    println!("DIFF FOUND!");
    println!(
        "== diff({}, {}) ==",
        args.left.display(),
        args.right.display()
    );
    for diff in &diffs {
        println!("{}", diff);
    }
    Err(TestCfgError::ConfigMismatch(diffs.len()))
}

pub(crate) fn compare_files(left: &Path, right: &Path) -> Result<Vec<ConfigDifference>> {
    let left = OpenrDaemonConfig::load(left)?;
    let right = OpenrDaemonConfig::load(right)?;
    diff_configs(&left, &right)
}
