//! Implementation of the `openr-testcfg show` command.
//!
//! Parses a config file the same way tests load it and prints the parsed
//! result as JSON, so defaults filled in for missing keys are visible.

use crate::cli::ShowArgs;
use crate::config::OpenrDaemonConfig;
use crate::error::Result;
use std::path::Path;

/// Execute the `show` command.
///
/// Failures are returned, not printed; `main` reports them once as
/// `FAILED: <reason>` on stdout (see [`super::failure_message`]).
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let json = render_parsed(&args.file)?;
    println!("{}", json);
    Ok(())
}

pub(crate) fn render_parsed(path: &Path) -> Result<String> {
    OpenrDaemonConfig::load(path)?.to_json()
}
