//! Command implementations for openr-testcfg.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the shared output helper.

mod area;
mod basic;
mod compare;
mod random_str;
mod show;


use crate::cli::{Command, OutputArgs};
use crate::error::{Result, TestCfgError};
use crate::fs::atomic_write_file;
use tracing::info;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Basic(args) => basic::cmd_basic(args),
        Command::Area(args) => area::cmd_area(args),
        Command::RandomStr(args) => random_str::cmd_random_str(args),
        Command::Show(args) => show::cmd_show(args),
        Command::Compare(args) => compare::cmd_compare(args),
    }
}

/// Format a failed command's error for the user.
///
/// Commands that report inline (`show`) get `FAILED: <reason>` for stdout;
/// everything else gets `Error: <reason>` for stderr.
pub fn failure_message(err: &TestCfgError, reports_inline: bool) -> String {
    if reports_inline {
        format!("FAILED: {}", err)
    } else {
        format!("Error: {}", err)
    }
}

/// Write rendered output to the requested file, or stdout.
fn emit(output: &OutputArgs, rendered: &str) -> Result<()> {
    match output.output_path() {
        Some(path) => {
            atomic_write_file(path, rendered)?;
            info!(path = %path.display(), "wrote config");
        }
        None if rendered.ends_with('\n') => print!("{}", rendered),
        None => println!("{}", rendered),
    }
    Ok(())
}
