//! openr-testcfg: generate and inspect Open/R configs for test environments.
//!
//! Parses arguments, installs logging, dispatches to the command handler,
//! and maps errors to exit codes.

use openr_testcfg::cli::Cli;
use openr_testcfg::{commands, exit_codes};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so generated configs on stdout stay clean.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);
    let inline = cli.command.reports_failure_inline();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Each failure is reported exactly once, on one channel.
            let message = commands::failure_message(&err, inline);
            if inline {
                println!("{}", message);
            } else {
                eprintln!("{}", message);
            }
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
