//! Implementation of the `openr-testcfg random-str` command.

use crate::cli::RandomStrArgs;
use crate::error::Result;
use crate::random::gen_random_str;

/// Execute the `random-str` command.
pub fn cmd_random_str(args: RandomStrArgs) -> Result<()> {
    println!("{}", gen_random_str(args.len));
    Ok(())
}
