//! openr-testcfg: configuration builders for Open/R daemon test harnesses.
//!
//! Tests describe the daemon they want with a few options and get a full
//! config back, filled in with test-friendly defaults. The builders never
//! validate; whatever loads the config downstream does that.

pub mod builder;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod random;

#[cfg(test)]
mod test_support;

pub use builder::{
    AreaConfigOptions, BasicConfigOptions, create_area_config, get_basic_openr_config,
};
pub use config::{AreaConfig, OpenrDaemonConfig};
pub use random::gen_random_str;
