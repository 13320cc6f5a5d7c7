//! Configuration records for the Open/R daemon.
//!
//! `AreaConfig` and `OpenrDaemonConfig` are plain data. They support
//! forward-compatible YAML/JSON parsing (unknown fields are ignored) and
//! defaults for omitted fields, but perform no validation; the daemon
//! owns that.

mod diff;
mod model;
mod operations;
pub mod types;


// Re-export public API
pub use diff::{ConfigDifference, diff_configs};
pub use model::{AreaConfig, OpenrDaemonConfig};
pub use types::{ConfigFormat, DEFAULT_DOMAIN_NAME};

pub(crate) use operations::{load_file, render_as};
