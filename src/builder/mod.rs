//! Config builders for test setup.
//!
//! Both builders are pure, single-shot constructors. They never fail and
//! never validate; composing areas into a daemon config is up to the caller:
//!
//! ```
//! use openr_testcfg::builder::{
//!     AreaConfigOptions, BasicConfigOptions, create_area_config, get_basic_openr_config,
//! };
//!
//! let area = create_area_config("area1", ["n.*"], ["eth.*"], AreaConfigOptions::default());
//! let config = get_basic_openr_config(BasicConfigOptions {
//!     node_name: "node-1".to_string(),
//!     areas: vec![area],
//!     ..Default::default()
//! });
//! assert_eq!(config.areas[0].area_id, "area1");
//! ```

mod area;
mod daemon;

#[cfg(test)]
mod tests;

pub use area::{AreaConfigOptions, create_area_config};
pub use daemon::{BasicConfigOptions, get_basic_openr_config};
