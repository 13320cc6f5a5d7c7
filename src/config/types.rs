//! Default values shared by the config records and the builder options.
//!
//! Both `OpenrDaemonConfig` and `BasicConfigOptions` deserialize with these
//! so a record read from an empty file equals the all-defaults build.

/// Domain name used when none is supplied.
pub const DEFAULT_DOMAIN_NAME: &str = "domain";

/// File format of a config on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from a file path: `.json` is JSON, anything else YAML.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

// Default value functions for serde
pub fn default_domain_name() -> String {
    DEFAULT_DOMAIN_NAME.to_string()
}
pub fn default_true() -> bool {
    true
}
