//! Config loading, serialization, and area matching helpers.

use super::model::{AreaConfig, OpenrDaemonConfig};
use super::types::ConfigFormat;
use crate::error::{Result, TestCfgError};
use crate::fs::atomic_write_file;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

fn parse_yaml<T: DeserializeOwned>(yaml: &str, what: &str) -> Result<T> {
    serde_yaml::from_str(yaml)
        .map_err(|e| TestCfgError::ParseError(format!("failed to parse {} YAML: {}", what, e)))
}

fn parse_json<T: DeserializeOwned>(json: &str, what: &str) -> Result<T> {
    serde_json::from_str(json)
        .map_err(|e| TestCfgError::ParseError(format!("failed to parse {} JSON: {}", what, e)))
}

fn render_yaml<T: Serialize>(value: &T, what: &str) -> Result<String> {
    serde_yaml::to_string(value).map_err(|e| {
        TestCfgError::ParseError(format!("failed to serialize {} to YAML: {}", what, e))
    })
}

fn render_json<T: Serialize>(value: &T, what: &str) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        TestCfgError::ParseError(format!("failed to serialize {} to JSON: {}", what, e))
    })
}

/// Read a file to a string with a user-facing error.
fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        TestCfgError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })
}

/// Parse `content` as `T` in the given format.
fn parse_as<T: DeserializeOwned>(content: &str, format: ConfigFormat, what: &str) -> Result<T> {
    match format {
        ConfigFormat::Yaml => parse_yaml(content, what),
        ConfigFormat::Json => parse_json(content, what),
    }
}

/// Render `value` in the given format.
pub(crate) fn render_as<T: Serialize>(
    value: &T,
    format: ConfigFormat,
    what: &str,
) -> Result<String> {
    match format {
        ConfigFormat::Yaml => render_yaml(value, what),
        ConfigFormat::Json => render_json(value, what),
    }
}

/// Load a `T` from a file, choosing the format from its extension.
pub(crate) fn load_file<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = read_file(path)?;
    let format = ConfigFormat::from_path(path);
    debug!(path = %path.display(), ?format, "loading {}", what);
    parse_as(&content, format, what)
}

impl OpenrDaemonConfig {
    /// Load a daemon config from a file.
    ///
    /// `.json` files are parsed as JSON, everything else as YAML. Missing
    /// keys take their defaults and unknown keys are ignored.
    ///
    /// # Arguments
    ///
    /// * `path` - The config file to read
    ///
    /// # Returns
    ///
    /// * `Ok(OpenrDaemonConfig)` - The parsed config
    /// * `Err(TestCfgError::UserError)` - If the file cannot be read
    /// * `Err(TestCfgError::ParseError)` - If the content is malformed
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openr_testcfg::OpenrDaemonConfig;
    ///
    /// let config = OpenrDaemonConfig::load("openr.yaml")?;
    /// println!("node: {}", config.node_name);
    /// # Ok::<(), openr_testcfg::error::TestCfgError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_file(path.as_ref(), "daemon config")
    }

    /// Atomically write this config to a file, format chosen by extension.
    ///
    /// `.json` paths get pretty-printed JSON, everything else YAML. The
    /// write goes through [`atomic_write_file`], so a reader never sees a
    /// half-written config.
    ///
    /// # Arguments
    ///
    /// * `path` - The target file path
    ///
    /// # Returns
    ///
    /// * `Ok(())` - On successful write
    /// * `Err(TestCfgError::ParseError)` - If serialization fails
    /// * `Err(TestCfgError::UserError)` - On write failure
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openr_testcfg::builder::{BasicConfigOptions, get_basic_openr_config};
    ///
    /// let config = get_basic_openr_config(BasicConfigOptions {
    ///     node_name: "node-1".to_string(),
    ///     ..Default::default()
    /// });
    /// config.save("openr.json")?;
    /// # Ok::<(), openr_testcfg::error::TestCfgError>(())
    /// ```
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = render_as(self, ConfigFormat::from_path(path), "daemon config")?;
        debug!(path = %path.display(), node = %self.node_name, "saving daemon config");
        atomic_write_file(path, &content)
    }

    /// Parse a daemon config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        parse_yaml(yaml, "daemon config")
    }

    /// Serialize to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        render_yaml(self, "daemon config")
    }

    /// Parse a daemon config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        parse_json(json, "daemon config")
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String> {
        render_json(self, "daemon config")
    }
}

impl AreaConfig {
    /// Parse an area config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        parse_yaml(yaml, "area config")
    }

    /// Serialize to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        render_yaml(self, "area config")
    }

    /// Parse an area config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        parse_json(json, "area config")
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String> {
        render_json(self, "area config")
    }

    /// Load a list of areas from a YAML or JSON file.
    pub fn load_list<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        load_file(path.as_ref(), "area list")
    }

    /// Whether any neighbor regex matches `node_name`.
    ///
    /// Patterns are matched the way the daemon matches them: the whole name,
    /// case-insensitively.
    pub fn matches_neighbor(&self, node_name: &str) -> Result<bool> {
        any_full_match(&self.neighbor_regexes, node_name)
    }

    /// Whether any interface regex matches `if_name`.
    pub fn matches_interface(&self, if_name: &str) -> Result<bool> {
        any_full_match(&self.interface_regexes, if_name)
    }
}

fn compile_anchored(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(&format!("^(?:{})$", pattern))
        .case_insensitive(true)
        .build()
        .map_err(|e| TestCfgError::InvalidRegex {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}

// Every pattern is compiled before matching so a malformed one is reported
// even when an earlier pattern would have matched.
fn any_full_match(patterns: &[String], input: &str) -> Result<bool> {
    let compiled = patterns
        .iter()
        .map(|p| compile_anchored(p))
        .collect::<Result<Vec<_>>>()?;
    Ok(compiled.iter().any(|re| re.is_match(input)))
}
