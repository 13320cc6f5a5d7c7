//! Structural comparison of two daemon configs.
//!
//! Both sides are converted to JSON trees and walked together. Arrays are
//! compared by position, so reordered areas show up as differences.

use super::model::OpenrDaemonConfig;
use crate::error::{Result, TestCfgError};
use serde_json::Value;
use std::fmt;

/// One differing leaf between two configs.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDifference {
    /// Dotted path to the leaf, e.g. `areas[1].area_id`.
    pub path: String,
    /// Value on the left side, `None` when the key is absent there.
    pub left: Option<Value>,
    /// Value on the right side, `None` when the key is absent there.
    pub right: Option<Value>,
}

impl fmt::Display for ConfigDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: &Option<Value>| match v {
            Some(v) => v.to_string(),
            None => "<absent>".to_string(),
        };
        write!(f, "{}: {} -> {}", self.path, show(&self.left), show(&self.right))
    }
}

/// Compare two configs and list every differing leaf.
pub fn diff_configs(
    left: &OpenrDaemonConfig,
    right: &OpenrDaemonConfig,
) -> Result<Vec<ConfigDifference>> {
    let left = to_value(left)?;
    let right = to_value(right)?;

    let mut out = Vec::new();
    walk("", Some(&left), Some(&right), &mut out);
    Ok(out)
}

fn to_value(config: &OpenrDaemonConfig) -> Result<Value> {
    serde_json::to_value(config)
        .map_err(|e| TestCfgError::ParseError(format!("failed to convert config to JSON: {}", e)))
}

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn walk(path: &str, left: Option<&Value>, right: Option<&Value>, out: &mut Vec<ConfigDifference>) {
    match (left, right) {
        (Some(Value::Object(l)), Some(Value::Object(r))) => {
            // Left keys first, then keys only on the right, so output order is stable.
            for (key, lv) in l {
                walk(&child_path(path, key), Some(lv), r.get(key), out);
            }
            for (key, rv) in r {
                if !l.contains_key(key) {
                    walk(&child_path(path, key), None, Some(rv), out);
                }
            }
        }
        (Some(Value::Array(l)), Some(Value::Array(r))) => {
            for i in 0..l.len().max(r.len()) {
                walk(&format!("{}[{}]", path, i), l.get(i), r.get(i), out);
            }
        }
        (l, r) if l == r => {}
        (l, r) => out.push(ConfigDifference {
            path: path.to_string(),
            left: l.cloned(),
            right: r.cloned(),
        }),
    }
}
