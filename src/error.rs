//! Error types for openr-testcfg.
//!
//! Building configs never fails. Errors come from the surrounding
//! operations: file I/O, YAML/JSON parsing, regex matching and the CLI.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for openr-testcfg operations.
#[derive(Error, Debug)]
pub enum TestCfgError {
    /// User provided invalid arguments or an unusable file.
    #[error("{0}")]
    UserError(String),

    /// A config could not be parsed or serialized.
    #[error("Parse failed: {0}")]
    ParseError(String),

    /// An area regex failed to compile when it was used for matching.
    #[error("invalid regex '{pattern}': {reason}")]
    InvalidRegex { pattern: String, reason: String },

    /// Two configs differ.
    #[error("configs differ in {0} place(s)")]
    ConfigMismatch(usize),
}

impl TestCfgError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TestCfgError::UserError(_) => exit_codes::USER_ERROR,
            TestCfgError::InvalidRegex { .. } => exit_codes::USER_ERROR,
            TestCfgError::ParseError(_) => exit_codes::PARSE_FAILURE,
            TestCfgError::ConfigMismatch(_) => exit_codes::CONFIG_MISMATCH,
        }
    }
}

/// Result type alias for openr-testcfg operations.
pub type Result<T> = std::result::Result<T, TestCfgError>;
