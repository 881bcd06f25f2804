//! Error types for the shell
//!
//! Form validation failures are not errors here: they are shown inline as
//! view state messages. This module only covers the application plumbing.

use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// A configuration value could not be used
    #[error("Invalid configuration {key}={value:?}: {reason}")]
    InvalidConfig {
        /// Environment variable name
        key: String,
        /// Raw value that was rejected
        value: String,
        /// Why it was rejected
        reason: String,
    },
}

impl ShellError {
    pub(crate) fn invalid_config(key: &str, value: &str, reason: impl Into<String>) -> Self {
        ShellError::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
