//! Unified error type for navigation state adaptation
//!
//! Only one condition is fatal to navigation: a path that cannot be parsed
//! into any route tree. The remaining variants cover configuration loading,
//! which happens once at startup.

use serde::{Deserialize, Serialize};

/// Errors raised by the navigation adapter and its configuration layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum NavError {
    /// The path did not match any configured screen
    #[error("Unable to parse path: {path}")]
    PathParse {
        /// The path as handed to the parser (policy segment already stripped)
        path: String,
    },

    /// Configuration could not be read or deserialized
    #[error("Config error: {message}")]
    Config {
        /// Error message describing the configuration failure
        message: String,
    },

    /// A linking pattern is malformed
    #[error("Invalid pattern '{pattern}' for screen {screen}: {message}")]
    InvalidPattern {
        /// Screen the pattern belongs to
        screen: String,
        /// The offending pattern
        pattern: String,
        /// What is wrong with it
        message: String,
    },
}

impl NavError {
    /// Create a path parse error
    pub fn path_parse(path: impl Into<String>) -> Self {
        Self::PathParse { path: path.into() }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(
        screen: impl Into<String>,
        pattern: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidPattern {
            screen: screen.into(),
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Whether the caller must abandon the navigation attempt
    #[must_use]
    pub fn is_fatal_to_navigation(&self) -> bool {
        matches!(self, Self::PathParse { .. })
    }
}

impl From<toml::de::Error> for NavError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("Invalid TOML: {err}"))
    }
}

/// Standard Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavError>;
