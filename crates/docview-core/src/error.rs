//! Error types for the Docview core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Docview.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration value rejected during validation.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A host environment call failed (missing window, rejected DOM call).
    #[error("Host error while {action}: {message}")]
    Host { action: String, message: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new host environment error.
    pub fn host(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Host {
            action: action.into(),
            message: message.into(),
        }
    }
}
