//! Error types for configuration composition

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for configuration composition operations
#[derive(Debug, Error)]
pub enum TatamiError {
    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Lookup of a plugin that is not present in the registry
    #[error("Unknown plugin '{name}'")]
    PluginNotFound { name: String },

    /// A registered plugin failed to produce its rule tables
    #[error("Failed to load plugin '{name}': {message}")]
    PluginLoad { name: String, message: String },

    /// A user-supplied finalize hook returned an error
    #[error("Finalize hook for '{scope}' failed: {source}")]
    Hook {
        scope: String,
        #[source]
        source: anyhow::Error,
    },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TatamiError {
    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a plugin-not-found error
    pub fn plugin_not_found(name: impl Into<String>) -> Self {
        Self::PluginNotFound { name: name.into() }
    }

    /// Create a plugin load error
    pub fn plugin_load(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PluginLoad {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a hook error for the given scope ("root" or a group name)
    pub fn hook_error(scope: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Hook {
            scope: scope.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<std::io::Error> for TatamiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: PathBuf::new(),
            source: err,
        }
    }
}

/// Result type for configuration composition operations
pub type Result<T> = std::result::Result<T, TatamiError>;
