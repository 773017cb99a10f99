//! Error types for transition configuration.

use std::path::PathBuf;

/// Result type alias for transition configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading transition configuration.
///
/// Selecting a transition never fails; these only come from parsing
/// platform names and loading overrides.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Platform name not recognized.
    #[error("Unknown platform '{name}'")]
    UnknownPlatform { name: String },

    /// Malformed overrides document.
    #[error("Failed to parse transition overrides: {0}")]
    Parse(#[from] toml::de::Error),

    /// File I/O error.
    #[error("Failed to read transition overrides '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Out-of-range value.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl Error {
    /// Create an unknown platform error.
    pub fn unknown_platform(name: impl Into<String>) -> Self {
        Self::UnknownPlatform { name: name.into() }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a value error.
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}
