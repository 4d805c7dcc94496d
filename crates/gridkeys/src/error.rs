//! Error types for gridkeys.
//!
//! Navigation itself never fails: out-of-range targets and moves past the
//! grid edge are absorbed as no-ops. Errors only arise at the edges of the
//! crate, when reading configuration.

use std::path::PathBuf;

/// Result type alias for gridkeys operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur outside of navigation.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A direction name other than `ltr` or `rtl`.
    #[error("unknown direction '{0}', expected 'ltr' or 'rtl'")]
    UnknownDirection(String),

    /// Configuration text could not be parsed.
    #[error("invalid grid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration could not be serialized.
    #[error("failed to serialize grid configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Configuration file could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GridError {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
