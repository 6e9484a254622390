//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Catalog Browser
//!
//! Application-level failures: config and logging setup. Catalog loading has
//! its own taxonomy (`LoadError`) and never aborts the application; a failed
//! load is reported inside the session instead.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No platform config directory could be determined.
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// Logging setup failed.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl AppError {
    pub fn config_io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_io_names_the_file() {
        let err = AppError::config_io(
            "/etc/apex/config.toml",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/etc/apex/config.toml"), "{msg}");
        assert!(msg.contains("denied"), "{msg}");
    }

    #[test]
    fn io_errors_convert() {
        let err: AppError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, AppError::Io(_)));
    }
}
