//! Load errors

use std::path::PathBuf;
use thiserror::Error;

/// Failure while building a [`crate::ConfigStore`].
///
/// Lookups never fail; only reading or parsing the configuration file does.
/// A file that does not exist is not an error (it loads as an empty layer).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed reading config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {format} in config file {}: {message}", .path.display())]
    Parse { path: PathBuf, format: &'static str, message: String },

    #[error("Unsupported config extension '.{extension}' for file {}", .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },
}

pub type Result<T> = std::result::Result<T, LoadError>;
