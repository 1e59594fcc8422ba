//! Error types for ephemeris loading.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from loading or parsing ephemeris data files.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphError {
    /// The data directory does not exist.
    DataDirNotFound(String),
    /// The sample file contained no valid record line.
    NoSamples(String),
    /// The metadata file contained no valid body line.
    NoMetadata(String),
    /// I/O error.
    Io(String),
}

impl Display for EphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataDirNotFound(path) => write!(f, "ephemeris data directory not found: {path}"),
            Self::NoSamples(path) => write!(f, "no valid ephemeris records in {path}"),
            Self::NoMetadata(path) => write!(f, "no valid body metadata in {path}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for EphError {}

impl From<std::io::Error> for EphError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
