//! Error types for geodesic-shapes

use std::fmt;
use std::io;

/// Result type for geodesic-shapes operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while generating geometries
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(io::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// Configuration could not be parsed
    Config(toml::de::Error),

    /// Caller broke a precondition (e.g. empty range, zero segments)
    Precondition(String),

    /// Geodesic solver received or produced a non-finite value
    Geodesic(String),

    /// Projection error
    Projection(String),

    /// Invalid ellipsoid name or projection definition
    InvalidSpec(String),

    /// Extent string did not hold four numbers
    InvalidExtent(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Json(e) => write!(f, "JSON error: {}", e),
            Error::Config(e) => write!(f, "Config error: {}", e),
            Error::Precondition(msg) => write!(f, "Precondition violated: {}", msg),
            Error::Geodesic(msg) => write!(f, "Geodesic error: {}", msg),
            Error::Projection(msg) => write!(f, "Projection error: {}", msg),
            Error::InvalidSpec(msg) => write!(f, "Invalid spec: {}", msg),
            Error::InvalidExtent(msg) => write!(f, "Invalid extent: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Json(e) => Some(e),
            Error::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json(error)
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::Config(error)
    }
}
