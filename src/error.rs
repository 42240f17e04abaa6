//! Error types for the vizkit library.

use std::fmt;
use std::io;

/// The main error type for vizkit operations.
#[derive(Debug)]
pub enum PlotError {
    /// Error during IO operations (reading configs, writing SVG files)
    Io(io::Error),
    /// Malformed JSON configuration
    Json(serde_json::Error),
    /// Invalid data provided for plotting
    InvalidData(String),
    /// Invalid configuration or parameters
    InvalidConfig(String),
    /// Empty data provided where non-empty data is required
    EmptyData,
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(err) => write!(f, "IO error: {}", err),
            PlotError::Json(err) => write!(f, "JSON error: {}", err),
            PlotError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            PlotError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            PlotError::EmptyData => write!(f, "Empty data provided"),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Io(err) => Some(err),
            PlotError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PlotError {
    fn from(err: io::Error) -> Self {
        PlotError::Io(err)
    }
}

impl From<serde_json::Error> for PlotError {
    fn from(err: serde_json::Error) -> Self {
        PlotError::Json(err)
    }
}

/// Result type alias for vizkit operations.
pub type PlotResult<T> = Result<T, PlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PlotError::InvalidConfig("tick count must be at least 2".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: tick count must be at least 2"
        );
        assert_eq!(PlotError::EmptyData.to_string(), "Empty data provided");
    }

    #[test]
    fn test_io_source_is_kept() {
        use std::error::Error;
        let err: PlotError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("IO error"));
    }
}
