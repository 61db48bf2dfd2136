//! Dataset error types
//!
//! Raised only while reading a dataset from disk or text. The join and
//! aggregation stages never fail.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Dataset file could not be read
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not a JSON object with the expected top-level shape
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::Io {
            path: PathBuf::from("db.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read dataset \"db.json\": file not found"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DatasetError = json_err.into();
        assert!(matches!(err, DatasetError::Parse(_)));
    }
}
