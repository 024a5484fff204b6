//! Error types for the README generator core.

use std::{error::Error, fmt, io};

/// Error type for README generation operations.
#[derive(Debug)]
pub enum ReadmesError {
    /// An underlying I/O error.
    Io(io::Error),
    /// A JSON serialization or parsing error.
    Json(serde_json::Error),
    /// The approved-project catalog could not be fetched or parsed.
    Catalog(String),
    /// The repository manifest is missing, unreadable, or malformed.
    Manifest(String),
}

impl fmt::Display for ReadmesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Json(err) => write!(f, "json error: {err}"),
            Self::Catalog(message) => write!(f, "catalog error: {message}"),
            Self::Manifest(message) => write!(f, "manifest error: {message}"),
        }
    }
}

impl Error for ReadmesError {}

impl From<io::Error> for ReadmesError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ReadmesError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Convenience result type for README generation.
pub type Result<T> = std::result::Result<T, ReadmesError>;

#[cfg(test)]
mod tests {
    use super::ReadmesError;
    use std::io;

    #[test]
    fn io_error_formats_message() {
        let error = ReadmesError::Io(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(format!("{error}"), "io error: boom");
    }

    #[test]
    fn catalog_error_formats_message() {
        let error = ReadmesError::Catalog("fetch failed".to_string());
        assert_eq!(format!("{error}"), "catalog error: fetch failed");
    }

    #[test]
    fn manifest_error_formats_message() {
        let error = ReadmesError::Manifest("bad manifest".to_string());
        assert_eq!(format!("{error}"), "manifest error: bad manifest");
    }

    #[test]
    fn from_io_error_maps_variant() {
        let error: ReadmesError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        match error {
            ReadmesError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Io variant, got {other:?}"),
        }
    }

    #[test]
    fn from_json_error_maps_variant() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: ReadmesError = parse_error.into();
        assert!(matches!(error, ReadmesError::Json(_)));
    }
}
