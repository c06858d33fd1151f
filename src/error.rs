//! Error types for the benchmark harness.
//!
//! The kernels in [`crate::numerics`] have no error paths: every misuse is a precondition
//! violation. Only the I/O around them can fail: reading input arrays, writing the
//! report, and validating the command line.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid npy file {path}: {source}")]
    Npy {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported array shape {0:?}: expected 1 or 2 dimensions")]
    Shape(Vec<u64>),

    #[error("Input {0} holds no values")]
    EmptyInput(PathBuf),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_message() {
        let e = Error::Shape(vec![2, 3, 4]);
        assert_eq!(
            e.to_string(),
            "Unsupported array shape [2, 3, 4]: expected 1 or 2 dimensions"
        );
    }

    #[test]
    fn test_io_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: Error = io.into();
        assert!(matches!(e, Error::Io(_)));
        assert_eq!(e.to_string(), "IO error: gone");
    }
}
