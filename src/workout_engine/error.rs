use std::path::PathBuf;

use thiserror::Error;

/// Failure to supply category data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read exercise catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog document is not valid JSON or has the wrong shape.
    #[error("failed to parse exercise catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// Provider-specific failure with no underlying I/O error.
    #[error("exercise catalog unavailable: {0}")]
    Unavailable(String),
}

/// Everything that can stop a workout from being generated.
///
/// No partial series is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum WorkoutError {
    /// Malformed request, or a selected category missing or empty in the catalog.
    #[error("invalid workout request: {0}")]
    InvalidInput(String),
    /// The catalog provider failed; the provider's error is kept as the source.
    #[error(transparent)]
    CatalogUnavailable(#[from] CatalogError),
}
