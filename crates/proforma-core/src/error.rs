//! Error types for the proposal studio core.
//!
//! Only I/O-boundary work (persistence, the two service calls) carries an
//! error path; the pure computations (token rendering, date composition)
//! encode failure as the empty string and never raise.

use thiserror::Error;

/// Result type alias for core operations.
pub type ProformaResult<T> = Result<T, ProformaError>;

/// Errors that can occur at the core's I/O boundaries.
#[derive(Error, Debug)]
pub enum ProformaError {
    #[error("Generation service error: {0}")]
    GenerationService(String),

    #[error("Snapshot serialization error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ProformaError {
    fn from(err: reqwest::Error) -> Self {
        ProformaError::GenerationService(err.to_string())
    }
}
