//! Error types for the classification capability boundary

use thiserror::Error;

/// Errors a classification backend may report
///
/// The extraction core itself has no fatal errors; a failed
/// classification degrades the record to `primary_type = "unknown"`.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// The backing model or service could not be reached
    #[error("classifier backend unavailable: {0}")]
    Unavailable(String),

    /// A label carried a confidence outside [0, 1]
    #[error("confidence {confidence} for label {label} is outside [0, 1]")]
    ConfidenceRange { label: String, confidence: f64 },
}
