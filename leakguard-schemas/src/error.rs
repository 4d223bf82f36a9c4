//! Errors raised while loading packages and validating requests

use std::path::PathBuf;

use leakguard_core::EstimationError;
use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema-level errors
///
/// The `Display` text is what ends up in the `error` field of a failure
/// envelope.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Model package path does not exist
    #[error("Model file not found: {}", path.display())]
    ModelNotFound {
        /// Path that was opened
        path: PathBuf,
    },

    /// Model package could not be read or decoded
    #[error("Error loading model: {0}")]
    ModelLoad(String),

    /// A stored method weight names no known estimation method
    #[error("Error loading model: unknown estimation method '{0}'")]
    UnknownMethod(String),

    /// Request body is not valid JSON for a prediction request
    #[error("Invalid JSON input: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// One of the three sensor arrays is absent
    #[error("Missing required input fields: sensor_locations, normal_pressure, drop_pressure")]
    MissingFields,

    /// The three sensor arrays disagree on length
    #[error("All sensor data arrays must have the same length")]
    LengthMismatch,

    /// Rejected by the estimation engine
    #[error(transparent)]
    Estimation(#[from] EstimationError),
}

impl SchemaError {
    /// True for errors caused by the request rather than the model package
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidJson(_) | Self::MissingFields | Self::LengthMismatch | Self::Estimation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_envelope_text() {
        assert_eq!(
            SchemaError::LengthMismatch.to_string(),
            "All sensor data arrays must have the same length"
        );
        assert_eq!(
            SchemaError::ModelNotFound { path: PathBuf::from("models/line.json") }.to_string(),
            "Model file not found: models/line.json"
        );
        assert!(SchemaError::from(EstimationError::EmptyInput)
            .to_string()
            .starts_with("Input is empty"));
    }

    #[test]
    fn request_errors() {
        assert!(SchemaError::MissingFields.is_request_error());
        assert!(SchemaError::Estimation(EstimationError::EmptyInput).is_request_error());
        assert!(!SchemaError::UnknownMethod("spline".into()).is_request_error());
    }
}
