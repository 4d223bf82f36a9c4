//! Error Types for Leak Estimation Failures
//!
//! ## Design Philosophy
//!
//! Errors follow the same rules as the rest of the engine:
//!
//! 1. **Small Size**: variants carry only `&'static str` and integers, so the
//!    enum is `Copy` and cheap to return from the prediction path.
//!
//! 2. **No Heap Allocation**: no `String` payloads. The same type works in
//!    `no_std` builds.
//!
//! 3. **Local Failure**: a failed call produces no partial result. The caller
//!    decides whether to retry with corrected input.
//!
//! ## Error Categories
//!
//! ### Input Shape
//! - `EmptyInput`: no sensors supplied
//! - `LengthMismatch`: parallel arrays disagree on length
//! - `UnorderedPositions`: positions not strictly increasing
//!
//! ### Degenerate Data
//! - `InvalidValue`: NaN or infinity in an input array
//! - `DegenerateData`: an estimate with no defined fallback (all-zero
//!   suspicion feeding the weighted average, non-positive normal pressure)
//!
//! ### Configuration
//! - `Configuration`: rejected at model construction, never at prediction
//!
//! ```rust
//! use leakguard_core::{EstimationError, SensorDataset};
//!
//! let result = SensorDataset::from_arrays(&[0.0, 10.0], &[100.0], &[90.0, 80.0], None);
//! match result {
//!     Err(EstimationError::LengthMismatch { field, .. }) => assert_eq!(field, "normal_pressure"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for estimation operations
pub type EstimationResult<T> = Result<T, EstimationError>;

/// Estimation errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimationError {
    /// No sensor readings were supplied
    #[error("Input is empty: at least one sensor reading is required")]
    EmptyInput,

    /// A parallel input array has a different length than the position array
    #[error("Length mismatch for {field}: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Name of the offending array
        field: &'static str,
        /// Length of the position array
        expected: usize,
        /// Length of the offending array
        actual: usize,
    },

    /// Sensor positions must be strictly increasing along the pipeline
    #[error("Sensor positions must be strictly increasing (violated at index {index})")]
    UnorderedPositions {
        /// Index of the first position not greater than its predecessor
        index: usize,
    },

    /// Value makes no numeric sense (NaN, infinity)
    #[error("Invalid value in {field} at index {index}: not a finite number")]
    InvalidValue {
        /// Name of the offending array
        field: &'static str,
        /// Index of the offending element
        index: usize,
    },

    /// Data for which an estimate has no defined fallback
    #[error("Degenerate data: {reason}")]
    DegenerateData {
        /// What made the data unusable
        reason: &'static str,
    },

    /// Model configuration rejected at construction time
    #[error("Invalid configuration: {reason}")]
    Configuration {
        /// Which setting was rejected
        reason: &'static str,
    },
}

impl EstimationError {
    /// True for the input-shape family (empty, mismatched, unordered)
    pub fn is_input_shape(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::LengthMismatch { .. } | Self::UnorderedPositions { .. }
        )
    }

    /// True for degenerate-data failures
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateData { .. } | Self::InvalidValue { .. })
    }
}
