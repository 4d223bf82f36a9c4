//! Leak location engine for LeakGuard
//!
//! Estimates where a single leak sits along a linear pipeline from two
//! static pressure snapshots per sensor (normal and dropped).
//! Every prediction is a pure function of its inputs and the model's
//! read-only configuration.
//!
//! Pipeline of a prediction:
//!
//! ```text
//! SensorDataset ─→ PressureProfile ─→ SuspicionScorer ─┬─→ EstimatorEnsemble ─→ ConfidenceLevel
//!                                                      │                      └→ InspectionZones
//!                                                      └─→ SensorRanker
//!                  pressure changes ─→ SeverityClassifier
//! ```
//!
//! ```
//! use leakguard_core::{LeakDetectionModel, ModelConfiguration, SensorDataset, Severity};
//!
//! let config = ModelConfiguration::builder(50.0).build()?;
//! let model = LeakDetectionModel::new(config);
//!
//! let dataset = SensorDataset::from_arrays(
//!     &[0.0, 10.0, 20.0, 30.0, 40.0],
//!     &[100.0; 5],
//!     &[100.0, 95.0, 60.0, 90.0, 100.0],
//!     None,
//! )?;
//!
//! let estimate = model.predict(&dataset)?;
//! assert_eq!(estimate.top_sensor_index, 2);
//! assert_eq!(estimate.severity, Severity::High);
//! # Ok::<(), leakguard_core::EstimationError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// Optional logging, compiled away without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod config;
pub mod confidence;
pub mod constants;
pub mod dataset;
pub mod ensemble;
pub mod errors;
pub mod model;
pub mod numeric;
pub mod ranking;
pub mod severity;
pub mod suspicion;
pub mod traits;

// Public API
pub use config::{MethodWeights, ModelConfiguration, ModelConfigurationBuilder};
pub use confidence::{ConfidenceLevel, InspectionZones, Zone};
pub use dataset::{SensorDataset, SensorReading};
pub use ensemble::{EnsembleEstimate, EstimationMethod, EstimatorEnsemble, MethodEstimates};
pub use errors::{EstimationError, EstimationResult};
pub use model::{LeakAssessment, LeakDetectionModel, LeakEstimate};
pub use ranking::{SensorAnalysis, SensorDiagnostic, SensorRanker};
pub use severity::{InspectionPriority, RecommendedAction, Severity, SeverityAssessment, SeverityClassifier};
pub use suspicion::{PressureProfile, SuspicionScorer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
