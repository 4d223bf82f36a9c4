//! Constants for LeakGuard Core
//!
//! Every fixed number of the estimation design is defined here, grouped by
//! the stage that consumes it. None of these are configuration: changing one
//! changes the meaning of every stored prediction.
//!
//! ## Organization
//!
//! - **Estimation**: suspicion weights, default method weights, upstream bias
//! - **Zones**: confidence thresholds and inspection zone half-widths
//! - **Severity**: reference pressure and drop-percentage thresholds

/// Suspicion scoring and ensemble constants.
pub mod estimation;

/// Confidence thresholds and inspection zone sizes.
pub mod zones;

/// Severity classification thresholds.
pub mod severity;

pub use estimation::{
    DEFAULT_UPSTREAM_BIAS, MIN_SENSORS_FOR_GRADIENT,
    SUSPICION_CHANGE_WEIGHT, SUSPICION_NEIGHBOR_WEIGHT, SUSPICION_RATIO_WEIGHT,
};

pub use zones::{CRITICAL_ZONE_HALF_WIDTH, FOCUS_ZONE_HALF_WIDTH};

pub use severity::REFERENCE_PRESSURE;
