//! Confidence Thresholds and Inspection Zones
//!
//! All values are in sensor position units (the pipeline's length unit,
//! typically kilometre posts).

// ===== CONFIDENCE (dispersion across method estimates) =====

/// Dispersion strictly below this is `VERY HIGH` confidence.
pub const CONFIDENCE_VERY_HIGH_BELOW: f64 = 1.0;

/// Dispersion strictly below this is `HIGH` confidence.
pub const CONFIDENCE_HIGH_BELOW: f64 = 3.0;

/// Dispersion strictly below this is `MODERATE` confidence; anything else is `LOW`.
pub const CONFIDENCE_MODERATE_BELOW: f64 = 5.0;

// ===== ZONES =====

/// Half-width of the focus zone around the fused estimate.
pub const FOCUS_ZONE_HALF_WIDTH: f64 = 3.0;

/// Half-width of the critical zone around the fused estimate.
pub const CRITICAL_ZONE_HALF_WIDTH: f64 = 1.5;
