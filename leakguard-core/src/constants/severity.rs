//! Severity Classification Thresholds
//!
//! Severity is driven by the mean pressure change expressed as a percentage
//! of a fixed full-scale reference pressure:
//!
//! ```text
//! avg_drop_pct = mean(normal - drop) / REFERENCE_PRESSURE × 100
//! ```
//!
//! The reference is not derived from the input. Readings must be in the unit
//! it assumes (psi) for the percentages to be meaningful.

/// Full-scale reference pressure (psi).
pub const REFERENCE_PRESSURE: f64 = 200.0;

/// Average drop above this percentage is `CRITICAL`.
pub const CRITICAL_DROP_PCT: f64 = 10.0;

/// Average drop above this percentage is `HIGH`.
pub const HIGH_DROP_PCT: f64 = 5.0;

/// Average drop above this percentage is `MODERATE`; anything else is `LOW`.
pub const MODERATE_DROP_PCT: f64 = 2.0;
