//! Suspicion Scoring and Ensemble Constants

// ===== SUSPICION INDEX WEIGHTS =====

/// Weight of the normalized pressure change term.
///
/// The largest share: an absolute drop is the most direct leak signal.
pub const SUSPICION_CHANGE_WEIGHT: f64 = 0.4;

/// Weight of the normalized pressure-ratio term `(1 - drop/normal)`.
///
/// Captures relative loss, so low-pressure sensors are not drowned out by
/// high-pressure ones.
pub const SUSPICION_RATIO_WEIGHT: f64 = 0.3;

/// Weight of the neighbor contrast term.
///
/// Sum of absolute change differences to the adjacent sensors. A leak shows
/// as a local step, not a uniform drop.
pub const SUSPICION_NEIGHBOR_WEIGHT: f64 = 0.3;

// ===== ENSEMBLE =====

/// Default offset subtracted from peak-based estimates.
///
/// Sensors downstream of a leak register the drop first, so raw peaks sit
/// slightly past the leak. Same units as sensor positions.
pub const DEFAULT_UPSTREAM_BIAS: f64 = 0.5;

/// Minimum sensor count for the gradient-peak estimator.
///
/// Below this the estimator substitutes the suspicion-peak estimate.
pub const MIN_SENSORS_FOR_GRADIENT: usize = 3;

/// Default fusion weight of the suspicion-peak estimator.
pub const DEFAULT_WEIGHT_SUSPICION_PEAK: f64 = 0.25;

/// Default fusion weight of the midpoint estimator.
///
/// Lowest weight: it only interpolates between two sensors.
pub const DEFAULT_WEIGHT_MIDPOINT: f64 = 0.15;

/// Default fusion weight of the gradient-peak estimator.
pub const DEFAULT_WEIGHT_GRADIENT_PEAK: f64 = 0.20;

/// Default fusion weight of the max-drop estimator.
pub const DEFAULT_WEIGHT_MAX_DROP: f64 = 0.20;

/// Default fusion weight of the suspicion-weighted average estimator.
pub const DEFAULT_WEIGHT_WEIGHTED_AVERAGE: f64 = 0.20;
