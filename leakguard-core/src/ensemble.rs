//! Five-Method Location Ensemble
//!
//! ## Overview
//!
//! Each estimator turns the pressure profile into one position along the
//! pipeline. No single one is reliable on sparse sensors, so their results
//! are fused:
//!
//! ```text
//! Suspicion peak ──┐
//! Midpoint ────────┤
//! Gradient peak ───┼─→ weighted mean ─→ fused location
//! Max drop ────────┤        ↓
//! Weighted avg ────┘   population std ─→ dispersion
//! ```
//!
//! ## Estimators
//!
//! | Method | Estimate |
//! |--------|----------|
//! | Suspicion peak | `x[argmax(s)] - bias` |
//! | Midpoint | `(x[top] + x[top-1]) / 2`, absent when `top == 0` |
//! | Gradient peak | `x[argmax(|dΔp/dx|)]`, suspicion peak when `n < 3` |
//! | Max drop | `x[argmax(Δp)] - bias` |
//! | Weighted average | `Σ x·s / Σ s`, fails when `Σ s == 0` |
//!
//! All `argmax` ties resolve to the lowest index.
//!
//! ## Fusion
//!
//! Weights of the methods that produced an estimate are renormalized to sum
//! to one. An absent method is skipped, never replaced by a default value.
//! Dispersion is the unweighted population standard deviation of the
//! produced estimates.

use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    config::{MethodWeights, ModelConfiguration},
    constants::estimation::MIN_SENSORS_FOR_GRADIENT,
    errors::{EstimationError, EstimationResult},
    numeric,
    suspicion::PressureProfile,
};

/// The closed set of location estimators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EstimationMethod {
    /// Position of the most suspicious sensor, bias-corrected
    SuspicionPeak,
    /// Halfway between the most suspicious sensor and its predecessor
    Midpoint,
    /// Position of the steepest pressure-change gradient
    GradientPeak,
    /// Position of the largest pressure change, bias-corrected
    MaxDrop,
    /// Suspicion-weighted mean position
    WeightedAverage,
}

impl EstimationMethod {
    /// Every method, in fusion order
    pub const ALL: [Self; 5] = [
        Self::SuspicionPeak,
        Self::Midpoint,
        Self::GradientPeak,
        Self::MaxDrop,
        Self::WeightedAverage,
    ];

    /// Position in [`Self::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::SuspicionPeak => 0,
            Self::Midpoint => 1,
            Self::GradientPeak => 2,
            Self::MaxDrop => 3,
            Self::WeightedAverage => 4,
        }
    }

    /// Key used for this method in a stored weight map
    pub const fn weight_key(self) -> &'static str {
        match self {
            Self::SuspicionPeak => "suspicion_index",
            Self::Midpoint => "midpoint",
            Self::GradientPeak => "gradient",
            Self::MaxDrop => "pressure_drop",
            Self::WeightedAverage => "weighted_avg",
        }
    }

    /// Key used for this method in reported individual estimates
    pub const fn estimate_key(self) -> &'static str {
        match self {
            Self::SuspicionPeak => "suspicion_index",
            Self::Midpoint => "midpoint",
            Self::GradientPeak => "gradient",
            Self::MaxDrop => "max_drop",
            Self::WeightedAverage => "weighted_avg",
        }
    }

    /// Parse a stored weight-map key
    pub fn from_weight_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.weight_key() == key)
    }
}

impl fmt::Display for EstimationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.estimate_key())
    }
}

/// Individual estimate of every method; only the midpoint can be absent
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MethodEstimates {
    /// Suspicion-peak estimate
    #[cfg_attr(feature = "serde", serde(rename = "suspicion_index"))]
    pub suspicion_peak: f64,
    /// Midpoint estimate, `None` when the top sensor is the first one
    pub midpoint: Option<f64>,
    /// Gradient-peak estimate
    #[cfg_attr(feature = "serde", serde(rename = "gradient"))]
    pub gradient_peak: f64,
    /// Max-drop estimate
    pub max_drop: f64,
    /// Suspicion-weighted average
    #[cfg_attr(feature = "serde", serde(rename = "weighted_avg"))]
    pub weighted_average: f64,
}

impl MethodEstimates {
    /// Estimate of one method, `None` if it produced nothing
    pub fn get(&self, method: EstimationMethod) -> Option<f64> {
        match method {
            EstimationMethod::SuspicionPeak => Some(self.suspicion_peak),
            EstimationMethod::Midpoint => self.midpoint,
            EstimationMethod::GradientPeak => Some(self.gradient_peak),
            EstimationMethod::MaxDrop => Some(self.max_drop),
            EstimationMethod::WeightedAverage => Some(self.weighted_average),
        }
    }

    /// Produced estimates, in fusion order
    pub fn available(&self) -> impl Iterator<Item = (EstimationMethod, f64)> + '_ {
        EstimationMethod::ALL
            .into_iter()
            .filter_map(move |m| self.get(m).map(|v| (m, v)))
    }
}

/// Output of the ensemble
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnsembleEstimate {
    /// Weighted mean of the produced estimates
    pub fused_location: f64,
    /// Population standard deviation of the produced estimates
    pub dispersion: f64,
    /// Every method's own estimate
    pub per_method: MethodEstimates,
    /// Index of the most suspicious sensor
    pub top_sensor_index: usize,
}

/// Runs the five estimators and fuses them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorEnsemble {
    weights: MethodWeights,
    upstream_bias: f64,
}

impl EstimatorEnsemble {
    /// Create with explicit weights and bias
    pub fn new(weights: MethodWeights, upstream_bias: f64) -> Self {
        Self {
            weights,
            upstream_bias,
        }
    }

    /// Create from a model configuration
    pub fn from_config(config: &ModelConfiguration) -> Self {
        Self::new(*config.method_weights(), config.upstream_bias())
    }

    /// Estimate the leak location from a scored profile
    ///
    /// The profile's arrays must all have one entry per position; anything
    /// else fails with `LengthMismatch` before any estimate is computed.
    pub fn estimate(&self, profile: &PressureProfile) -> EstimationResult<EnsembleEstimate> {
        profile.check_shape()?;

        let top_sensor_index =
            numeric::argmax(&profile.suspicion).ok_or(EstimationError::EmptyInput)?;

        let suspicion_peak = profile.positions[top_sensor_index] - self.upstream_bias;
        let midpoint = self.midpoint(profile, top_sensor_index);
        let gradient_peak = self.gradient_peak(profile).unwrap_or(suspicion_peak);
        let max_drop = self.max_drop(profile)?;
        let weighted_average = self.weighted_average(profile)?;

        let per_method = MethodEstimates {
            suspicion_peak,
            midpoint,
            gradient_peak,
            max_drop,
            weighted_average,
        };

        log_debug!(
            "Ensemble estimates: peak={:.3} midpoint={:?} gradient={:.3} max_drop={:.3} weighted={:.3}",
            suspicion_peak, midpoint, gradient_peak, max_drop, weighted_average
        );

        let (fused_location, dispersion) = fuse(&per_method, &self.weights)?;

        Ok(EnsembleEstimate {
            fused_location,
            dispersion,
            per_method,
            top_sensor_index,
        })
    }

    fn midpoint(&self, profile: &PressureProfile, top: usize) -> Option<f64> {
        if top == 0 {
            log_debug!("Midpoint estimate unavailable: top sensor is the first sensor");
            return None;
        }
        Some((profile.positions[top] + profile.positions[top - 1]) / 2.0)
    }

    /// `None` below [`MIN_SENSORS_FOR_GRADIENT`]; the caller substitutes
    fn gradient_peak(&self, profile: &PressureProfile) -> Option<f64> {
        if profile.len() < MIN_SENSORS_FOR_GRADIENT {
            return None;
        }
        let slopes: Vec<f64> = numeric::gradient(&profile.changes, &profile.positions)
            .into_iter()
            .map(numeric::abs)
            .collect();
        numeric::argmax(&slopes).map(|i| profile.positions[i])
    }

    fn max_drop(&self, profile: &PressureProfile) -> EstimationResult<f64> {
        let idx = numeric::argmax(&profile.changes).ok_or(EstimationError::EmptyInput)?;
        Ok(profile.positions[idx] - self.upstream_bias)
    }

    fn weighted_average(&self, profile: &PressureProfile) -> EstimationResult<f64> {
        let total: f64 = profile.suspicion.iter().sum();
        if total == 0.0 {
            return Err(EstimationError::DegenerateData {
                reason: "suspicion scores sum to zero; weighted average undefined",
            });
        }

        let weighted: f64 = profile
            .positions
            .iter()
            .zip(&profile.suspicion)
            .map(|(x, s)| x * s)
            .sum();
        let estimate = weighted / total;

        if !estimate.is_finite() {
            return Err(EstimationError::DegenerateData {
                reason: "weighted average is not a finite number",
            });
        }
        Ok(estimate)
    }
}

/// Weighted mean over produced estimates and their population std
///
/// Fails when the methods that produced an estimate carry no weight at all.
pub fn fuse(estimates: &MethodEstimates, weights: &MethodWeights) -> EstimationResult<(f64, f64)> {
    let produced: Vec<(f64, f64)> = estimates
        .available()
        .map(|(method, value)| (value, weights.get(method)))
        .collect();

    let weight_total: f64 = produced.iter().map(|(_, w)| w).sum();
    if weight_total <= 0.0 {
        return Err(EstimationError::DegenerateData {
            reason: "available estimation methods carry zero total weight",
        });
    }

    let fused: f64 = produced
        .iter()
        .map(|(value, weight)| value * (weight / weight_total))
        .sum();

    let values: Vec<f64> = produced.iter().map(|(value, _)| *value).collect();
    let dispersion = numeric::population_std(&values).unwrap_or(0.0);

    log_debug!(
        "Fused {} estimates: location={:.3} dispersion={:.3}",
        values.len(), fused, dispersion
    );

    Ok((fused, dispersion))
}
