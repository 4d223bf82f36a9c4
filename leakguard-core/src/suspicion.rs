//! Suspicion Index Scoring
//!
//! ## Overview
//!
//! Every sensor gets a heuristic score for how close it likely sits to the
//! leak. Three signals, each normalized to the strongest sensor:
//!
//! ```text
//! change_score   = Δp[i] / max(Δp)
//! ratio_score    = (1 - r[i]) / max(1 - r)
//! neighbor_score = (|Δp[i] - Δp[i-1]| + |Δp[i] - Δp[i+1]|) / max(Δp)
//!
//! suspicion[i]   = 0.4·change + 0.3·ratio + 0.3·neighbor
//! ```
//!
//! Where `Δp = normal - drop` and `r = drop / normal`. Boundary sensors only
//! have one neighbor term.
//!
//! ## Degenerate Profiles
//!
//! No division happens unless its denominator is positive:
//! - `max(Δp) <= 0`: change score is the raw `Δp[i]`, neighbor score is 0
//! - `max(1 - r) <= 0`: ratio score is the raw `1 - r[i]`
//!
//! A flat profile (no drop anywhere) therefore scores zero everywhere.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::estimation::{
        SUSPICION_CHANGE_WEIGHT, SUSPICION_NEIGHBOR_WEIGHT, SUSPICION_RATIO_WEIGHT,
    },
    dataset::SensorDataset,
    errors::{EstimationError, EstimationResult},
    numeric,
};

/// Derived per-sensor arrays for one prediction, index-aligned with the dataset
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PressureProfile {
    /// Sensor positions
    pub positions: Vec<f64>,
    /// `normal - drop`
    pub changes: Vec<f64>,
    /// `drop / normal`
    pub ratios: Vec<f64>,
    /// Suspicion index
    pub suspicion: Vec<f64>,
}

impl PressureProfile {
    /// Derive changes, ratios and suspicion scores from a dataset
    pub fn from_dataset(dataset: &SensorDataset) -> EstimationResult<Self> {
        let positions = dataset.positions();
        let changes = dataset.pressure_changes();
        let ratios = dataset.pressure_ratios();
        let suspicion = SuspicionScorer::new().score(&changes, &ratios)?;

        Ok(Self {
            positions,
            changes,
            ratios,
            suspicion,
        })
    }

    /// Check that every derived array has one entry per position
    ///
    /// Profiles built by [`from_dataset`](Self::from_dataset) always pass;
    /// hand-built or deserialized ones may not.
    pub fn check_shape(&self) -> EstimationResult<()> {
        let expected = self.positions.len();
        if expected == 0 {
            return Err(EstimationError::EmptyInput);
        }
        for (field, actual) in [
            ("pressure_changes", self.changes.len()),
            ("pressure_ratios", self.ratios.len()),
            ("suspicion_index", self.suspicion.len()),
        ] {
            if actual != expected {
                return Err(EstimationError::LengthMismatch { field, expected, actual });
            }
        }
        Ok(())
    }

    /// Number of sensors
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when no sensors are present
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Weighted combination of change, ratio and neighbor-contrast signals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuspicionScorer {
    change_weight: f64,
    ratio_weight: f64,
    neighbor_weight: f64,
}

impl Default for SuspicionScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SuspicionScorer {
    /// Scorer with the fixed 0.4 / 0.3 / 0.3 weights
    pub const fn new() -> Self {
        Self {
            change_weight: SUSPICION_CHANGE_WEIGHT,
            ratio_weight: SUSPICION_RATIO_WEIGHT,
            neighbor_weight: SUSPICION_NEIGHBOR_WEIGHT,
        }
    }

    /// Score every sensor
    ///
    /// `changes` and `ratios` must be index-aligned and in position order.
    /// Arrays of different length are rejected with `LengthMismatch`.
    pub fn score(&self, changes: &[f64], ratios: &[f64]) -> EstimationResult<Vec<f64>> {
        let n = changes.len();
        if ratios.len() != n {
            return Err(EstimationError::LengthMismatch {
                field: "pressure_ratios",
                expected: n,
                actual: ratios.len(),
            });
        }

        let max_change = numeric::max(changes);
        let losses: Vec<f64> = ratios.iter().map(|r| 1.0 - r).collect();
        let max_loss = numeric::max(&losses);

        if max_change <= 0.0 {
            log_warn!(
                "Suspicion scoring: no positive pressure change across {} sensors, using raw values",
                n
            );
        }

        Ok((0..n)
            .map(|i| {
                let change_score = if max_change > 0.0 {
                    changes[i] / max_change
                } else {
                    changes[i]
                };

                let ratio_score = if max_loss > 0.0 {
                    losses[i] / max_loss
                } else {
                    losses[i]
                };

                let neighbor_score = if max_change > 0.0 {
                    neighbor_contrast(changes, i) / max_change
                } else {
                    0.0
                };

                self.change_weight * change_score
                    + self.ratio_weight * ratio_score
                    + self.neighbor_weight * neighbor_score
            })
            .collect())
    }

    /// Score a dataset directly
    pub fn score_dataset(&self, dataset: &SensorDataset) -> EstimationResult<Vec<f64>> {
        self.score(&dataset.pressure_changes(), &dataset.pressure_ratios())
    }
}

/// Sum of absolute change differences to the index neighbors of `i`
fn neighbor_contrast(changes: &[f64], i: usize) -> f64 {
    let mut contrast = 0.0;
    if i > 0 {
        contrast += numeric::abs(changes[i] - changes[i - 1]);
    }
    if i + 1 < changes.len() {
        contrast += numeric::abs(changes[i] - changes[i + 1]);
    }
    contrast
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn assert_close(got: &[f64], want: &[f64]) {
        assert_eq!(got.len(), want.len());
        for (g, w) in got.iter().zip(want) {
            assert!((g - w).abs() < 1e-9, "{:?} vs {:?}", got, want);
        }
    }

    #[test]
    fn scores_reference_profile() {
        // changes [0, 5, 40, 10, 0] on a 100 psi line
        let changes = [0.0, 5.0, 40.0, 10.0, 0.0];
        let ratios = [1.0, 0.95, 0.6, 0.9, 1.0];
        let scores = SuspicionScorer::new().score(&changes, &ratios).unwrap();
        assert_close(&scores, &[0.0375, 0.3875, 1.1875, 0.475, 0.075]);
    }

    #[test]
    fn flat_profile_scores_zero() {
        let scores = SuspicionScorer::new().score(&[0.0; 4], &[1.0; 4]).unwrap();
        assert_eq!(scores, vec![0.0; 4]);
    }

    #[test]
    fn single_sensor_has_no_neighbors() {
        // change 1.0 (normalized), ratio 1.0 (normalized), neighbor 0
        let scores = SuspicionScorer::new().score(&[20.0], &[0.8]).unwrap();
        assert_close(&scores, &[0.7]);
    }

    #[test]
    fn pressure_rise_uses_raw_values() {
        // Both sensors read above normal: every max is negative
        let scores = SuspicionScorer::new().score(&[-2.0, -4.0], &[1.02, 1.04]).unwrap();
        assert_close(&scores, &[0.4 * -2.0 + 0.3 * -0.02, 0.4 * -4.0 + 0.3 * -0.04]);
    }

    #[test]
    fn boundary_sensors_get_one_neighbor_term() {
        assert_eq!(neighbor_contrast(&[1.0, 4.0, 2.0], 0), 3.0);
        assert_eq!(neighbor_contrast(&[1.0, 4.0, 2.0], 1), 5.0);
        assert_eq!(neighbor_contrast(&[1.0, 4.0, 2.0], 2), 2.0);
    }

    #[test]
    fn mismatched_arrays_are_rejected() {
        let err = SuspicionScorer::new()
            .score(&[0.0, 5.0, 40.0], &[1.0, 0.95])
            .unwrap_err();
        assert_eq!(
            err,
            EstimationError::LengthMismatch { field: "pressure_ratios", expected: 3, actual: 2 }
        );
    }

    #[test]
    fn profile_shape_check() {
        let mut profile = PressureProfile {
            positions: vec![0.0, 10.0],
            changes: vec![0.0, 5.0],
            ratios: vec![1.0, 0.95],
            suspicion: vec![0.3, 1.0],
        };
        assert_eq!(profile.check_shape(), Ok(()));

        profile.changes.push(40.0);
        assert_eq!(
            profile.check_shape(),
            Err(EstimationError::LengthMismatch { field: "pressure_changes", expected: 2, actual: 3 })
        );

        let empty = PressureProfile {
            positions: vec![],
            changes: vec![],
            ratios: vec![],
            suspicion: vec![],
        };
        assert_eq!(empty.check_shape(), Err(EstimationError::EmptyInput));
    }
}
