//! Per-Sensor Diagnostics and Suspicion Ranking
//!
//! Builds one report record per sensor and orders them by suspicion so the
//! field crew knows which stations to look at first. Both views are kept:
//! input order for plotting along the line, ranked order for triage.
//!
//! The sort is stable. Sensors with equal suspicion keep their input order,
//! so ranking the same input twice gives the same result.

use alloc::{string::String, vec::Vec};
use core::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dataset::SensorDataset,
    errors::{EstimationError, EstimationResult},
};

/// Report record for one sensor
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorDiagnostic {
    /// Sensor name
    pub sensor_name: String,
    /// Position along the pipeline (kilometre post)
    #[cfg_attr(feature = "serde", serde(rename = "kp"))]
    pub position: f64,
    /// Pressure under normal operation
    pub normal_pressure: f64,
    /// Pressure during the drop
    pub drop_pressure: f64,
    /// `normal - drop`
    pub pressure_change: f64,
    /// `drop / normal`
    pub pressure_ratio: f64,
    /// Suspicion index
    #[cfg_attr(feature = "serde", serde(rename = "suspicion_index"))]
    pub suspicion: f64,
    /// 1-based position in the ranked view
    pub rank: usize,
}

/// Input-order and ranked views of the same diagnostics
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorAnalysis {
    /// Input order
    pub data: Vec<SensorDiagnostic>,
    /// Descending suspicion
    pub ranked: Vec<SensorDiagnostic>,
}

impl SensorAnalysis {
    /// The `n` most suspicious sensors (fewer if there are fewer sensors)
    pub fn top(&self, n: usize) -> &[SensorDiagnostic] {
        &self.ranked[..n.min(self.ranked.len())]
    }
}

/// Builds and ranks sensor diagnostics
#[derive(Debug, Clone, Copy, Default)]
pub struct SensorRanker;

impl SensorRanker {
    /// Rank a dataset by its suspicion scores
    ///
    /// `suspicion` must be index-aligned with the dataset.
    pub fn rank(dataset: &SensorDataset, suspicion: &[f64]) -> EstimationResult<SensorAnalysis> {
        if suspicion.len() != dataset.len() {
            return Err(EstimationError::LengthMismatch {
                field: "suspicion_index",
                expected: dataset.len(),
                actual: suspicion.len(),
            });
        }

        let mut data: Vec<SensorDiagnostic> = dataset
            .readings()
            .iter()
            .zip(suspicion)
            .map(|(reading, &score)| SensorDiagnostic {
                sensor_name: reading.name.clone(),
                position: reading.position,
                normal_pressure: reading.normal_pressure,
                drop_pressure: reading.drop_pressure,
                pressure_change: reading.pressure_change(),
                pressure_ratio: reading.pressure_ratio(),
                suspicion: score,
                rank: 0,
            })
            .collect();

        let mut order: Vec<usize> = (0..data.len()).collect();
        // `sort_by` is stable: ties keep input order
        order.sort_by(|&a, &b| {
            suspicion[b]
                .partial_cmp(&suspicion[a])
                .unwrap_or(Ordering::Equal)
        });

        for (rank, &idx) in order.iter().enumerate() {
            data[idx].rank = rank + 1;
        }

        let ranked = order.iter().map(|&idx| data[idx].clone()).collect();

        Ok(SensorAnalysis { data, ranked })
    }
}
