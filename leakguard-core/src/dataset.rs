//! Sensor Readings and the Per-Prediction Dataset
//!
//! A prediction takes one snapshot pair per sensor: the pressure under normal
//! operation and the pressure during the drop. Upstream loaders hand these
//! over as parallel arrays. They are grouped here into one record per sensor
//! so the index of a sensor can never drift between arrays.
//!
//! ## Checks on construction
//!
//! | Check | Error |
//! |-------|-------|
//! | at least one sensor | `EmptyInput` |
//! | all arrays (and names, when given) share one length | `LengthMismatch` |
//! | every number finite | `InvalidValue` |
//! | normal pressure > 0 (it is a divisor) | `DegenerateData` |
//! | positions strictly increasing | `UnorderedPositions` |
//!
//! Positions outside `[0, pipeline_length]` are accepted. Neighbor contrast
//! and the gradient use index adjacency, hence the ordering requirement.

use alloc::{format, string::String, vec::Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::{EstimationError, EstimationResult},
    traits::{first_invalid, Validatable},
};

/// One pressure sensor's snapshot pair
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorReading {
    /// Display name, `"Sensor {n}"` (1-based) when not supplied
    pub name: String,
    /// Distance along the pipeline
    pub position: f64,
    /// Pressure under normal operation
    pub normal_pressure: f64,
    /// Pressure during the drop event
    pub drop_pressure: f64,
}

impl SensorReading {
    /// Create a reading
    pub fn new(name: impl Into<String>, position: f64, normal_pressure: f64, drop_pressure: f64) -> Self {
        Self {
            name: name.into(),
            position,
            normal_pressure,
            drop_pressure,
        }
    }

    /// `normal - drop`
    pub fn pressure_change(&self) -> f64 {
        self.normal_pressure - self.drop_pressure
    }

    /// `drop / normal`
    pub fn pressure_ratio(&self) -> f64 {
        self.drop_pressure / self.normal_pressure
    }
}

/// Default name for the sensor at `index`
pub fn default_sensor_name(index: usize) -> String {
    format!("Sensor {}", index + 1)
}

/// Validated, immutable set of readings for one prediction call
#[derive(Debug, Clone, PartialEq)]
pub struct SensorDataset {
    readings: Vec<SensorReading>,
}

impl SensorDataset {
    /// Build from already-grouped readings
    pub fn new(readings: Vec<SensorReading>) -> EstimationResult<Self> {
        if readings.is_empty() {
            return Err(EstimationError::EmptyInput);
        }

        for (index, reading) in readings.iter().enumerate() {
            if !reading.position.is_valid() {
                return Err(EstimationError::InvalidValue { field: "sensor_locations", index });
            }
            if !reading.normal_pressure.is_valid() {
                return Err(EstimationError::InvalidValue { field: "normal_pressure", index });
            }
            if !reading.drop_pressure.is_valid() {
                return Err(EstimationError::InvalidValue { field: "drop_pressure", index });
            }
            if reading.normal_pressure <= 0.0 {
                return Err(EstimationError::DegenerateData {
                    reason: "normal pressure must be positive",
                });
            }
        }

        if let Some(index) = readings
            .windows(2)
            .position(|pair| pair[1].position <= pair[0].position)
        {
            return Err(EstimationError::UnorderedPositions { index: index + 1 });
        }

        Ok(Self { readings })
    }

    /// Build from the parallel arrays an external loader produces
    ///
    /// `names`, when present, must have the same length as `positions`.
    pub fn from_arrays(
        positions: &[f64],
        normal_pressure: &[f64],
        drop_pressure: &[f64],
        names: Option<&[String]>,
    ) -> EstimationResult<Self> {
        let n = positions.len();
        if n == 0 {
            return Err(EstimationError::EmptyInput);
        }
        check_length("normal_pressure", n, normal_pressure.len())?;
        check_length("drop_pressure", n, drop_pressure.len())?;
        if let Some(names) = names {
            check_length("sensor_names", n, names.len())?;
        }

        // Report the array-level position of a bad value before grouping
        for (field, values) in [
            ("sensor_locations", positions),
            ("normal_pressure", normal_pressure),
            ("drop_pressure", drop_pressure),
        ] {
            if let Some(index) = first_invalid(values) {
                return Err(EstimationError::InvalidValue { field, index });
            }
        }

        let readings = (0..n)
            .map(|i| SensorReading {
                name: names
                    .map(|names| names[i].clone())
                    .unwrap_or_else(|| default_sensor_name(i)),
                position: positions[i],
                normal_pressure: normal_pressure[i],
                drop_pressure: drop_pressure[i],
            })
            .collect();

        Self::new(readings)
    }

    /// Number of sensors (always at least one)
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Readings in position order
    pub fn readings(&self) -> &[SensorReading] {
        &self.readings
    }

    /// Sensor positions
    pub fn positions(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.position).collect()
    }

    /// `normal - drop` per sensor
    pub fn pressure_changes(&self) -> Vec<f64> {
        self.readings.iter().map(SensorReading::pressure_change).collect()
    }

    /// `drop / normal` per sensor
    pub fn pressure_ratios(&self) -> Vec<f64> {
        self.readings.iter().map(SensorReading::pressure_ratio).collect()
    }
}

fn check_length(field: &'static str, expected: usize, actual: usize) -> EstimationResult<()> {
    if expected != actual {
        return Err(EstimationError::LengthMismatch { field, expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn groups_parallel_arrays() {
        let ds = SensorDataset::from_arrays(
            &[0.0, 5.0, 12.0],
            &[100.0, 100.0, 80.0],
            &[100.0, 90.0, 60.0],
            None,
        )
        .unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.readings()[1].name, "Sensor 2");
        assert_eq!(ds.pressure_changes(), vec![0.0, 10.0, 20.0]);
        assert_eq!(ds.pressure_ratios(), vec![1.0, 0.9, 0.75]);
    }

    #[test]
    fn keeps_supplied_names() {
        let names = vec![String::from("KP-0"), String::from("KP-7")];
        let ds = SensorDataset::from_arrays(&[0.0, 7.0], &[50.0, 50.0], &[49.0, 40.0], Some(names.as_slice()))
            .unwrap();
        assert_eq!(ds.readings()[1].name, "KP-7");
    }

    #[test]
    fn rejects_empty_input() {
        let err = SensorDataset::from_arrays(&[], &[], &[], None).unwrap_err();
        assert_eq!(err, EstimationError::EmptyInput);
        assert_eq!(SensorDataset::new(Vec::new()).unwrap_err(), EstimationError::EmptyInput);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = SensorDataset::from_arrays(&[0.0, 1.0], &[10.0, 10.0], &[9.0], None).unwrap_err();
        assert_eq!(
            err,
            EstimationError::LengthMismatch { field: "drop_pressure", expected: 2, actual: 1 }
        );

        let names = vec![String::from("only one")];
        let err = SensorDataset::from_arrays(&[0.0, 1.0], &[10.0, 10.0], &[9.0, 9.0], Some(names.as_slice()))
            .unwrap_err();
        assert!(matches!(err, EstimationError::LengthMismatch { field: "sensor_names", .. }));
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = SensorDataset::from_arrays(&[0.0, 1.0], &[10.0, f64::NAN], &[9.0, 9.0], None)
            .unwrap_err();
        assert_eq!(err, EstimationError::InvalidValue { field: "normal_pressure", index: 1 });
    }

    #[test]
    fn rejects_non_positive_normal_pressure() {
        let err = SensorDataset::from_arrays(&[0.0, 1.0], &[10.0, 0.0], &[9.0, 0.0], None)
            .unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn rejects_unordered_positions() {
        let err = SensorDataset::from_arrays(
            &[0.0, 10.0, 10.0],
            &[10.0; 3],
            &[9.0; 3],
            None,
        )
        .unwrap_err();
        assert_eq!(err, EstimationError::UnorderedPositions { index: 2 });
    }

    #[test]
    fn accepts_positions_outside_pipeline() {
        assert!(SensorDataset::from_arrays(&[-5.0, 500.0], &[10.0; 2], &[9.0; 2], None).is_ok());
    }
}
