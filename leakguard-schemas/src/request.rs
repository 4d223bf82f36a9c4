//! Prediction Requests
//!
//! The request body carries the three parallel sensor arrays and optional
//! sensor names:
//!
//! ```json
//! {
//!   "sensor_locations": [0.0, 10.0, 20.0],
//!   "normal_pressure": [100.0, 100.0, 100.0],
//!   "drop_pressure": [98.0, 70.0, 95.0],
//!   "sensor_names": ["SP-01", "SP-02", "SP-03"]
//! }
//! ```
//!
//! Validation runs in two passes. The request-level pass only checks that
//! the arrays are present and line up; everything about their values is
//! left to [`SensorDataset::from_arrays`].

use leakguard_core::SensorDataset;
use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, SchemaResult};

/// Raw prediction request as received
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub sensor_locations: Option<Vec<f64>>,
    #[serde(default)]
    pub normal_pressure: Option<Vec<f64>>,
    #[serde(default)]
    pub drop_pressure: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor_names: Option<Vec<String>>,
}

impl PredictionRequest {
    /// Request with the three required arrays
    pub fn new(sensor_locations: Vec<f64>, normal_pressure: Vec<f64>, drop_pressure: Vec<f64>) -> Self {
        Self {
            sensor_locations: Some(sensor_locations),
            normal_pressure: Some(normal_pressure),
            drop_pressure: Some(drop_pressure),
            sensor_names: None,
        }
    }

    /// Attach sensor names
    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.sensor_names = Some(names);
        self
    }

    /// Parse a request body
    pub fn from_json_str(json: &str) -> SchemaResult<Self> {
        serde_json::from_str(json).map_err(SchemaError::InvalidJson)
    }

    /// Check presence and alignment of the sensor arrays
    pub fn validate(&self) -> SchemaResult<()> {
        let (Some(locations), Some(normal), Some(drop)) =
            (&self.sensor_locations, &self.normal_pressure, &self.drop_pressure)
        else {
            return Err(SchemaError::MissingFields);
        };

        if locations.len() != normal.len() || locations.len() != drop.len() {
            return Err(SchemaError::LengthMismatch);
        }
        Ok(())
    }

    /// Number of sensors in the request, zero if locations are missing
    pub fn sensor_count(&self) -> usize {
        self.sensor_locations.as_ref().map_or(0, Vec::len)
    }

    /// Validate and convert into an engine dataset
    pub fn to_dataset(&self) -> SchemaResult<SensorDataset> {
        self.validate()?;
        let (Some(locations), Some(normal), Some(drop)) =
            (&self.sensor_locations, &self.normal_pressure, &self.drop_pressure)
        else {
            return Err(SchemaError::MissingFields);
        };

        Ok(SensorDataset::from_arrays(
            locations,
            normal,
            drop,
            self.sensor_names.as_deref(),
        )?)
    }
}
