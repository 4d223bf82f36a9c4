//! Response Envelopes
//!
//! Every prediction answers with exactly one JSON object. Success:
//!
//! ```json
//! {
//!   "success": true,
//!   "timestamp": "2025-11-18T09:30:00+00:00",
//!   "model_info": { "version": "4.1", "pipeline_length": 26.0, ... },
//!   "prediction": { "final_estimate": 17.18, "confidence": "HIGH", ... },
//!   "leak_status": { "status": "leak", "location": "KM 17.18" },
//!   "sensors": { "active_count": 5, "data": [...], "ranked": [...] }
//! }
//! ```
//!
//! Failure:
//!
//! ```json
//! { "success": false, "error": "All sensor data arrays must have the same length" }
//! ```

use chrono::{DateTime, Utc};
use leakguard_core::{LeakAssessment, LeakEstimate, SensorDiagnostic};
use serde::{Deserialize, Serialize};

use crate::{error::SchemaError, package::ModelMetadata};

/// Number of ranked sensors reported by default
pub const DEFAULT_TOP_SENSORS: usize = 5;

/// Package metadata echoed back with every prediction
pub type ModelInfo = ModelMetadata;

/// Whether the fused estimate points at a leak on the line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeakState {
    /// Estimate lies strictly inside the pipeline
    Leak,
    /// Estimate at or beyond either end
    Clear,
}

/// Leak verdict with a human-readable location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeakStatus {
    pub status: LeakState,
    /// `"KM x.xx"`, only for [`LeakState::Leak`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl LeakStatus {
    /// Judge a fused location against the line length
    pub fn from_location(fused_location: f64, pipeline_length: f64) -> Self {
        if fused_location > 0.0 && fused_location < pipeline_length {
            Self {
                status: LeakState::Leak,
                location: Some(format!("KM {:.2}", fused_location)),
            }
        } else {
            Self {
                status: LeakState::Clear,
                location: None,
            }
        }
    }

    /// True when a leak was located on the line
    pub fn is_leak(&self) -> bool {
        self.status == LeakState::Leak
    }
}

/// Sensor section of a success envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSummary {
    pub active_count: usize,
    pub data: Vec<SensorDiagnostic>,
    pub ranked: Vec<SensorDiagnostic>,
}

/// Body of a successful prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    pub success: bool,
    /// RFC 3339
    pub timestamp: String,
    pub model_info: ModelInfo,
    pub prediction: LeakEstimate,
    pub leak_status: LeakStatus,
    pub sensors: SensorSummary,
}

impl PredictionReport {
    /// Assemble a report, keeping the `top` most suspicious sensors
    pub fn new(
        model_info: ModelInfo,
        pipeline_length: f64,
        assessment: LeakAssessment,
        top: usize,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let LeakAssessment { prediction, sensors } = assessment;
        let leak_status = LeakStatus::from_location(prediction.fused_location, pipeline_length);
        let ranked = sensors.top(top).to_vec();

        Self {
            success: true,
            timestamp: timestamp.to_rfc3339(),
            model_info,
            prediction,
            leak_status,
            sensors: SensorSummary {
                active_count: sensors.data.len(),
                data: sensors.data,
                ranked,
            },
        }
    }
}

/// Body of a failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub success: bool,
    pub error: String,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

impl From<&SchemaError> for ErrorReport {
    fn from(err: &SchemaError) -> Self {
        Self::new(err.to_string())
    }
}

/// Either envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionResponse {
    Success(Box<PredictionReport>),
    Failure(ErrorReport),
}

impl PredictionResponse {
    /// True for the success envelope
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Serialize to JSON text
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl From<PredictionReport> for PredictionResponse {
    fn from(report: PredictionReport) -> Self {
        Self::Success(Box::new(report))
    }
}

impl From<SchemaError> for PredictionResponse {
    fn from(err: SchemaError) -> Self {
        Self::Failure(ErrorReport::from(&err))
    }
}
