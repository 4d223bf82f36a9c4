//! Leak Detection Model
//!
//! Ties the stages together behind one read-only object:
//!
//! 1. Derive changes, ratios and suspicion ([`PressureProfile`])
//! 2. Run the five-method ensemble and fuse ([`EstimatorEnsemble`])
//! 3. Rate confidence and place the zones ([`ConfidenceLevel`], [`InspectionZones`])
//! 4. Classify severity ([`SeverityClassifier`])
//! 5. Optionally rank the sensors ([`SensorRanker`])
//!
//! The model holds nothing but its [`ModelConfiguration`]. Predictions do not
//! mutate it, so one instance can serve concurrent callers behind an `Arc`
//! or a plain shared reference.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    config::ModelConfiguration,
    confidence::{ConfidenceLevel, InspectionZones, Zone},
    dataset::SensorDataset,
    ensemble::{EstimatorEnsemble, MethodEstimates},
    errors::EstimationResult,
    ranking::{SensorAnalysis, SensorRanker},
    severity::{InspectionPriority, RecommendedAction, Severity, SeverityClassifier},
    suspicion::PressureProfile,
};

/// Everything one prediction produces
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LeakEstimate {
    /// Fused leak location
    #[cfg_attr(feature = "serde", serde(rename = "final_estimate"))]
    pub fused_location: f64,
    /// Spread of the individual estimates
    #[cfg_attr(feature = "serde", serde(rename = "estimate_std"))]
    pub dispersion: f64,
    /// Confidence derived from the dispersion
    pub confidence: ConfidenceLevel,
    /// Index of the most suspicious sensor
    #[cfg_attr(feature = "serde", serde(rename = "top_sensor_idx"))]
    pub top_sensor_index: usize,
    /// Suspicion index per sensor
    #[cfg_attr(feature = "serde", serde(rename = "suspicion_index"))]
    pub suspicion: Vec<f64>,
    /// `normal - drop` per sensor
    pub pressure_changes: Vec<f64>,
    /// `drop / normal` per sensor
    pub pressure_ratios: Vec<f64>,
    /// Each estimator's own result
    pub individual_estimates: MethodEstimates,
    /// ±3.0 around the fused location
    pub focus_zone: Zone,
    /// ±1.5 around the fused location
    pub critical_zone: Zone,
    /// Severity tier
    pub severity: Severity,
    /// Operational response
    pub recommended_action: RecommendedAction,
    /// Maintenance priority
    pub inspection_priority: InspectionPriority,
    /// Mean pressure change as a percentage of the reference pressure
    pub avg_pressure_drop_pct: f64,
}

/// A prediction together with the sensor diagnostics it was computed from
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LeakAssessment {
    /// Location, confidence and severity
    pub prediction: LeakEstimate,
    /// Per-sensor records in input and ranked order
    pub sensors: SensorAnalysis,
}

/// Pipeline leak location model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeakDetectionModel {
    config: ModelConfiguration,
}

impl LeakDetectionModel {
    /// Create a model from a validated configuration
    pub fn new(config: ModelConfiguration) -> Self {
        Self { config }
    }

    /// The model's configuration
    pub fn config(&self) -> &ModelConfiguration {
        &self.config
    }

    /// Estimate the leak location
    pub fn predict(&self, dataset: &SensorDataset) -> EstimationResult<LeakEstimate> {
        let profile = PressureProfile::from_dataset(dataset)?;
        self.predict_profile(profile)
    }

    /// Per-sensor diagnostics in input and ranked order
    pub fn analyze_sensors(&self, dataset: &SensorDataset) -> EstimationResult<SensorAnalysis> {
        let profile = PressureProfile::from_dataset(dataset)?;
        SensorRanker::rank(dataset, &profile.suspicion)
    }

    /// Prediction and diagnostics from a single scoring pass
    pub fn assess(&self, dataset: &SensorDataset) -> EstimationResult<LeakAssessment> {
        let profile = PressureProfile::from_dataset(dataset)?;
        let sensors = SensorRanker::rank(dataset, &profile.suspicion)?;
        let prediction = self.predict_profile(profile)?;
        Ok(LeakAssessment { prediction, sensors })
    }

    fn predict_profile(&self, profile: PressureProfile) -> EstimationResult<LeakEstimate> {
        let ensemble = EstimatorEnsemble::from_config(&self.config).estimate(&profile)?;
        let confidence = ConfidenceLevel::from_dispersion(ensemble.dispersion);
        let zones = InspectionZones::around(ensemble.fused_location, self.config.pipeline_length());
        let severity = SeverityClassifier::classify(&profile.changes)?;

        log_debug!(
            "Leak estimate {:.3} ({}), severity {} at {:.2}% average drop",
            ensemble.fused_location, confidence, severity.severity, severity.avg_pressure_drop_pct
        );

        let PressureProfile {
            changes,
            ratios,
            suspicion,
            ..
        } = profile;

        Ok(LeakEstimate {
            fused_location: ensemble.fused_location,
            dispersion: ensemble.dispersion,
            confidence,
            top_sensor_index: ensemble.top_sensor_index,
            suspicion,
            pressure_changes: changes,
            pressure_ratios: ratios,
            individual_estimates: ensemble.per_method,
            focus_zone: zones.focus,
            critical_zone: zones.critical,
            severity: severity.severity,
            recommended_action: severity.recommended_action,
            inspection_priority: severity.inspection_priority,
            avg_pressure_drop_pct: severity.avg_pressure_drop_pct,
        })
    }
}
