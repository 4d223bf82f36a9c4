//! Severity Classification
//!
//! Maps the average pressure drop, as a percentage of the reference
//! full-scale pressure, to an operational response:
//!
//! ```text
//! Avg drop      Severity   Priority   Action
//! ----------------------------------------------------------------
//! > 10 %        CRITICAL   CRITICAL   IMMEDIATE SHUTDOWN & INSPECTION
//! > 5 %         HIGH       HIGH       URGENT INSPECTION REQUIRED
//! > 2 %         MODERATE   MEDIUM     SCHEDULE INSPECTION
//! otherwise     LOW        LOW        CONTINUE MONITORING
//! ```
//!
//! Thresholds are strict: exactly 10 % is `HIGH`.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::severity::{CRITICAL_DROP_PCT, HIGH_DROP_PCT, MODERATE_DROP_PCT, REFERENCE_PRESSURE},
    errors::{EstimationError, EstimationResult},
    numeric,
};

/// How bad the leak is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Severity {
    /// Average drop of 2 % or less
    Low,
    /// Above 2 %, up to 5 %
    Moderate,
    /// Above 5 %, up to 10 %
    High,
    /// Above 10 %
    Critical,
}

/// Inspection priority for the maintenance queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum InspectionPriority {
    /// Routine rounds
    Low,
    /// Next planned window
    Medium,
    /// Ahead of planned work
    High,
    /// Drop everything
    Critical,
}

/// What operations should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RecommendedAction {
    /// Keep watching the line
    #[cfg_attr(feature = "serde", serde(rename = "CONTINUE MONITORING"))]
    ContinueMonitoring,
    /// Put an inspection on the schedule
    #[cfg_attr(feature = "serde", serde(rename = "SCHEDULE INSPECTION"))]
    ScheduleInspection,
    /// Send a crew now
    #[cfg_attr(feature = "serde", serde(rename = "URGENT INSPECTION REQUIRED"))]
    UrgentInspection,
    /// Shut the line in, then inspect
    #[cfg_attr(feature = "serde", serde(rename = "IMMEDIATE SHUTDOWN & INSPECTION"))]
    ImmediateShutdown,
}

impl Severity {
    /// Classify an average drop percentage
    pub fn from_drop_pct(avg_drop_pct: f64) -> Self {
        if avg_drop_pct > CRITICAL_DROP_PCT {
            Self::Critical
        } else if avg_drop_pct > HIGH_DROP_PCT {
            Self::High
        } else if avg_drop_pct > MODERATE_DROP_PCT {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Report label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }

    /// Priority that goes with this severity
    pub const fn priority(&self) -> InspectionPriority {
        match self {
            Self::Low => InspectionPriority::Low,
            Self::Moderate => InspectionPriority::Medium,
            Self::High => InspectionPriority::High,
            Self::Critical => InspectionPriority::Critical,
        }
    }

    /// Action that goes with this severity
    pub const fn recommended_action(&self) -> RecommendedAction {
        match self {
            Self::Low => RecommendedAction::ContinueMonitoring,
            Self::Moderate => RecommendedAction::ScheduleInspection,
            Self::High => RecommendedAction::UrgentInspection,
            Self::Critical => RecommendedAction::ImmediateShutdown,
        }
    }
}

impl InspectionPriority {
    /// Report label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl RecommendedAction {
    /// Report label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ContinueMonitoring => "CONTINUE MONITORING",
            Self::ScheduleInspection => "SCHEDULE INSPECTION",
            Self::UrgentInspection => "URGENT INSPECTION REQUIRED",
            Self::ImmediateShutdown => "IMMEDIATE SHUTDOWN & INSPECTION",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for InspectionPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity, action and priority for one prediction
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeverityAssessment {
    /// Severity tier
    pub severity: Severity,
    /// Operational response
    pub recommended_action: RecommendedAction,
    /// Maintenance priority
    pub inspection_priority: InspectionPriority,
    /// `mean(Δp) / 200 × 100`
    pub avg_pressure_drop_pct: f64,
}

impl SeverityAssessment {
    /// Assessment for an already-computed drop percentage
    pub fn from_drop_pct(avg_pressure_drop_pct: f64) -> Self {
        let severity = Severity::from_drop_pct(avg_pressure_drop_pct);
        Self {
            severity,
            recommended_action: severity.recommended_action(),
            inspection_priority: severity.priority(),
            avg_pressure_drop_pct,
        }
    }
}

/// Classifies pressure changes against the fixed reference pressure
#[derive(Debug, Clone, Copy, Default)]
pub struct SeverityClassifier;

impl SeverityClassifier {
    /// Mean change as a percentage of [`REFERENCE_PRESSURE`], `None` for no sensors
    pub fn avg_drop_pct(changes: &[f64]) -> Option<f64> {
        numeric::mean(changes).map(|mean| mean / REFERENCE_PRESSURE * 100.0)
    }

    /// Classify a set of pressure changes
    pub fn classify(changes: &[f64]) -> EstimationResult<SeverityAssessment> {
        let pct = Self::avg_drop_pct(changes).ok_or(EstimationError::EmptyInput)?;
        Ok(SeverityAssessment::from_drop_pct(pct))
    }
}
