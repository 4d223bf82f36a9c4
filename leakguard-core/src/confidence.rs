//! Confidence Rating and Inspection Zones
//!
//! ## Confidence
//!
//! Agreement between the estimators is the only evidence of accuracy the
//! engine has, so confidence is a step function of their dispersion:
//!
//! ```text
//! dispersion < 1.0  → VERY HIGH
//! dispersion < 3.0  → HIGH
//! dispersion < 5.0  → MODERATE
//! otherwise         → LOW
//! ```
//!
//! A boundary value belongs to the lower-confidence bucket.
//!
//! ## Zones
//!
//! Two fixed-width intervals around the fused estimate guide the field crew:
//! the focus zone (±3.0) and the critical zone (±1.5). Both are clamped to
//! `[0, pipeline_length]`; an estimate outside the pipeline collapses a zone
//! to an empty interval at the nearest end instead of being rejected.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::zones::{
    CONFIDENCE_HIGH_BELOW, CONFIDENCE_MODERATE_BELOW, CONFIDENCE_VERY_HIGH_BELOW,
    CRITICAL_ZONE_HALF_WIDTH, FOCUS_ZONE_HALF_WIDTH,
};

/// Confidence in the fused location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConfidenceLevel {
    /// Estimators disagree by 5 units or more
    #[cfg_attr(feature = "serde", serde(rename = "LOW"))]
    Low,
    /// Dispersion in `[3, 5)`
    #[cfg_attr(feature = "serde", serde(rename = "MODERATE"))]
    Moderate,
    /// Dispersion in `[1, 3)`
    #[cfg_attr(feature = "serde", serde(rename = "HIGH"))]
    High,
    /// Dispersion below 1
    #[cfg_attr(feature = "serde", serde(rename = "VERY HIGH"))]
    VeryHigh,
}

impl ConfidenceLevel {
    /// Classify a dispersion value
    ///
    /// NaN falls through every comparison and rates `Low`.
    pub fn from_dispersion(dispersion: f64) -> Self {
        if dispersion < CONFIDENCE_VERY_HIGH_BELOW {
            Self::VeryHigh
        } else if dispersion < CONFIDENCE_HIGH_BELOW {
            Self::High
        } else if dispersion < CONFIDENCE_MODERATE_BELOW {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Report label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryHigh => "VERY HIGH",
            Self::High => "HIGH",
            Self::Moderate => "MODERATE",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed interval along the pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Zone {
    /// Upstream bound
    pub start: f64,
    /// Downstream bound
    pub end: f64,
    /// `end - start`, never negative
    pub width: f64,
}

impl Zone {
    /// `center ± half_width`, clamped to `[0, pipeline_length]`
    pub fn around(center: f64, half_width: f64, pipeline_length: f64) -> Self {
        let start = (center - half_width).max(0.0).min(pipeline_length);
        let end = (center + half_width).max(0.0).min(pipeline_length);

        if start == end {
            log_warn!(
                "Zone around {:.3} collapsed at {:.3}: estimate outside pipeline [0, {:.3}]",
                center, start, pipeline_length
            );
        }

        Self {
            start,
            end,
            width: end - start,
        }
    }

    /// True if `position` lies inside the zone
    pub fn contains(&self, position: f64) -> bool {
        position >= self.start && position <= self.end
    }
}

/// Focus and critical zones around one estimate
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InspectionZones {
    /// ±3.0 around the estimate
    pub focus: Zone,
    /// ±1.5 around the estimate
    pub critical: Zone,
}

impl InspectionZones {
    /// Zones around `fused_location` on a pipeline of `pipeline_length`
    pub fn around(fused_location: f64, pipeline_length: f64) -> Self {
        Self {
            focus: Zone::around(fused_location, FOCUS_ZONE_HALF_WIDTH, pipeline_length),
            critical: Zone::around(fused_location, CRITICAL_ZONE_HALF_WIDTH, pipeline_length),
        }
    }
}
