//! Model Configuration
//!
//! Set once when a model is built and shared read-only by every prediction
//! made with it. All checks happen in [`ModelConfigurationBuilder::build`];
//! a configuration that exists is valid.
//!
//! ```rust
//! use leakguard_core::{MethodWeights, ModelConfiguration};
//!
//! let config = ModelConfiguration::builder(42.0)
//!     .psi_per_meter(0.012)
//!     .upstream_bias(0.5)
//!     .method_weights(MethodWeights::default())
//!     .build()?;
//!
//! assert_eq!(config.pipeline_length(), 42.0);
//! # Ok::<(), leakguard_core::EstimationError>(())
//! ```

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    constants::estimation::{
        DEFAULT_UPSTREAM_BIAS, DEFAULT_WEIGHT_GRADIENT_PEAK, DEFAULT_WEIGHT_MAX_DROP,
        DEFAULT_WEIGHT_MIDPOINT, DEFAULT_WEIGHT_SUSPICION_PEAK, DEFAULT_WEIGHT_WEIGHTED_AVERAGE,
    },
    ensemble::EstimationMethod,
    errors::{EstimationError, EstimationResult},
    traits::Validatable,
};

/// Fusion weight for each of the five estimators
///
/// Weights need not sum to one; fusion renormalizes over the methods that
/// actually produced an estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MethodWeights {
    #[cfg_attr(feature = "serde", serde(rename = "suspicion_index"))]
    suspicion_peak: f64,
    midpoint: f64,
    #[cfg_attr(feature = "serde", serde(rename = "gradient"))]
    gradient_peak: f64,
    #[cfg_attr(feature = "serde", serde(rename = "pressure_drop"))]
    max_drop: f64,
    #[cfg_attr(feature = "serde", serde(rename = "weighted_avg"))]
    weighted_average: f64,
}

impl Default for MethodWeights {
    fn default() -> Self {
        Self {
            suspicion_peak: DEFAULT_WEIGHT_SUSPICION_PEAK,
            midpoint: DEFAULT_WEIGHT_MIDPOINT,
            gradient_peak: DEFAULT_WEIGHT_GRADIENT_PEAK,
            max_drop: DEFAULT_WEIGHT_MAX_DROP,
            weighted_average: DEFAULT_WEIGHT_WEIGHTED_AVERAGE,
        }
    }
}

impl MethodWeights {
    /// Create from explicit weights, in [`EstimationMethod::ALL`] order
    pub fn new(
        suspicion_peak: f64,
        midpoint: f64,
        gradient_peak: f64,
        max_drop: f64,
        weighted_average: f64,
    ) -> EstimationResult<Self> {
        let weights = Self {
            suspicion_peak,
            midpoint,
            gradient_peak,
            max_drop,
            weighted_average,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Create from `(method, weight)` pairs
    ///
    /// Every method must appear exactly once.
    pub fn from_pairs<I>(pairs: I) -> EstimationResult<Self>
    where
        I: IntoIterator<Item = (EstimationMethod, f64)>,
    {
        let mut slots: [Option<f64>; 5] = [None; 5];
        for (method, weight) in pairs {
            let slot = &mut slots[method.index()];
            if slot.is_some() {
                return Err(EstimationError::Configuration {
                    reason: "method weight given more than once",
                });
            }
            *slot = Some(weight);
        }

        match slots {
            [Some(a), Some(b), Some(c), Some(d), Some(e)] => Self::new(a, b, c, d, e),
            _ => Err(EstimationError::Configuration {
                reason: "method weights must cover all five estimation methods",
            }),
        }
    }

    /// Weight configured for `method`
    pub fn get(&self, method: EstimationMethod) -> f64 {
        match method {
            EstimationMethod::SuspicionPeak => self.suspicion_peak,
            EstimationMethod::Midpoint => self.midpoint,
            EstimationMethod::GradientPeak => self.gradient_peak,
            EstimationMethod::MaxDrop => self.max_drop,
            EstimationMethod::WeightedAverage => self.weighted_average,
        }
    }

    /// Sum of all five weights
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, w)| w).sum()
    }

    /// `(method, weight)` for every method
    pub fn iter(&self) -> impl Iterator<Item = (EstimationMethod, f64)> + '_ {
        EstimationMethod::ALL.iter().map(move |&m| (m, self.get(m)))
    }

    fn validate(&self) -> EstimationResult<()> {
        for (_, weight) in self.iter() {
            if !weight.is_valid() {
                return Err(EstimationError::Configuration {
                    reason: "method weight must be a finite number",
                });
            }
            if weight < 0.0 {
                return Err(EstimationError::Configuration {
                    reason: "method weight must not be negative",
                });
            }
        }
        if self.total() <= 0.0 {
            return Err(EstimationError::Configuration {
                reason: "method weights must not all be zero",
            });
        }
        Ok(())
    }
}

/// Immutable configuration of a leak detection model
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ModelConfiguration {
    pipeline_length: f64,
    psi_per_meter: f64,
    upstream_bias: f64,
    method_weights: MethodWeights,
}

impl ModelConfiguration {
    /// Start a builder for a pipeline of the given length
    pub fn builder(pipeline_length: f64) -> ModelConfigurationBuilder {
        ModelConfigurationBuilder::new(pipeline_length)
    }

    /// Pipeline length; upper clip bound for inspection zones
    pub fn pipeline_length(&self) -> f64 {
        self.pipeline_length
    }

    /// Pressure gradient constant, carried for reporting only
    pub fn psi_per_meter(&self) -> f64 {
        self.psi_per_meter
    }

    /// Offset subtracted from peak-based estimates
    pub fn upstream_bias(&self) -> f64 {
        self.upstream_bias
    }

    /// Fusion weights
    pub fn method_weights(&self) -> &MethodWeights {
        &self.method_weights
    }
}

/// Builder for [`ModelConfiguration`]
#[derive(Debug, Clone)]
pub struct ModelConfigurationBuilder {
    pipeline_length: f64,
    psi_per_meter: f64,
    upstream_bias: f64,
    method_weights: MethodWeights,
}

impl ModelConfigurationBuilder {
    /// New builder with default bias and weights
    pub fn new(pipeline_length: f64) -> Self {
        Self {
            pipeline_length,
            psi_per_meter: 0.0,
            upstream_bias: DEFAULT_UPSTREAM_BIAS,
            method_weights: MethodWeights::default(),
        }
    }

    /// Set the pressure gradient constant
    pub fn psi_per_meter(mut self, psi_per_meter: f64) -> Self {
        self.psi_per_meter = psi_per_meter;
        self
    }

    /// Set the upstream bias
    pub fn upstream_bias(mut self, upstream_bias: f64) -> Self {
        self.upstream_bias = upstream_bias;
        self
    }

    /// Set the fusion weights
    pub fn method_weights(mut self, method_weights: MethodWeights) -> Self {
        self.method_weights = method_weights;
        self
    }

    /// Validate and build
    pub fn build(self) -> EstimationResult<ModelConfiguration> {
        if !self.pipeline_length.is_valid() || self.pipeline_length <= 0.0 {
            return Err(EstimationError::Configuration {
                reason: "pipeline length must be a positive finite number",
            });
        }
        if !self.psi_per_meter.is_valid() {
            return Err(EstimationError::Configuration {
                reason: "psi per meter must be a finite number",
            });
        }
        if !self.upstream_bias.is_valid() {
            return Err(EstimationError::Configuration {
                reason: "upstream bias must be a finite number",
            });
        }

        Ok(ModelConfiguration {
            pipeline_length: self.pipeline_length,
            psi_per_meter: self.psi_per_meter,
            upstream_bias: self.upstream_bias,
            method_weights: self.method_weights,
        })
    }
}
