//! Model Packages
//!
//! A model package is the JSON document a deployment ships for one
//! pipeline: descriptive metadata plus the parameters the estimation
//! engine needs.
//!
//! ```json
//! {
//!   "metadata": {
//!     "version": "4.1",
//!     "pipeline_length": 26.0,
//!     "inside_diameter": 8.0,
//!     "created_date": "2025-11-18T09:30:00"
//!   },
//!   "model": {
//!     "psi_per_meter": 0.012,
//!     "upstream_bias": 0.5,
//!     "method_weights": {
//!       "suspicion_index": 0.25,
//!       "midpoint": 0.15,
//!       "gradient": 0.20,
//!       "pressure_drop": 0.20,
//!       "weighted_avg": 0.20
//!     }
//!   }
//! }
//! ```
//!
//! `model.pipeline_length` falls back to the metadata value. Omitted
//! `upstream_bias` and `method_weights` take the engine defaults. A weight
//! map that is present must name all five methods and nothing else.
//!
//! Packages are only ever read.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use leakguard_core::{
    constants::DEFAULT_UPSTREAM_BIAS, EstimationMethod, LeakDetectionModel, MethodWeights,
    ModelConfiguration,
};
use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, SchemaResult};

/// Descriptive information about a trained line model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Model version string
    pub version: String,
    /// Length of the monitored line
    pub pipeline_length: f64,
    /// Inside diameter of the line
    pub inside_diameter: f64,
    /// When the model was produced, as stored
    pub created_date: String,
}

/// Engine parameters as stored in a package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfigDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_length: Option<f64>,
    #[serde(default)]
    pub psi_per_meter: f64,
    #[serde(default = "default_upstream_bias")]
    pub upstream_bias: f64,
    /// Weight per method, keyed by the stored method identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_weights: Option<BTreeMap<String, f64>>,
}

fn default_upstream_bias() -> f64 {
    DEFAULT_UPSTREAM_BIAS
}

impl ModelConfigDocument {
    /// Convert to a validated engine configuration
    ///
    /// `fallback_length` is used when the document has no length of its own.
    pub fn to_configuration(&self, fallback_length: f64) -> SchemaResult<ModelConfiguration> {
        let mut builder = ModelConfiguration::builder(self.pipeline_length.unwrap_or(fallback_length))
            .psi_per_meter(self.psi_per_meter)
            .upstream_bias(self.upstream_bias);

        if let Some(map) = &self.method_weights {
            builder = builder.method_weights(parse_weights(map)?);
        }

        Ok(builder.build()?)
    }
}

fn parse_weights(map: &BTreeMap<String, f64>) -> SchemaResult<MethodWeights> {
    let pairs = map
        .iter()
        .map(|(key, &weight)| {
            EstimationMethod::from_weight_key(key)
                .map(|method| (method, weight))
                .ok_or_else(|| SchemaError::UnknownMethod(key.clone()))
        })
        .collect::<SchemaResult<Vec<_>>>()?;

    Ok(MethodWeights::from_pairs(pairs)?)
}

/// A complete model package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPackage {
    pub metadata: ModelMetadata,
    #[serde(rename = "model")]
    pub config: ModelConfigDocument,
}

impl ModelPackage {
    /// Parse a package from JSON text
    pub fn from_json_str(json: &str) -> SchemaResult<Self> {
        serde_json::from_str(json).map_err(|e| SchemaError::ModelLoad(e.to_string()))
    }

    /// Read and parse a package file
    pub fn from_path(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SchemaError::ModelNotFound {
                path: path.to_path_buf(),
            },
            _ => SchemaError::ModelLoad(e.to_string()),
        })?;

        let package = Self::from_json_str(&text)?;
        log::debug!(
            "Loaded model package {} (version {}, line length {})",
            path.display(),
            package.metadata.version,
            package.metadata.pipeline_length
        );
        Ok(package)
    }

    /// Validated engine configuration for this package
    pub fn configuration(&self) -> SchemaResult<ModelConfiguration> {
        self.config.to_configuration(self.metadata.pipeline_length)
    }

    /// Ready-to-use model for this package
    pub fn model(&self) -> SchemaResult<LeakDetectionModel> {
        Ok(LeakDetectionModel::new(self.configuration()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leakguard_core::EstimationError;

    const PACKAGE: &str = r#"{
        "metadata": {
            "version": "4.1",
            "pipeline_length": 26.0,
            "inside_diameter": 8.0,
            "created_date": "2025-11-18T09:30:00"
        },
        "model": {
            "psi_per_meter": 0.012,
            "method_weights": {
                "suspicion_index": 0.25,
                "midpoint": 0.15,
                "gradient": 0.20,
                "pressure_drop": 0.20,
                "weighted_avg": 0.20
            }
        }
    }"#;

    #[test]
    fn parse_full_package() {
        let package = ModelPackage::from_json_str(PACKAGE).unwrap();
        assert_eq!(package.metadata.version, "4.1");

        let config = package.configuration().unwrap();
        assert_eq!(config.pipeline_length(), 26.0);
        assert_eq!(config.psi_per_meter(), 0.012);
        assert_eq!(config.upstream_bias(), DEFAULT_UPSTREAM_BIAS);
        assert_eq!(*config.method_weights(), MethodWeights::default());
    }

    #[test]
    fn model_section_length_overrides_metadata() {
        let json = PACKAGE.replace("\"psi_per_meter\"", "\"pipeline_length\": 30.0, \"psi_per_meter\"");
        let config = ModelPackage::from_json_str(&json).unwrap().configuration().unwrap();
        assert_eq!(config.pipeline_length(), 30.0);
    }

    #[test]
    fn weights_optional() {
        let json = r#"{
            "metadata": {"version": "1", "pipeline_length": 10.0, "inside_diameter": 6.0, "created_date": "x"},
            "model": {}
        }"#;
        let config = ModelPackage::from_json_str(json).unwrap().configuration().unwrap();
        assert_eq!(config.psi_per_meter(), 0.0);
        assert_eq!(*config.method_weights(), MethodWeights::default());
    }

    #[test]
    fn unknown_method_rejected() {
        let json = PACKAGE.replace("\"midpoint\"", "\"spline\"");
        let err = ModelPackage::from_json_str(&json).unwrap().configuration().unwrap_err();
        assert!(matches!(err, SchemaError::UnknownMethod(ref key) if key == "spline"));
    }

    #[test]
    fn incomplete_weights_rejected() {
        let mut map = BTreeMap::new();
        map.insert("midpoint".to_string(), 1.0);
        let doc = ModelConfigDocument {
            pipeline_length: None,
            psi_per_meter: 0.0,
            upstream_bias: 0.5,
            method_weights: Some(map),
        };
        let err = doc.to_configuration(10.0).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::Estimation(EstimationError::Configuration { .. })
        ));
    }

    #[test]
    fn invalid_length_rejected() {
        let json = PACKAGE.replace("\"pipeline_length\": 26.0", "\"pipeline_length\": 0.0");
        let err = ModelPackage::from_json_str(&json).unwrap().model().unwrap_err();
        assert!(matches!(err, SchemaError::Estimation(EstimationError::Configuration { .. })));
    }

    #[test]
    fn malformed_json() {
        let err = ModelPackage::from_json_str("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("Error loading model:"));
    }

    #[test]
    fn missing_file() {
        let err = ModelPackage::from_path("/nonexistent/leakguard/model.json").unwrap_err();
        assert!(matches!(err, SchemaError::ModelNotFound { .. }));
    }
}
