//! Wire Formats for LeakGuard
//!
//! ## Overview
//!
//! The estimation engine in `leakguard-core` works on validated, typed
//! values. This crate is the boundary where untyped JSON meets it:
//!
//! - [`ModelPackage`]: the per-line model document (metadata plus engine
//!   parameters), read from disk
//! - [`PredictionRequest`]: the three sensor arrays and optional names,
//!   checked for presence and alignment before reaching the engine
//! - [`PredictionResponse`]: the success or failure envelope returned to
//!   the caller
//!
//! ## Usage
//!
//! ```rust
//! use leakguard_schemas::{predict, ModelPackage, PredictionRequest, DEFAULT_TOP_SENSORS};
//!
//! let package = ModelPackage::from_json_str(r#"{
//!     "metadata": {
//!         "version": "4.1",
//!         "pipeline_length": 50.0,
//!         "inside_diameter": 8.0,
//!         "created_date": "2025-11-18T09:30:00"
//!     },
//!     "model": { "psi_per_meter": 0.01 }
//! }"#)?;
//!
//! let request = PredictionRequest::new(
//!     vec![0.0, 10.0, 20.0, 30.0, 40.0],
//!     vec![100.0; 5],
//!     vec![100.0, 95.0, 60.0, 90.0, 100.0],
//! );
//!
//! let response = predict(&package, &request, DEFAULT_TOP_SENSORS);
//! assert!(response.is_success());
//! # Ok::<(), leakguard_schemas::SchemaError>(())
//! ```
//!
//! A failed request never panics and never returns a partial report; it
//! becomes a `{ "success": false, "error": ... }` envelope.

use chrono::{DateTime, Utc};

pub mod error;
pub mod package;
pub mod request;
pub mod response;

pub use error::{SchemaError, SchemaResult};
pub use package::{ModelConfigDocument, ModelMetadata, ModelPackage};
pub use request::PredictionRequest;
pub use response::{
    ErrorReport, LeakState, LeakStatus, ModelInfo, PredictionReport, PredictionResponse,
    SensorSummary, DEFAULT_TOP_SENSORS,
};

/// Run one request against a package, stamped with the current time
pub fn predict(package: &ModelPackage, request: &PredictionRequest, top: usize) -> PredictionResponse {
    predict_at(package, request, top, Utc::now())
}

/// Same as [`predict`] with an explicit timestamp
pub fn predict_at(
    package: &ModelPackage,
    request: &PredictionRequest,
    top: usize,
    timestamp: DateTime<Utc>,
) -> PredictionResponse {
    match try_predict(package, request, top, timestamp) {
        Ok(report) => report.into(),
        Err(err) => {
            log::warn!("Prediction rejected: {}", err);
            err.into()
        }
    }
}

fn try_predict(
    package: &ModelPackage,
    request: &PredictionRequest,
    top: usize,
    timestamp: DateTime<Utc>,
) -> SchemaResult<PredictionReport> {
    let model = package.model()?;
    let dataset = request.to_dataset()?;
    let assessment = model.assess(&dataset)?;

    log::info!(
        "Predicted leak at {:.3} from {} sensors ({})",
        assessment.prediction.fused_location,
        dataset.len(),
        assessment.prediction.confidence
    );

    Ok(PredictionReport::new(
        package.metadata.clone(),
        model.config().pipeline_length(),
        assessment,
        top,
        timestamp,
    ))
}
