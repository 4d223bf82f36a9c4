//! End-to-end tests: package file on disk, JSON request in, envelope out

use std::io::Write;

use chrono::{TimeZone, Utc};
use leakguard_schemas::{
    predict, predict_at, ModelPackage, PredictionRequest, PredictionResponse, SchemaError,
    DEFAULT_TOP_SENSORS,
};
use serde_json::Value;
use tempfile::NamedTempFile;

const PACKAGE: &str = r#"{
    "metadata": {
        "version": "4.1",
        "pipeline_length": 50.0,
        "inside_diameter": 8.0,
        "created_date": "2025-11-18T09:30:00"
    },
    "model": {
        "psi_per_meter": 0.01,
        "upstream_bias": 0.5,
        "method_weights": {
            "suspicion_index": 0.25,
            "midpoint": 0.15,
            "gradient": 0.20,
            "pressure_drop": 0.20,
            "weighted_avg": 0.20
        }
    }
}"#;

const REQUEST: &str = r#"{
    "sensor_locations": [0.0, 10.0, 20.0, 30.0, 40.0],
    "normal_pressure": [100.0, 100.0, 100.0, 100.0, 100.0],
    "drop_pressure": [100.0, 95.0, 60.0, 90.0, 100.0]
}"#;

fn package_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(PACKAGE.as_bytes()).unwrap();
    file
}

fn envelope(package: &ModelPackage, request: &PredictionRequest, top: usize) -> Value {
    let at = Utc.with_ymd_and_hms(2025, 11, 18, 9, 30, 0).unwrap();
    serde_json::to_value(predict_at(package, request, top, at)).unwrap()
}

#[test]
fn test_success_envelope_from_package_file() {
    let file = package_file();
    let package = ModelPackage::from_path(file.path()).unwrap();
    let request = PredictionRequest::from_json_str(REQUEST).unwrap();

    let json = envelope(&package, &request, DEFAULT_TOP_SENSORS);

    assert_eq!(json["success"], true);
    assert_eq!(json["timestamp"], "2025-11-18T09:30:00+00:00");
    assert_eq!(json["model_info"]["version"], "4.1");
    assert_eq!(json["model_info"]["inside_diameter"], 8.0);

    let prediction = &json["prediction"];
    let fused = prediction["final_estimate"].as_f64().unwrap();
    assert!((fused - 17.175289).abs() < 1e-5, "fused {}", fused);
    assert_eq!(prediction["top_sensor_idx"], 2);
    assert_eq!(prediction["confidence"], "MODERATE");
    assert_eq!(prediction["severity"], "HIGH");
    assert_eq!(prediction["recommended_action"], "URGENT INSPECTION REQUIRED");
    assert_eq!(prediction["inspection_priority"], "HIGH");
    assert_eq!(prediction["individual_estimates"]["suspicion_index"], 19.5);
    assert_eq!(prediction["individual_estimates"]["max_drop"], 19.5);

    assert_eq!(json["leak_status"]["status"], "leak");
    assert_eq!(json["leak_status"]["location"], "KM 17.18");

    let sensors = &json["sensors"];
    assert_eq!(sensors["active_count"], 5);
    assert_eq!(sensors["data"].as_array().unwrap().len(), 5);
    assert_eq!(sensors["data"][2]["rank"], 1);
    assert_eq!(sensors["data"][2]["kp"], 20.0);
    assert_eq!(sensors["ranked"][0]["sensor_name"], "Sensor 3");
    assert_eq!(sensors["ranked"][1]["sensor_name"], "Sensor 4");
}

#[test]
fn test_ranked_list_truncated_to_top() {
    let package = ModelPackage::from_json_str(PACKAGE).unwrap();
    let request = PredictionRequest::from_json_str(REQUEST).unwrap();

    let json = envelope(&package, &request, 2);
    assert_eq!(json["sensors"]["active_count"], 5);
    assert_eq!(json["sensors"]["ranked"].as_array().unwrap().len(), 2);
    assert_eq!(json["sensors"]["data"].as_array().unwrap().len(), 5);
}

#[test]
fn test_mismatched_request_gives_error_envelope() {
    let package = ModelPackage::from_json_str(PACKAGE).unwrap();
    let request = PredictionRequest::new(vec![0.0, 10.0], vec![100.0], vec![90.0, 95.0]);

    let json = envelope(&package, &request, DEFAULT_TOP_SENSORS);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "All sensor data arrays must have the same length");
    assert!(json.get("prediction").is_none());
}

#[test]
fn test_engine_rejections_become_error_envelopes() {
    let package = ModelPackage::from_json_str(PACKAGE).unwrap();

    let unordered = PredictionRequest::new(vec![0.0, 10.0, 5.0], vec![100.0; 3], vec![90.0; 3]);
    let response = predict(&package, &unordered, DEFAULT_TOP_SENSORS);
    match response {
        PredictionResponse::Failure(report) => {
            assert!(!report.success);
            assert!(report.error.contains("strictly increasing"), "{}", report.error);
        }
        other => panic!("expected failure, got {:?}", other),
    }

    let flat = PredictionRequest::new(vec![0.0, 10.0, 20.0], vec![100.0; 3], vec![100.0; 3]);
    let response = predict(&package, &flat, DEFAULT_TOP_SENSORS);
    assert!(!response.is_success());
}

#[test]
fn test_estimate_beyond_line_end_is_clear() {
    // Same readings on a 15 km line: the fused estimate lands past the far end
    let short_line = PACKAGE.replace("\"pipeline_length\": 50.0", "\"pipeline_length\": 15.0");
    let package = ModelPackage::from_json_str(&short_line).unwrap();
    let request = PredictionRequest::from_json_str(REQUEST).unwrap();

    let json = envelope(&package, &request, DEFAULT_TOP_SENSORS);
    assert_eq!(json["success"], true);
    assert_eq!(json["leak_status"]["status"], "clear");
    assert!(json["leak_status"].get("location").is_none());
    let start = json["prediction"]["focus_zone"]["start"].as_f64().unwrap();
    assert!((start - 14.175289).abs() < 1e-5);
    assert_eq!(json["prediction"]["focus_zone"]["end"], 15.0);
}

#[test]
fn test_response_round_trips_through_json() {
    let package = ModelPackage::from_json_str(PACKAGE).unwrap();
    let request = PredictionRequest::from_json_str(REQUEST).unwrap();
    let at = Utc.with_ymd_and_hms(2025, 11, 18, 9, 30, 0).unwrap();

    let response = predict_at(&package, &request, DEFAULT_TOP_SENSORS, at);
    let text = response.to_json(true).unwrap();
    let parsed: PredictionResponse = serde_json::from_str(&text).unwrap();
    assert!(parsed.is_success());
}

#[test]
fn test_missing_package_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ModelPackage::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SchemaError::ModelNotFound { .. }));
    assert!(err.to_string().starts_with("Model file not found:"));
}
