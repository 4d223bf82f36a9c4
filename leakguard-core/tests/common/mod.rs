//! Shared scenario builders for integration tests
//!
//! Provides realistic pressure profiles:
//! - a single sharp leak between evenly spaced stations
//! - flat profiles with no drop at all
//! - uneven station spacing as found on real trunklines

#![allow(dead_code)]

use leakguard_core::{LeakDetectionModel, ModelConfiguration, SensorDataset};

/// Normal operating pressure used by the scenarios (psi)
pub const LINE_PRESSURE: f64 = 100.0;

/// Model on a pipeline of the given length with default weights and bias
pub fn default_model(pipeline_length: f64) -> LeakDetectionModel {
    let config = ModelConfiguration::builder(pipeline_length)
        .psi_per_meter(0.01)
        .build()
        .expect("default configuration is valid");
    LeakDetectionModel::new(config)
}

/// Five stations 10 units apart with the largest drop at KP 20
pub fn reference_dataset() -> SensorDataset {
    SensorDataset::from_arrays(
        &[0.0, 10.0, 20.0, 30.0, 40.0],
        &[LINE_PRESSURE; 5],
        &[100.0, 95.0, 60.0, 90.0, 100.0],
        None,
    )
    .expect("reference dataset is valid")
}

/// No drop anywhere along the line
pub fn flat_dataset(count: usize) -> SensorDataset {
    let positions: Vec<f64> = (0..count).map(|i| i as f64 * 5.0).collect();
    SensorDataset::from_arrays(
        &positions,
        &vec![LINE_PRESSURE; count],
        &vec![LINE_PRESSURE; count],
        None,
    )
    .expect("flat dataset is valid")
}

/// Stations evenly spaced over `length`, with drops shaped as a triangle
/// peaking at `leak_at` with depth `depth` and half-width `spread`
pub fn triangular_leak(count: usize, length: f64, leak_at: f64, depth: f64, spread: f64) -> SensorDataset {
    let step = length / (count.max(2) - 1) as f64;
    let positions: Vec<f64> = (0..count).map(|i| i as f64 * step).collect();
    let drops: Vec<f64> = positions
        .iter()
        .map(|x| {
            let distance = (x - leak_at).abs();
            let loss = (depth * (1.0 - distance / spread)).max(0.0);
            LINE_PRESSURE - loss
        })
        .collect();

    SensorDataset::from_arrays(&positions, &vec![LINE_PRESSURE; count], &drops, None)
        .expect("triangular dataset is valid")
}

/// Named stations on an unevenly spaced line
pub fn trunkline_dataset() -> SensorDataset {
    let names: Vec<String> = ["SP-01", "SP-02", "SP-03", "SP-04", "SP-05", "SP-06"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    SensorDataset::from_arrays(
        &[0.0, 2.5, 7.0, 11.2, 18.0, 26.4],
        &[182.0, 178.0, 171.0, 165.0, 154.0, 140.0],
        &[181.0, 176.5, 150.0, 149.0, 150.0, 138.0],
        Some(names.as_slice()),
    )
    .expect("trunkline dataset is valid")
}
