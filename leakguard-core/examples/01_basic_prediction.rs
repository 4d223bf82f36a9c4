//! Basic Leak Prediction Example
//!
//! Locates a leak on a 50 km line from five pressure stations.
//!
//! ## What You'll Learn
//!
//! - Building a model configuration
//! - Grouping sensor arrays into a validated dataset
//! - Reading the fused estimate, zones and severity
//! - Walking the ranked sensor list
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_prediction
//! ```

use leakguard_core::{
    EstimationError, EstimationMethod, LeakDetectionModel, ModelConfiguration, SensorDataset,
};

fn main() -> Result<(), EstimationError> {
    println!("LeakGuard Basic Prediction Example");
    println!("==================================\n");

    let config = ModelConfiguration::builder(50.0)
        .psi_per_meter(0.01)
        .upstream_bias(0.5)
        .build()?;
    let model = LeakDetectionModel::new(config);

    // Normal operation at 100 psi everywhere; the drop is deepest at KP 20
    let names: Vec<String> = (1..=5).map(|i| format!("SP-0{}", i)).collect();
    let dataset = SensorDataset::from_arrays(
        &[0.0, 10.0, 20.0, 30.0, 40.0],
        &[100.0; 5],
        &[100.0, 95.0, 60.0, 90.0, 100.0],
        Some(names.as_slice()),
    )?;

    let assessment = model.assess(&dataset)?;
    let prediction = &assessment.prediction;

    println!("Individual estimates:");
    for method in EstimationMethod::ALL {
        match prediction.individual_estimates.get(method) {
            Some(value) => println!("  {:<16} {:>8.3}", method.to_string(), value),
            None => println!("  {:<16} {:>8}", method.to_string(), "n/a"),
        }
    }

    println!("\nFused location:   {:.3} km", prediction.fused_location);
    println!("Dispersion:       {:.3} ({})", prediction.dispersion, prediction.confidence);
    println!(
        "Focus zone:       {:.2} - {:.2} km",
        prediction.focus_zone.start, prediction.focus_zone.end
    );
    println!(
        "Critical zone:    {:.2} - {:.2} km",
        prediction.critical_zone.start, prediction.critical_zone.end
    );
    println!(
        "Severity:         {} ({:.2}% avg drop) -> {}",
        prediction.severity, prediction.avg_pressure_drop_pct, prediction.recommended_action
    );

    println!("\nMost suspicious sensors:");
    for sensor in assessment.sensors.top(3) {
        println!(
            "  #{} {} at KP {:.1}: suspicion {:.4}, drop {:.1} psi",
            sensor.rank, sensor.sensor_name, sensor.position, sensor.suspicion, sensor.pressure_change
        );
    }

    Ok(())
}
