//! Property-based tests for the estimation engine
//!
//! Generates random but physically sensible station layouts: strictly
//! increasing positions, one line pressure, drops between zero and the
//! line pressure.

use proptest::prelude::*;

use leakguard_core::{
    ConfidenceLevel, InspectionZones, LeakDetectionModel, ModelConfiguration, SensorDataset,
    SensorRanker, SuspicionScorer,
};

const LINE_PRESSURE: f64 = 150.0;

/// Strictly increasing positions with matching pressure losses
fn station_layout() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec(0.1f64..20.0, n),
            prop::collection::vec(0.0f64..LINE_PRESSURE, n),
        )
            .prop_map(|(gaps, losses)| {
                let mut position = 0.0;
                let positions = gaps
                    .iter()
                    .map(|gap| {
                        position += gap;
                        position
                    })
                    .collect();
                (positions, losses)
            })
    })
}

fn dataset(positions: &[f64], losses: &[f64]) -> SensorDataset {
    let normal = vec![LINE_PRESSURE; positions.len()];
    let drops: Vec<f64> = losses.iter().map(|loss| LINE_PRESSURE - loss).collect();
    SensorDataset::from_arrays(positions, &normal, &drops, None).unwrap()
}

proptest! {
    #[test]
    fn prop_suspicion_monotone_in_own_change(
        (positions, losses) in station_layout(),
        pick in any::<prop::sample::Index>(),
        extra in 0.0f64..50.0,
    ) {
        let i = pick.index(positions.len());
        let before = SuspicionScorer::new().score_dataset(&dataset(&positions, &losses)).unwrap();

        let mut raised = losses.clone();
        raised[i] = (raised[i] + extra).min(LINE_PRESSURE);
        let after = SuspicionScorer::new().score_dataset(&dataset(&positions, &raised)).unwrap();

        prop_assert!(after[i] >= before[i] - 1e-9, "{} -> {}", before[i], after[i]);
    }

    #[test]
    fn prop_fused_location_within_sensor_span(
        (positions, losses) in station_layout(),
        bias in 0.0f64..2.0,
    ) {
        prop_assume!(losses.iter().any(|&l| l > 0.0));

        let config = ModelConfiguration::builder(500.0).upstream_bias(bias).build().unwrap();
        let estimate = LeakDetectionModel::new(config)
            .predict(&dataset(&positions, &losses))
            .unwrap();

        let lo = positions[0] - bias - 1e-9;
        let hi = positions[positions.len() - 1] + 1e-9;
        prop_assert!(estimate.fused_location >= lo && estimate.fused_location <= hi);
        prop_assert!(estimate.dispersion >= 0.0);
    }

    #[test]
    fn prop_zones_stay_inside_pipeline(
        fused in -1.0e4f64..1.0e4,
        length in 0.5f64..1.0e3,
    ) {
        let zones = InspectionZones::around(fused, length);
        for zone in [zones.focus, zones.critical] {
            prop_assert!(zone.start >= 0.0 && zone.end <= length);
            prop_assert!(zone.start <= zone.end);
            prop_assert!(zone.width >= 0.0);
        }
        if fused >= 0.0 && fused <= length {
            prop_assert!(zones.critical.contains(fused));
            prop_assert!(zones.focus.contains(zones.critical.start));
        }
    }

    #[test]
    fn prop_confidence_never_rises_with_dispersion(a in 0.0f64..20.0, b in 0.0f64..20.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ConfidenceLevel::from_dispersion(low) >= ConfidenceLevel::from_dispersion(high));
    }

    #[test]
    fn prop_ranking_is_stable_permutation((positions, losses) in station_layout()) {
        let ds = dataset(&positions, &losses);
        let scores = SuspicionScorer::new().score_dataset(&ds).unwrap();
        let analysis = SensorRanker::rank(&ds, &scores).unwrap();

        let ranks: Vec<usize> = analysis.ranked.iter().map(|d| d.rank).collect();
        prop_assert_eq!(ranks, (1..=positions.len()).collect::<Vec<_>>());

        for pair in analysis.ranked.windows(2) {
            prop_assert!(pair[0].suspicion >= pair[1].suspicion);
            if pair[0].suspicion == pair[1].suspicion {
                // Ties keep input (position) order
                prop_assert!(pair[0].position < pair[1].position);
            }
        }

        let again = SensorRanker::rank(&ds, &scores).unwrap();
        prop_assert_eq!(analysis, again);
    }
}
