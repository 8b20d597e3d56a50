//! Property-based tests for the stress model, settlement estimator and
//! analysis driver.
//!
//! - Test physical invariants over random profiles
//! - Run with ProptestConfig::with_cases(100)

use proptest::prelude::*;
use soil_core::equations::settlement::{
    calc_settlement_via_n90, calc_settlement_via_qci, calc_settlement_via_vs1c,
};
use soil_core::experiments::{MaswExp, MaswLog};
use soil_core::liquefaction::masw;
use soil_core::soil::{SoilLayer, SoilProfile, WATER_UNIT_WEIGHT};
use soil_core::{AnalysisSettings, SeismicEvent};

// ============================================================================
// Strategies
// ============================================================================

/// Layer with a saturated unit weight at least the dry one
fn arb_layer() -> impl Strategy<Value = SoilLayer> {
    (0.5f64..10.0, 14.0f64..20.0, 0.0f64..3.0, 0.0f64..50.0).prop_map(|(thickness, dry, extra, fines)| {
        SoilLayer::new(thickness, dry, dry + extra).with_fine_content(fines)
    })
}

fn arb_profile() -> impl Strategy<Value = SoilProfile> {
    (proptest::collection::vec(arb_layer(), 1..6), 0.0f64..30.0)
        .prop_map(|(layers, gwl)| SoilProfile::new(layers, gwl).unwrap())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: normal stress never decreases with depth
    #[test]
    fn prop_normal_stress_monotonic(profile in arb_profile(), a in 0.0f64..60.0, b in 0.0f64..60.0) {
        let (upper, lower) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(profile.calc_normal_stress(upper) <= profile.calc_normal_stress(lower) + 1e-9);
    }

    /// Property: stress at a layer bottom is the sum of layer contributions
    #[test]
    fn prop_normal_stress_sums_layers(layers in proptest::collection::vec(arb_layer(), 1..6)) {
        // water table below everything: all dry
        let total: f64 = layers.iter().map(|l| l.thickness).sum();
        let expected: f64 = layers.iter().map(|l| l.thickness * l.dry_unit_weight).sum();
        let profile = SoilProfile::new(layers, total + 1.0).unwrap();
        prop_assert!((profile.calc_normal_stress(total) - expected).abs() < 1e-6);
    }

    /// Property: effective stress equals normal stress down to the water table
    #[test]
    fn prop_effective_equals_normal_above_water(profile in arb_profile(), fraction in 0.0f64..=1.0) {
        let depth = profile.ground_water_level() * fraction;
        let effective = profile.calc_effective_stress(depth).unwrap();
        prop_assert_eq!(effective, profile.calc_normal_stress(depth));
    }

    /// Property: below the water table, pore pressure is hydrostatic
    #[test]
    fn prop_effective_stress_hydrostatic(profile in arb_profile(), below in 0.0f64..20.0) {
        let depth = profile.ground_water_level() + below;
        let effective = profile.calc_effective_stress(depth).unwrap();
        let expected = profile.calc_normal_stress(depth) - below * WATER_UNIT_WEIGHT;
        prop_assert!((effective - expected).abs() < 1e-9);
    }

    /// Property: no settlement above a safety factor of 2
    #[test]
    fn prop_no_settlement_above_two(
        fs in 2.0001f64..100.0,
        thickness in 0.1f64..20.0,
        n90 in 0.0f64..60.0,
        vs1c in 150.0f64..250.0,
        qci in 21.0f64..254.0,
    ) {
        prop_assert_eq!(calc_settlement_via_n90(fs, thickness, n90), 0.0);
        prop_assert_eq!(calc_settlement_via_vs1c(fs, thickness, vs1c), 0.0);
        prop_assert_eq!(calc_settlement_via_qci(fs, thickness, qci), 0.0);
    }

    /// Property: settlement is non-negative and scales with thickness
    #[test]
    fn prop_settlement_scales_with_thickness(fs in 0.05f64..2.0, thickness in 0.1f64..20.0, n90 in 0.0f64..60.0) {
        let unit = calc_settlement_via_n90(fs, 1.0, n90);
        let settlement = calc_settlement_via_n90(fs, thickness, n90);
        prop_assert!(unit >= 0.0);
        prop_assert!((settlement - unit * thickness).abs() < 1e-9 * settlement.max(1.0));
    }

    /// Property: results come back in ascending depth, parallel or not
    #[test]
    fn prop_results_ordered(
        profile in arb_profile(),
        readings in proptest::collection::vec((0.1f64..40.0, 100.0f64..300.0), 1..8),
    ) {
        let log = MaswLog::new(readings.into_iter().map(|(d, vs)| MaswExp::new(d, vs)).collect()).unwrap();
        let event = SeismicEvent::new(7.0, 0.25).unwrap();

        let parallel = masw::analyse_each_depth(&profile, &log, &event, &AnalysisSettings::default()).unwrap();
        let sequential = masw::analyse_each_depth(
            &profile,
            &log,
            &event,
            &AnalysisSettings::default().with_parallel(false),
        )
        .unwrap();

        let depths: Vec<f64> = parallel.iter().map(|(d, _)| *d).collect();
        prop_assert!(depths.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(depths, sequential.iter().map(|(d, _)| *d).collect::<Vec<_>>());
    }
}
