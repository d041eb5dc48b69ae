//! Domain scenarios for the built-in calculators.

use ruralis_engine::formula::FormulaModule;
use ruralis_engine::formulas::carcass_yield::CarcassYield;
use ruralis_engine::formulas::cost_per_hectare::CostPerHectare;
use ruralis_engine::formulas::freight_netback::FreightNetback;
use ruralis_engine::formulas::liming::LimingRequirement;
use ruralis_engine::formulas::moisture_discount::MoistureDiscount;
use ruralis_engine::formulas::seed_population::SeedPopulation;
use ruralis_engine::formulas::spray_calibration::SprayCalibration;
use ruralis_engine::{FormulaInput, FormulaOutput};

fn compute<M: FormulaModule>(module: M, inputs: &[(&str, f64)]) -> FormulaOutput {
    module.compute(&FormulaInput::from_values(inputs.iter().copied()))
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn cost_per_hectare_splits_insumos_and_mechanization() {
    let out = compute(
        CostPerHectare,
        &[
            ("seeds", 100.0),
            ("fertilizer", 200.0),
            ("pesticides", 50.0),
            ("mechanization", 150.0),
        ],
    );
    assert_close(out.value("insumos").unwrap(), 350.0);
    assert_close(out.value("total").unwrap(), 500.0);
    assert_close(out.value("pct_insumos").unwrap(), 70.0);
    assert_close(out.value("pct_mechanization").unwrap(), 30.0);
}

#[test]
fn cost_per_hectare_with_zero_total_has_zero_percentages() {
    let out = compute(CostPerHectare, &[]);
    assert_eq!(out.value("pct_insumos"), Some(0.0));
    assert_eq!(out.value("pct_mechanization"), Some(0.0));
}

#[test]
fn liming_requirement_matches_reference_scenario() {
    let out = compute(
        LimingRequirement,
        &[
            ("cec", 12.5),
            ("current_saturation", 45.0),
            ("target_saturation", 60.0),
            ("prnt", 80.0),
        ],
    );
    // (60 - 45) * 12.5 / 80
    assert_close(out.value("nc").unwrap(), 2.34375);
}

#[test]
fn liming_requirement_floors_at_zero_above_target() {
    let out = compute(
        LimingRequirement,
        &[
            ("cec", 12.5),
            ("current_saturation", 65.0),
            ("target_saturation", 60.0),
            ("prnt", 80.0),
        ],
    );
    assert_eq!(out.value("nc"), Some(0.0));
}

#[test]
fn liming_gypsum_uses_clay_and_crop_factor() {
    let out = compute(
        LimingRequirement,
        &[("clay_pct", 40.0), ("gypsum_factor", 50.0)],
    );
    assert_close(out.value("ng").unwrap(), 2.0);
    let out = compute(
        LimingRequirement,
        &[("clay_pct", 40.0), ("gypsum_factor", 75.0)],
    );
    assert_close(out.value("ng").unwrap(), 3.0);
}

#[test]
fn spray_volume_matches_reference_scenario() {
    let out = compute(
        SprayCalibration,
        &[
            ("flow_rate_ml_min", 800.0),
            ("speed_kmh", 18.0),
            ("nozzle_spacing_cm", 50.0),
            ("target_l_ha", 50.0),
        ],
    );
    // (0.8 * 60000) / (18 * 50) = 53.333...
    assert_close(out.value("l_per_ha").unwrap(), 160.0 / 3.0);
    assert_close(out.value("deviation").unwrap(), (160.0 / 3.0 - 50.0) / 50.0 * 100.0);
    // 6.67% off target falls in the warning band.
    assert_eq!(out.label("status"), Some("warning"));
}

#[test]
fn spray_status_bands() {
    // Deviation is controlled through the target rate.
    let band = |target: f64| {
        let out = compute(
            SprayCalibration,
            &[
                ("flow_rate_ml_min", 1000.0),
                ("speed_kmh", 10.0),
                ("nozzle_spacing_cm", 60.0),
                ("target_l_ha", target),
            ],
        );
        out.label("status").unwrap().to_string()
    };
    // l_per_ha = 100 exactly: (1.0 * 60000) / 600
    assert_eq!(band(100.0), "ok");
    assert_eq!(band(96.0), "ok"); // +4.17%
    assert_eq!(band(92.0), "warning"); // +8.70%
    assert_eq!(band(80.0), "danger"); // +25%
}

#[test]
fn spray_with_zero_speed_yields_zero_volume() {
    let out = compute(
        SprayCalibration,
        &[("flow_rate_ml_min", 800.0), ("nozzle_spacing_cm", 50.0)],
    );
    assert_eq!(out.value("l_per_ha"), Some(0.0));
}

#[test]
fn freight_netback_converts_tons_to_bags() {
    let out = compute(
        FreightNetback,
        &[("price_per_ton", 250.0), ("market_price_per_bag", 130.0)],
    );
    // 250 / (1000/60) = 15.0 per bag
    assert_close(out.value("cost_per_bag").unwrap(), 15.0);
    assert_close(out.value("netback").unwrap(), 115.0);
}

#[test]
fn moisture_discount_applies_only_above_standard() {
    let wet = compute(
        MoistureDiscount,
        &[
            ("gross_weight", 35_000.0),
            ("actual_moisture", 18.0),
            ("standard_moisture", 14.0),
        ],
    );
    assert_close(wet.value("net_weight").unwrap(), 35_000.0 * (82.0 / 86.0));

    // Drier than standard: no bonus, net equals gross.
    let dry = compute(
        MoistureDiscount,
        &[
            ("gross_weight", 35_000.0),
            ("actual_moisture", 12.0),
            ("standard_moisture", 14.0),
        ],
    );
    assert_eq!(dry.value("net_weight"), Some(35_000.0));
    assert_eq!(dry.value("discount"), Some(0.0));
}

#[test]
fn seed_population_compensates_for_germination() {
    let out = compute(
        SeedPopulation,
        &[
            ("target_population", 300_000.0),
            ("row_spacing_cm", 50.0),
            ("germination_pct", 90.0),
            ("seeds_per_kg", 6_000.0),
            ("price_per_kg", 30.0),
        ],
    );
    let seeds_per_ha = 300_000.0 * 100.0 / 90.0;
    assert_close(out.value("seeds_per_ha").unwrap(), seeds_per_ha);
    // 20_000 metres of row per hectare at 50 cm spacing.
    assert_close(out.value("seeds_per_metre").unwrap(), seeds_per_ha / 20_000.0);
    assert_close(out.value("kg_per_ha").unwrap(), seeds_per_ha / 6_000.0);
    assert_close(out.value("cost_per_ha").unwrap(), seeds_per_ha / 6_000.0 * 30.0);
}

#[test]
fn seed_population_zero_germination_is_guarded() {
    let out = compute(
        SeedPopulation,
        &[("target_population", 300_000.0), ("row_spacing_cm", 50.0)],
    );
    assert_eq!(out.value("seeds_per_ha"), Some(0.0));
    assert_eq!(out.value("seeds_per_metre"), Some(0.0));
}

#[test]
fn carcass_yield_matches_hand_computation() {
    let out = compute(
        CarcassYield,
        &[
            ("live_weight", 540.0),
            ("carcass_weight", 290.0),
            ("price_per_arroba", 300.0),
        ],
    );
    assert_close(out.value("yield_pct").unwrap(), 290.0 / 540.0 * 100.0);
    assert_close(out.value("arrobas").unwrap(), 290.0 / 15.0);
    assert_close(out.value("total_value").unwrap(), 290.0 / 15.0 * 300.0);
}

#[test]
fn carcass_yield_zero_live_weight_is_guarded() {
    let out = compute(CarcassYield, &[("carcass_weight", 290.0)]);
    assert_eq!(out.value("yield_pct"), Some(0.0));
}

#[test]
fn every_formula_is_deterministic() {
    let engine = ruralis_engine::CalculatorEngine::new().unwrap();
    let input = FormulaInput::from_values([
        ("seeds", 1.5),
        ("gross_weight", -3.0),
        ("cec", 0.0),
        ("target_l_ha", 2.0),
    ]);
    for entry in engine.catalog() {
        let first = engine.evaluate_input(&entry.slug, input.clone()).unwrap();
        let second = engine.evaluate_input(&entry.slug, input.clone()).unwrap();
        assert_eq!(first.output, second.output, "{} not pure", entry.slug);
    }
}

#[test]
fn every_formula_output_is_finite_for_hostile_inputs() {
    let engine = ruralis_engine::CalculatorEngine::new().unwrap();
    let hostile = [0.0, -1.0, 1e15, -1e15, 0.0001];
    let names = [
        "seeds", "fertilizer", "pesticides", "mechanization", "cec",
        "current_saturation", "target_saturation", "prnt", "clay_pct",
        "gypsum_factor", "flow_rate_ml_min", "speed_kmh", "nozzle_spacing_cm",
        "target_l_ha", "price_per_ton", "market_price_per_bag", "gross_weight",
        "actual_moisture", "standard_moisture", "target_population",
        "row_spacing_cm", "germination_pct", "seeds_per_kg", "price_per_kg",
        "live_weight", "carcass_weight", "price_per_arroba",
    ];
    for &v in &hostile {
        let input = FormulaInput::from_values(names.iter().map(|&n| (n, v)));
        for entry in engine.catalog() {
            let eval = engine.evaluate_input(&entry.slug, input.clone()).unwrap();
            for (name, value) in eval.output.values() {
                assert!(
                    value.is_finite(),
                    "{}/{name} not finite for input {v}",
                    entry.slug
                );
            }
        }
    }
}
