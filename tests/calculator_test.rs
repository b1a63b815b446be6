#[macro_use]
extern crate assert_float_eq;

use cacao_calc_rs::calculator::{
    calculate, evaluate, get_warnings, validate_logic, validate_ranges, ErrorKind, Field,
    WarningKind, NIB_WEIGHT_MAX, NIB_WEIGHT_MIN,
};
use cacao_calc_rs::models::{CacaoInputs, InputField};

fn warning_kinds(inputs: &CacaoInputs) -> Vec<WarningKind> {
    let results = calculate(inputs);
    get_warnings(inputs, &results)
        .into_iter()
        .map(|w| w.kind)
        .collect()
}

#[test]
fn test_dark_scenario() {
    let inputs = CacaoInputs::new(1000.0, 70.0, 0.0, 0.0);
    let results = calculate(&inputs);

    assert_eq!(results.other_cacao_butter, 0.0);
    assert_eq!(results.nibs_cacao, 70.0);
    assert_eq!(results.sugar, 30.0);
    assert_eq!(results.k, 14.2857);
    assert_eq!(results.nibs_weight, 1000.0);
    assert_eq!(results.sugar_weight, 428.6);
    assert_eq!(results.cacao_butter_weight, 0.0);
    assert_eq!(results.other_weight, 0.0);
    assert_eq!(results.total_weight, 1428.6);
}

#[test]
fn test_milk_scenario() {
    let inputs = CacaoInputs::new(1000.0, 70.0, 20.0, 50.0);
    let results = calculate(&inputs);

    assert_float_absolute_eq!(results.other_cacao_butter, 10.0, 0.001);
    assert_float_absolute_eq!(results.nibs_cacao, 60.0, 0.001);
    assert_float_absolute_eq!(results.sugar, 10.0, 0.001);
    assert_eq!(results.k, 16.6667);
    assert_float_absolute_eq!(results.sugar_weight, 166.7, 0.001);
    assert_float_absolute_eq!(results.cacao_butter_weight, 166.7, 0.001);
    assert_float_absolute_eq!(results.other_weight, 333.3, 0.001);
    assert_float_absolute_eq!(results.total_weight, 1666.7, 0.001);
}

#[test]
fn test_small_batch_boundary_is_strict() {
    let at_threshold = CacaoInputs::new(500.0, 70.0, 0.0, 0.0);
    assert!(!warning_kinds(&at_threshold).contains(&WarningKind::SmallBatch));

    let below = CacaoInputs::new(499.0, 70.0, 0.0, 0.0);
    assert_eq!(warning_kinds(&below), vec![WarningKind::SmallBatch]);
}

#[test]
fn test_high_other_ingredients_scenario() {
    let inputs = CacaoInputs::new(1000.0, 45.0, 30.0, 80.0);
    assert!(validate_ranges(&inputs).is_empty());
    assert!(validate_logic(&inputs).is_empty());

    let results = calculate(&inputs);
    assert_float_absolute_eq!(results.other_cacao_butter, 24.0, 0.001);
    assert_float_absolute_eq!(results.nibs_cacao, 21.0, 0.001);
    assert_float_absolute_eq!(results.sugar, 25.0, 0.001);

    let kinds = warning_kinds(&inputs);
    assert_eq!(kinds, vec![WarningKind::OtherHigh, WarningKind::ButterHigh]);
    assert!(!kinds.iter().any(|k| matches!(
        k,
        WarningKind::SugarUltraLow | WarningKind::SugarLow | WarningKind::SugarHigh
    )));
}

#[test]
fn test_infeasible_scenario_produces_no_result() {
    let inputs = CacaoInputs::new(1000.0, 40.0, 40.0, 100.0);
    let errors = evaluate(&inputs).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, Field::Logic);
    assert_eq!(errors[0].kind, ErrorKind::InfeasibleCacaoSplit);
}

#[test]
fn test_zero_sugar_decimal_recipe_is_computed() {
    let inputs = CacaoInputs::new(1000.0, 89.8, 10.2, 5.5);
    let formulation = evaluate(&inputs).unwrap();

    assert_eq!(formulation.results.sugar, 0.0);
    assert_eq!(formulation.results.sugar_weight, 0.0);
    assert_float_absolute_eq!(formulation.results.percent_sum(), 100.0, 0.01);
    assert!(formulation
        .warnings
        .iter()
        .any(|w| w.kind == WarningKind::SugarUltraLow));
}

#[test]
fn test_feasibility_boundary_rejects_zero_nib_cacao() {
    // C = 50, P = 50 -> P_nibs = 0. M = 50 is out of range, so only the
    // logic validator is exercised directly here.
    let inputs = CacaoInputs::new(1000.0, 50.0, 50.0, 100.0);
    let errors = validate_logic(&inputs);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::InfeasibleCacaoSplit);
}

#[test]
fn test_nib_weight_range_boundaries() {
    let base = CacaoInputs::default();
    for ok in [NIB_WEIGHT_MIN, NIB_WEIGHT_MAX] {
        assert!(validate_ranges(&base.with_field(InputField::NibWeight, ok)).is_empty());
    }
    for bad in [99.99, 20000.01] {
        let errors = validate_ranges(&base.with_field(InputField::NibWeight, bad));
        assert_eq!(errors.len(), 1, "{} should fail", bad);
        assert_eq!(errors[0].field, Field::NibWeight);
    }
}

#[test]
fn test_calculate_is_idempotent() {
    let inputs = CacaoInputs::new(1234.5, 55.5, 12.5, 33.0);
    assert_eq!(calculate(&inputs), calculate(&inputs));
    assert_eq!(evaluate(&inputs), evaluate(&inputs));
}

#[test]
fn test_valid_grid_keeps_invariants() {
    let mut checked = 0;

    for nib_weight in [100.0, 499.0, 1000.0, 7500.0, 20000.0] {
        for target in (40..=90).step_by(5) {
            for other in (0..=40).step_by(5) {
                for butter in (0..=100).step_by(10) {
                    let inputs =
                        CacaoInputs::new(nib_weight, target as f64, other as f64, butter as f64);
                    let Ok(formulation) = evaluate(&inputs) else {
                        continue;
                    };
                    let r = formulation.results;

                    assert!(r.nibs_cacao > 0.0, "{:?}", inputs);
                    assert!(r.other_cacao_butter >= 0.0, "{:?}", inputs);
                    assert!(r.sugar >= 0.0, "{:?}", inputs);
                    assert_float_absolute_eq!(r.percent_sum(), 100.0, 0.01 + 1e-9);
                    assert_float_absolute_eq!(r.total_weight, r.weight_sum(), 0.1 + 1e-9);
                    assert!(r.total_weight >= r.nibs_weight, "{:?}", inputs);
                    assert!(r.k > 0.0);
                    checked += 1;
                }
            }
        }
    }

    assert!(checked > 0);
}
