use tracing::debug;

use crate::calculator::constants::{BATCH_FACTOR_DECIMALS, PERCENT_DECIMALS, WEIGHT_DECIMALS};
use crate::models::{CacaoInputs, CacaoResults};

/// Unrounded percentage breakdown derived from the inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composition {
    /// C = M * (B / 100)
    pub other_cacao_butter: f64,
    /// P_nibs = P - C
    pub nibs_cacao: f64,
    /// M, carried through unchanged.
    pub other_ingredients: f64,
    /// S = 100 - (P_nibs + C + M) = 100 - (P + M)
    pub sugar: f64,
}

impl Composition {
    pub fn from_inputs(inputs: &CacaoInputs) -> Self {
        let other_cacao_butter = inputs.other_ingredients * (inputs.cacao_butter_in_other / 100.0);
        let nibs_cacao = inputs.target_cacao - other_cacao_butter;
        // P_nibs + C = P; summing P directly keeps S exactly 0 when P + M = 100.
        let sugar = 100.0 - (inputs.target_cacao + inputs.other_ingredients);

        Self {
            other_cacao_butter,
            nibs_cacao,
            other_ingredients: inputs.other_ingredients,
            sugar,
        }
    }
}

/// Round to `decimals` places, ties away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Derive percentages, weights and the batch factor from validated inputs.
///
/// The caller must have run both validators: nib cacao is assumed strictly
/// positive. Rounding is applied only to the returned values.
pub fn calculate(inputs: &CacaoInputs) -> CacaoResults {
    let composition = Composition::from_inputs(inputs);
    debug_assert!(
        composition.nibs_cacao > 0.0,
        "calculate called with non-positive nib cacao"
    );

    let k = inputs.nib_weight / composition.nibs_cacao;

    let other_weight = k * composition.other_ingredients;
    let cacao_butter_weight = k * composition.other_cacao_butter;
    let sugar_weight = k * composition.sugar;
    let total_weight = inputs.nib_weight + cacao_butter_weight + other_weight + sugar_weight;

    debug!(k, total_weight, "formulation computed");

    CacaoResults {
        nibs_cacao: round_to(composition.nibs_cacao, PERCENT_DECIMALS),
        other_cacao_butter: round_to(composition.other_cacao_butter, PERCENT_DECIMALS),
        other_ingredients: round_to(composition.other_ingredients, PERCENT_DECIMALS),
        sugar: round_to(composition.sugar, PERCENT_DECIMALS),
        nibs_weight: round_to(inputs.nib_weight, WEIGHT_DECIMALS),
        sugar_weight: round_to(sugar_weight, WEIGHT_DECIMALS),
        cacao_butter_weight: round_to(cacao_butter_weight, WEIGHT_DECIMALS),
        other_weight: round_to(other_weight, WEIGHT_DECIMALS),
        total_weight: round_to(total_weight, WEIGHT_DECIMALS),
        k: round_to(k, BATCH_FACTOR_DECIMALS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(14.285714, 4), 14.2857);
        assert_eq!(round_to(428.5714, 1), 428.6);
    }

    #[test]
    fn test_composition_dark() {
        let composition = Composition::from_inputs(&CacaoInputs::default());
        assert_eq!(composition.other_cacao_butter, 0.0);
        assert_eq!(composition.nibs_cacao, 70.0);
        assert_eq!(composition.sugar, 30.0);
    }

    #[test]
    fn test_composition_milk() {
        let composition = Composition::from_inputs(&CacaoInputs::new(1000.0, 70.0, 20.0, 50.0));
        assert!((composition.other_cacao_butter - 10.0).abs() < 1e-9);
        assert!((composition.nibs_cacao - 60.0).abs() < 1e-9);
        assert!((composition.sugar - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_composition_sugar_exact_at_zero() {
        let composition = Composition::from_inputs(&CacaoInputs::new(1000.0, 89.8, 10.2, 5.5));
        assert_eq!(composition.sugar, 0.0);
        assert!(composition.nibs_cacao > 0.0);
    }

    #[test]
    fn test_calculate_dark_defaults() {
        let results = calculate(&CacaoInputs::default());
        assert_eq!(results.k, 14.2857);
        assert_eq!(results.nibs_weight, 1000.0);
        assert_eq!(results.sugar_weight, 428.6);
        assert_eq!(results.cacao_butter_weight, 0.0);
        assert_eq!(results.other_weight, 0.0);
        assert_eq!(results.total_weight, 1428.6);
    }

    #[test]
    fn test_nib_weight_never_exceeds_total() {
        let results = calculate(&CacaoInputs::new(20_000.0, 90.0, 0.0, 0.0));
        assert!(results.total_weight >= results.nibs_weight);
    }
}
