use serde::{Deserialize, Serialize};

/// A fully resolved formulation.
///
/// Percentages are rounded to 2 decimals, weights (grams) to 1 decimal,
/// the batch factor `k` to 4 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacaoResults {
    /// Cacao percentage contributed by nibs (P_nibs).
    pub nibs_cacao: f64,

    /// Cacao butter percentage contributed by other ingredients (C).
    pub other_cacao_butter: f64,

    /// Non-cacao, non-sugar share (M).
    pub other_ingredients: f64,

    /// Residual sugar share (S).
    pub sugar: f64,

    pub nibs_weight: f64,
    pub sugar_weight: f64,
    pub cacao_butter_weight: f64,
    pub other_weight: f64,
    pub total_weight: f64,

    /// Batch factor: grams of batch per percentage point of nib cacao.
    pub k: f64,
}

impl CacaoResults {
    /// Total cacao (nib-derived plus added cacao butter).
    pub fn total_cacao(&self) -> f64 {
        self.nibs_cacao + self.other_cacao_butter
    }

    /// Sum of the four composition shares; 100 up to rounding.
    pub fn percent_sum(&self) -> f64 {
        self.nibs_cacao + self.other_cacao_butter + self.other_ingredients + self.sugar
    }

    /// Sum of the four component weights; equals `total_weight` up to rounding.
    pub fn weight_sum(&self) -> f64 {
        self.nibs_weight + self.sugar_weight + self.cacao_butter_weight + self.other_weight
    }
}
