use serde::{Deserialize, Serialize};

/// The four user-editable recipe parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    NibWeight,
    TargetCacao,
    OtherIngredients,
    CacaoButterInOther,
}

impl InputField {
    /// All input fields in declaration order.
    pub const ALL: [InputField; 4] = [
        InputField::NibWeight,
        InputField::TargetCacao,
        InputField::OtherIngredients,
        InputField::CacaoButterInOther,
    ];

    /// Stable identifier, matching the serialized name.
    pub fn as_str(self) -> &'static str {
        match self {
            InputField::NibWeight => "nibWeight",
            InputField::TargetCacao => "targetCacao",
            InputField::OtherIngredients => "otherIngredients",
            InputField::CacaoButterInOther => "cacaoButterInOther",
        }
    }

    /// Display unit of the field.
    pub fn unit(self) -> &'static str {
        match self {
            InputField::NibWeight => "g",
            _ => "%",
        }
    }
}

/// Recipe parameters supplied by the user.
///
/// - `nib_weight` (N, grams): the batch's anchor quantity.
/// - `target_cacao` (P, percent): total cacao of the finished batch.
/// - `other_ingredients` (M, percent): share that is neither cacao nor sugar.
/// - `cacao_butter_in_other` (B, percent): fraction of M that is cacao butter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacaoInputs {
    pub nib_weight: f64,
    pub target_cacao: f64,
    pub other_ingredients: f64,
    pub cacao_butter_in_other: f64,
}

impl Default for CacaoInputs {
    fn default() -> Self {
        Self {
            nib_weight: 1000.0,
            target_cacao: 70.0,
            other_ingredients: 0.0,
            cacao_butter_in_other: 0.0,
        }
    }
}

impl CacaoInputs {
    pub fn new(
        nib_weight: f64,
        target_cacao: f64,
        other_ingredients: f64,
        cacao_butter_in_other: f64,
    ) -> Self {
        Self {
            nib_weight,
            target_cacao,
            other_ingredients,
            cacao_butter_in_other,
        }
    }

    /// Read a single field.
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::NibWeight => self.nib_weight,
            InputField::TargetCacao => self.target_cacao,
            InputField::OtherIngredients => self.other_ingredients,
            InputField::CacaoButterInOther => self.cacao_butter_in_other,
        }
    }

    /// Return a new record with one field replaced.
    #[must_use]
    pub fn with_field(self, field: InputField, value: f64) -> Self {
        let mut next = self;
        match field {
            InputField::NibWeight => next.nib_weight = value,
            InputField::TargetCacao => next.target_cacao = value,
            InputField::OtherIngredients => next.other_ingredients = value,
            InputField::CacaoButterInOther => next.cacao_butter_in_other = value,
        }
        next
    }
}
