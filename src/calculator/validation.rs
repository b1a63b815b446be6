use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculator::constants::bounds;
use crate::calculator::formula::Composition;
use crate::i18n::MessageKey;
use crate::models::{CacaoInputs, InputField};

/// Identifier a validation error or warning is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    NibWeight,
    TargetCacao,
    OtherIngredients,
    CacaoButterInOther,
    /// A combination of inputs rather than a single field.
    Logic,
    /// The derived sugar share.
    Sugar,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::NibWeight => "nibWeight",
            Field::TargetCacao => "targetCacao",
            Field::OtherIngredients => "otherIngredients",
            Field::CacaoButterInOther => "cacaoButterInOther",
            Field::Logic => "logic",
            Field::Sugar => "sugar",
        }
    }
}

impl From<InputField> for Field {
    fn from(field: InputField) -> Self {
        match field {
            InputField::NibWeight => Field::NibWeight,
            InputField::TargetCacao => Field::TargetCacao,
            InputField::OtherIngredients => Field::OtherIngredients,
            InputField::CacaoButterInOther => Field::CacaoButterInOther,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an input record was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// A single field lies outside its closed interval.
    OutOfRange,
    /// Cacao butter from other ingredients leaves no room for nib cacao.
    InfeasibleCacaoSplit,
    /// Cacao plus other ingredients already exceed 100%.
    NoSugarHeadroom,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::OutOfRange => "outOfRange",
            ErrorKind::InfeasibleCacaoSplit => "infeasibleCacaoSplit",
            ErrorKind::NoSugarHeadroom => "noSugarHeadroom",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A computation-blocking validation failure.
///
/// Carries message keys only; text is resolved with [`crate::i18n::t`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("{field}: {kind}")]
pub struct ValidationError {
    pub field: Field,
    pub kind: ErrorKind,
    pub title: MessageKey,
    pub message: MessageKey,
}

impl ValidationError {
    /// Range error for a single input field.
    pub fn out_of_range(field: InputField) -> Self {
        let (title, message) = match field {
            InputField::NibWeight => (MessageKey::ErrNibWeightTitle, MessageKey::ErrNibWeightRange),
            InputField::TargetCacao => (
                MessageKey::ErrTargetCacaoTitle,
                MessageKey::ErrTargetCacaoRange,
            ),
            InputField::OtherIngredients => (MessageKey::ErrOtherTitle, MessageKey::ErrOtherRange),
            InputField::CacaoButterInOther => {
                (MessageKey::ErrButterTitle, MessageKey::ErrButterRange)
            }
        };
        Self {
            field: field.into(),
            kind: ErrorKind::OutOfRange,
            title,
            message,
        }
    }

    pub fn infeasible_cacao_split() -> Self {
        Self {
            field: Field::Logic,
            kind: ErrorKind::InfeasibleCacaoSplit,
            title: MessageKey::ErrNibsCacaoTitle,
            message: MessageKey::ErrNibsCacaoMsg,
        }
    }

    pub fn no_sugar_headroom() -> Self {
        Self {
            field: Field::Logic,
            kind: ErrorKind::NoSugarHeadroom,
            title: MessageKey::ErrNoSugarTitle,
            message: MessageKey::ErrNoSugarMsg,
        }
    }
}

/// Check whether `value` lies in the closed interval for `field`.
///
/// NaN lies outside every interval.
pub fn in_range(field: InputField, value: f64) -> bool {
    let (min, max) = bounds(field);
    (min..=max).contains(&value)
}

/// Reject individually out-of-bound inputs.
///
/// Returns one error per offending field, in declaration order.
pub fn validate_ranges(inputs: &CacaoInputs) -> Vec<ValidationError> {
    let errors: Vec<ValidationError> = InputField::ALL
        .into_iter()
        .filter(|&field| !in_range(field, inputs.get(field)))
        .map(ValidationError::out_of_range)
        .collect();

    if !errors.is_empty() {
        debug!(count = errors.len(), "range validation failed");
    }
    errors
}

/// Reject infeasible input combinations.
///
/// Expects range-valid inputs. Nib cacao must be strictly positive and sugar
/// non-negative; the sugar check is only reached when the first one passes,
/// so at most one error is returned.
pub fn validate_logic(inputs: &CacaoInputs) -> Vec<ValidationError> {
    let composition = Composition::from_inputs(inputs);

    if composition.nibs_cacao <= 0.0 {
        debug!(nibs_cacao = composition.nibs_cacao, "infeasible cacao split");
        return vec![ValidationError::infeasible_cacao_split()];
    }

    if composition.sugar < 0.0 {
        debug!(sugar = composition.sugar, "no sugar headroom");
        return vec![ValidationError::no_sugar_headroom()];
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pass_both_validators() {
        let inputs = CacaoInputs::default();
        assert!(validate_ranges(&inputs).is_empty());
        assert!(validate_logic(&inputs).is_empty());
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        for field in InputField::ALL {
            let (min, max) = bounds(field);
            assert!(in_range(field, min), "{} min", field.as_str());
            assert!(in_range(field, max), "{} max", field.as_str());
        }
    }

    #[test]
    fn test_non_finite_values_fail() {
        assert!(!in_range(InputField::NibWeight, f64::NAN));
        assert!(!in_range(InputField::TargetCacao, f64::INFINITY));
        assert!(!in_range(InputField::OtherIngredients, f64::NEG_INFINITY));
    }

    #[test]
    fn test_all_failures_reported_in_order() {
        let inputs = CacaoInputs::new(50.0, 95.0, 41.0, 101.0);
        let errors = validate_ranges(&inputs);

        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::NibWeight,
                Field::TargetCacao,
                Field::OtherIngredients,
                Field::CacaoButterInOther
            ]
        );
        assert!(errors.iter().all(|e| e.kind == ErrorKind::OutOfRange));
        assert_eq!(errors[0].title, MessageKey::ErrNibWeightTitle);
        assert_eq!(errors[3].message, MessageKey::ErrButterRange);
    }

    #[test]
    fn test_single_field_failure() {
        let inputs = CacaoInputs::default().with_field(InputField::OtherIngredients, -1.0);
        let errors = validate_ranges(&inputs);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::OtherIngredients);
    }

    #[test]
    fn test_infeasible_split_is_strict() {
        // C = 40 * 1.0 = 40, P_nibs = 40 - 40 = 0
        let inputs = CacaoInputs::new(1000.0, 40.0, 40.0, 100.0);
        let errors = validate_logic(&inputs);
        assert_eq!(errors, vec![ValidationError::infeasible_cacao_split()]);
        assert_eq!(errors[0].field, Field::Logic);
    }

    #[test]
    fn test_no_sugar_headroom() {
        // C = 40, P_nibs = 50, S = 100 - 130 = -30
        let inputs = CacaoInputs::new(1000.0, 90.0, 40.0, 100.0);
        let errors = validate_logic(&inputs);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::NoSugarHeadroom);
    }

    #[test]
    fn test_zero_sugar_is_allowed() {
        // P + M = 100 -> S = 0
        let inputs = CacaoInputs::new(1000.0, 60.0, 40.0, 0.0);
        assert!(validate_logic(&inputs).is_empty());
    }

    #[test]
    fn test_zero_sugar_with_decimal_inputs_is_allowed() {
        // C = 10.2 * 0.055, P + M = 100 -> S = 0
        let inputs = CacaoInputs::new(1000.0, 89.8, 10.2, 5.5);
        assert!(validate_logic(&inputs).is_empty());

        let inputs = CacaoInputs::new(1000.0, 75.3, 24.7, 33.3);
        assert!(validate_logic(&inputs).is_empty());
    }

    #[test]
    fn test_error_display_uses_keys() {
        let err = ValidationError::out_of_range(InputField::TargetCacao);
        assert_eq!(err.to_string(), "targetCacao: outOfRange");
    }
}
