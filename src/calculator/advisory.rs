use serde::{Deserialize, Serialize};

use crate::calculator::constants::*;
use crate::calculator::validation::Field;
use crate::i18n::MessageKey;
use crate::models::{CacaoInputs, CacaoResults};

/// Advisory conditions. None of them blocks a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WarningKind {
    DarkCacaoRange,
    MilkCacaoRange,
    OtherHigh,
    ButterHigh,
    SmallBatch,
    SugarUltraLow,
    SugarLow,
    SugarHigh,
}

impl WarningKind {
    pub fn field(self) -> Field {
        match self {
            WarningKind::DarkCacaoRange | WarningKind::MilkCacaoRange => Field::TargetCacao,
            WarningKind::OtherHigh => Field::OtherIngredients,
            WarningKind::ButterHigh => Field::CacaoButterInOther,
            WarningKind::SmallBatch => Field::NibWeight,
            WarningKind::SugarUltraLow | WarningKind::SugarLow | WarningKind::SugarHigh => {
                Field::Sugar
            }
        }
    }

    pub fn message(self) -> MessageKey {
        match self {
            WarningKind::DarkCacaoRange => MessageKey::WarnDarkCacaoRange,
            WarningKind::MilkCacaoRange => MessageKey::WarnMilkCacaoRange,
            WarningKind::OtherHigh => MessageKey::WarnOtherHigh,
            WarningKind::ButterHigh => MessageKey::WarnButterHigh,
            WarningKind::SmallBatch => MessageKey::WarnSmallBatch,
            WarningKind::SugarUltraLow => MessageKey::WarnSugarUltraLow,
            WarningKind::SugarLow => MessageKey::WarnSugarLow,
            WarningKind::SugarHigh => MessageKey::WarnSugarHigh,
        }
    }
}

/// A non-fatal advisory attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    pub field: Field,
    pub kind: WarningKind,
    pub message: MessageKey,
}

impl From<WarningKind> for Warning {
    fn from(kind: WarningKind) -> Self {
        Self {
            field: kind.field(),
            kind,
            message: kind.message(),
        }
    }
}

/// Cacao range check; the typical range depends on whether other
/// ingredients are present.
fn cacao_range_warning(inputs: &CacaoInputs) -> Option<WarningKind> {
    let cacao = inputs.target_cacao;
    if inputs.other_ingredients == 0.0 {
        (cacao < DARK_CACAO_MIN || cacao > DARK_CACAO_MAX).then_some(WarningKind::DarkCacaoRange)
    } else {
        (cacao < MILK_CACAO_MIN || cacao > MILK_CACAO_MAX).then_some(WarningKind::MilkCacaoRange)
    }
}

/// Sugar tier; first matching tier only.
fn sugar_tier_warning(sugar: f64) -> Option<WarningKind> {
    if sugar < SUGAR_ULTRA_LOW_THRESHOLD {
        Some(WarningKind::SugarUltraLow)
    } else if sugar < SUGAR_LOW_THRESHOLD {
        Some(WarningKind::SugarLow)
    } else if sugar > SUGAR_HIGH_THRESHOLD {
        Some(WarningKind::SugarHigh)
    } else {
        None
    }
}

/// Evaluate every advisory rule, in rule order.
///
/// All rules run on every call; the sugar tier uses the (rounded) result.
pub fn get_warnings(inputs: &CacaoInputs, results: &CacaoResults) -> Vec<Warning> {
    let rules = [
        cacao_range_warning(inputs),
        (inputs.other_ingredients > OTHER_HIGH_THRESHOLD).then_some(WarningKind::OtherHigh),
        (inputs.cacao_butter_in_other > BUTTER_HIGH_THRESHOLD).then_some(WarningKind::ButterHigh),
        (inputs.nib_weight < SMALL_BATCH_THRESHOLD).then_some(WarningKind::SmallBatch),
        sugar_tier_warning(results.sugar),
    ];

    rules.into_iter().flatten().map(Warning::from).collect()
}
