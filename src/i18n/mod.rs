//! Display text, resolved from language-neutral keys.
//!
//! The calculator only ever produces [`MessageKey`]s; everything a user reads
//! goes through [`t`].

mod en;
mod ja;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    /// The other language (for toggling).
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Ja,
            Locale::Ja => Locale::En,
        }
    }
}

/// Every piece of translatable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKey {
    // Header
    MainCopy,
    SubCopy,
    OneLiner,

    // Input labels
    Parameters,
    NibWeight,
    NibWeightDesc,
    TargetCacao,
    TargetCacaoDesc,
    RecipeDetails,
    OtherIngredients,
    OtherIngredientsDesc,
    CacaoButterInOther,
    CacaoButterInOtherDesc,

    // Result sections
    CacaoProfile,
    TotalCacao,
    Breakdown,
    FromNibs,
    FromOtherButter,
    Composition,
    Sugar,
    Other,
    Measurement,
    Nibs,
    CacaoButter,
    TotalBatchWeight,
    CalculationDetails,
    CalcCbFromOther,
    CalcNibCacao,
    CalcBatchFactor,
    CalcSugarPct,
    CalcWeights,

    Warning,
    Error,

    // Range errors
    ErrNibWeightTitle,
    ErrNibWeightRange,
    ErrTargetCacaoTitle,
    ErrTargetCacaoRange,
    ErrOtherTitle,
    ErrOtherRange,
    ErrButterTitle,
    ErrButterRange,

    // Logic errors
    ErrNibsCacaoTitle,
    ErrNibsCacaoMsg,
    ErrNoSugarTitle,
    ErrNoSugarMsg,

    // Warnings
    WarnDarkCacaoRange,
    WarnMilkCacaoRange,
    WarnOtherHigh,
    WarnButterHigh,
    WarnSmallBatch,
    WarnSugarUltraLow,
    WarnSugarLow,
    WarnSugarHigh,

    // Interactive prompts
    PromptChooseAction,
    PromptEnterValue,
    ActionSwitchLanguage,
    ActionReset,
    ActionQuit,
}

/// Resolve a key to display text.
pub fn t(locale: Locale, key: MessageKey) -> &'static str {
    match locale {
        Locale::En => en::text(key),
        Locale::Ja => ja::text(key),
    }
}
