pub mod prompts;
pub mod render;

use crate::i18n::MessageKey;
use crate::models::InputField;

pub use prompts::{parse_value, prompt_action, prompt_value, Action};
pub use render::{
    build_report, display_banner, display_evaluation, display_inputs, format_details, format_errors,
    format_results, format_warnings, Report,
};

/// Display label for an input field.
pub fn field_label(field: InputField) -> MessageKey {
    match field {
        InputField::NibWeight => MessageKey::NibWeight,
        InputField::TargetCacao => MessageKey::TargetCacao,
        InputField::OtherIngredients => MessageKey::OtherIngredients,
        InputField::CacaoButterInOther => MessageKey::CacaoButterInOther,
    }
}

/// One-line description of an input field.
pub fn field_description(field: InputField) -> MessageKey {
    match field {
        InputField::NibWeight => MessageKey::NibWeightDesc,
        InputField::TargetCacao => MessageKey::TargetCacaoDesc,
        InputField::OtherIngredients => MessageKey::OtherIngredientsDesc,
        InputField::CacaoButterInOther => MessageKey::CacaoButterInOtherDesc,
    }
}
