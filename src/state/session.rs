use tracing::debug;

use crate::calculator::{evaluate, Formulation, ValidationError};
use crate::i18n::Locale;
use crate::models::{CacaoInputs, InputField};

/// Holds the current input record and display language for one editing
/// session.
///
/// Edits replace the record; the evaluation is regenerated from scratch on
/// every call. Nothing is kept beyond the current inputs.
#[derive(Debug, Clone, Default)]
pub struct RecipeSession {
    inputs: CacaoInputs,
    locale: Locale,
}

impl RecipeSession {
    /// Start a session with default inputs.
    pub fn new(locale: Locale) -> Self {
        Self {
            inputs: CacaoInputs::default(),
            locale,
        }
    }

    /// Start a session from explicit inputs.
    pub fn with_inputs(inputs: CacaoInputs, locale: Locale) -> Self {
        Self { inputs, locale }
    }

    pub fn inputs(&self) -> CacaoInputs {
        self.inputs
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch to the other display language.
    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggled();
    }

    /// Replace one field of the current inputs.
    pub fn update(&mut self, field: InputField, value: f64) {
        debug!(field = field.as_str(), value, "input updated");
        self.inputs = self.inputs.with_field(field, value);
    }

    /// Restore default inputs, keeping the locale.
    pub fn reset(&mut self) {
        self.inputs = CacaoInputs::default();
    }

    /// Evaluate the current inputs.
    pub fn evaluate(&self) -> Result<Formulation, Vec<ValidationError>> {
        evaluate(&self.inputs)
    }
}
