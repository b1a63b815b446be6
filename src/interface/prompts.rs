use dialoguer::{Input, Select};

use crate::error::{CacaoError, Result};
use crate::i18n::{t, Locale, MessageKey};
use crate::models::{CacaoInputs, InputField};

use super::field_label;

/// What the user picked in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit(InputField),
    SwitchLanguage,
    Reset,
    Quit,
}

/// Menu entries in display order.
fn menu_actions() -> Vec<Action> {
    InputField::ALL
        .into_iter()
        .map(Action::Edit)
        .chain([Action::SwitchLanguage, Action::Reset, Action::Quit])
        .collect()
}

fn action_label(locale: Locale, inputs: &CacaoInputs, action: Action) -> String {
    match action {
        Action::Edit(field) => format!(
            "{} [{} {}]",
            t(locale, field_label(field)),
            inputs.get(field),
            field.unit()
        ),
        Action::SwitchLanguage => t(locale, MessageKey::ActionSwitchLanguage).to_string(),
        Action::Reset => t(locale, MessageKey::ActionReset).to_string(),
        Action::Quit => t(locale, MessageKey::ActionQuit).to_string(),
    }
}

/// Prompt for the next action.
pub fn prompt_action(locale: Locale, inputs: &CacaoInputs) -> Result<Action> {
    let actions = menu_actions();
    let labels: Vec<String> = actions
        .iter()
        .map(|&a| action_label(locale, inputs, a))
        .collect();

    let selection = Select::new()
        .with_prompt(t(locale, MessageKey::PromptChooseAction))
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions.get(selection).copied().unwrap_or(Action::Quit))
}

/// Parse a numeric field value typed by the user.
pub fn parse_value(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| CacaoError::InvalidInput(format!("'{}' is not a number", input.trim())))?;

    if !value.is_finite() {
        return Err(CacaoError::InvalidInput(format!(
            "'{}' is not a finite number",
            input.trim()
        )));
    }

    Ok(value)
}

/// Prompt for a new value of one field.
///
/// Range checking is left to the validators so out-of-range values are
/// reported the same way everywhere.
pub fn prompt_value(locale: Locale, field: InputField, current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!(
            "{} ({}) - {}",
            t(locale, field_label(field)),
            field.unit(),
            t(locale, MessageKey::PromptEnterValue)
        ))
        .default(current.to_string())
        .validate_with(|s: &String| parse_value(s).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    parse_value(&input)
}
