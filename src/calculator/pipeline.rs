use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::advisory::{get_warnings, Warning};
use crate::calculator::formula::calculate;
use crate::calculator::validation::{validate_logic, validate_ranges, ValidationError};
use crate::models::{CacaoInputs, CacaoResults};

/// A computed formulation with its advisories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formulation {
    pub results: CacaoResults,
    pub warnings: Vec<Warning>,
}

/// Run range validation, logic validation, the formula and the advisory
/// rules in sequence.
///
/// Any validation failure short-circuits: the caller gets the error list and
/// nothing else.
pub fn evaluate(inputs: &CacaoInputs) -> Result<Formulation, Vec<ValidationError>> {
    let range_errors = validate_ranges(inputs);
    if !range_errors.is_empty() {
        return Err(range_errors);
    }

    let logic_errors = validate_logic(inputs);
    if !logic_errors.is_empty() {
        return Err(logic_errors);
    }

    let results = calculate(inputs);
    let warnings = get_warnings(inputs, &results);
    debug!(warnings = warnings.len(), "evaluation complete");

    Ok(Formulation { results, warnings })
}
