use std::fmt::Write;

use serde::Serialize;

use crate::calculator::{Formulation, ValidationError, Warning};
use crate::i18n::{t, Locale, MessageKey};
use crate::models::{CacaoInputs, CacaoResults, InputField};

use super::{field_description, field_label};

/// Width of the label column in result tables.
const LABEL_WIDTH: usize = 28;

fn row(out: &mut String, label: &str, value: &str) {
    // Pad by characters so wide labels still line up roughly.
    let pad = LABEL_WIDTH.saturating_sub(label.chars().count());
    let _ = writeln!(out, "  {}{} {:>10}", label, " ".repeat(pad), value);
}

fn section(out: &mut String, locale: Locale, key: MessageKey) {
    let _ = writeln!(out);
    let _ = writeln!(out, "=== {} ===", t(locale, key));
}

/// Format results as text sections: cacao profile, composition, measurement.
pub fn format_results(
    locale: Locale,
    inputs: &CacaoInputs,
    results: &CacaoResults,
    show_details: bool,
) -> String {
    let mut out = String::new();

    section(&mut out, locale, MessageKey::CacaoProfile);
    row(
        &mut out,
        t(locale, MessageKey::TotalCacao),
        &format!("{}%", results.total_cacao()),
    );
    let mut breakdown = format!("{}% {}", results.nibs_cacao, t(locale, MessageKey::FromNibs));
    if results.other_cacao_butter > 0.0 {
        let _ = write!(
            breakdown,
            " + {}% {}",
            results.other_cacao_butter,
            t(locale, MessageKey::FromOtherButter)
        );
    }
    let _ = writeln!(out, "  {}: {}", t(locale, MessageKey::Breakdown), breakdown);

    section(&mut out, locale, MessageKey::Composition);
    row(
        &mut out,
        &format!(
            "{} ({})",
            t(locale, MessageKey::Nibs),
            t(locale, MessageKey::FromNibs)
        ),
        &format!("{}%", results.nibs_cacao),
    );
    if results.other_cacao_butter > 0.0 {
        row(
            &mut out,
            t(locale, MessageKey::CacaoButter),
            &format!("{}%", results.other_cacao_butter),
        );
    }
    if results.other_ingredients > 0.0 {
        row(
            &mut out,
            t(locale, MessageKey::Other),
            &format!("{}%", results.other_ingredients),
        );
    }
    row(
        &mut out,
        t(locale, MessageKey::Sugar),
        &format!("{}%", results.sugar),
    );

    section(&mut out, locale, MessageKey::Measurement);
    row(
        &mut out,
        t(locale, MessageKey::Nibs),
        &format!("{} g", results.nibs_weight),
    );
    row(
        &mut out,
        t(locale, MessageKey::Sugar),
        &format!("{} g", results.sugar_weight),
    );
    if results.cacao_butter_weight > 0.0 {
        row(
            &mut out,
            t(locale, MessageKey::CacaoButter),
            &format!("{} g", results.cacao_butter_weight),
        );
    }
    if results.other_weight > 0.0 {
        row(
            &mut out,
            t(locale, MessageKey::Other),
            &format!("{} g", results.other_weight),
        );
    }
    row(
        &mut out,
        t(locale, MessageKey::TotalBatchWeight),
        &format!("{} g", results.total_weight),
    );

    if show_details {
        out.push_str(&format_details(locale, inputs, results));
    }

    out
}

/// Format each formula step with the actual numbers substituted.
pub fn format_details(locale: Locale, inputs: &CacaoInputs, results: &CacaoResults) -> String {
    let mut out = String::new();
    let c = results.other_cacao_butter;
    let p_nibs = results.nibs_cacao;
    let k = results.k;

    section(&mut out, locale, MessageKey::CalculationDetails);
    let _ = writeln!(
        out,
        "  {}: C = {} × ({} / 100) = {}%",
        t(locale, MessageKey::CalcCbFromOther),
        inputs.other_ingredients,
        inputs.cacao_butter_in_other,
        c
    );
    let _ = writeln!(
        out,
        "  {}: P_nibs = {} - {} = {}%",
        t(locale, MessageKey::CalcNibCacao),
        inputs.target_cacao,
        c,
        p_nibs
    );
    let _ = writeln!(
        out,
        "  {}: k = {} / {} = {}",
        t(locale, MessageKey::CalcBatchFactor),
        inputs.nib_weight,
        p_nibs,
        k
    );
    let _ = writeln!(
        out,
        "  {}: S = 100 - ({} + {} + {}) = {}%",
        t(locale, MessageKey::CalcSugarPct),
        p_nibs,
        c,
        inputs.other_ingredients,
        results.sugar
    );
    let _ = writeln!(out, "  {}:", t(locale, MessageKey::CalcWeights));
    let _ = writeln!(
        out,
        "    Sugar = {} x {} = {}g",
        k, results.sugar, results.sugar_weight
    );
    if results.cacao_butter_weight > 0.0 {
        let _ = writeln!(
            out,
            "    CB = {} x {} = {}g",
            k, c, results.cacao_butter_weight
        );
    }
    if results.other_weight > 0.0 {
        let _ = writeln!(
            out,
            "    Other = {} x {} = {}g",
            k, inputs.other_ingredients, results.other_weight
        );
    }
    let _ = writeln!(out, "    Total = {}g", results.total_weight);

    out
}

/// Format advisory warnings, one per line.
pub fn format_warnings(locale: Locale, warnings: &[Warning]) -> String {
    let label = t(locale, MessageKey::Warning);
    warnings
        .iter()
        .map(|w| format!("[{}] {}\n", label, t(locale, w.message)))
        .collect()
}

/// Format validation errors with title and message.
pub fn format_errors(locale: Locale, errors: &[ValidationError]) -> String {
    let label = t(locale, MessageKey::Error);
    errors
        .iter()
        .map(|e| {
            format!(
                "[{}] {}\n    {}\n",
                label,
                t(locale, e.title),
                t(locale, e.message)
            )
        })
        .collect()
}

/// Print the outcome of an evaluation.
pub fn display_evaluation(
    locale: Locale,
    inputs: &CacaoInputs,
    evaluation: &Result<Formulation, Vec<ValidationError>>,
    show_details: bool,
) {
    match evaluation {
        Ok(formulation) => {
            print!(
                "{}",
                format_results(locale, inputs, &formulation.results, show_details)
            );
            if !formulation.warnings.is_empty() {
                println!();
                print!("{}", format_warnings(locale, &formulation.warnings));
            }
        }
        Err(errors) => {
            println!();
            print!("{}", format_errors(locale, errors));
        }
    }
    println!();
}

/// Print the title copy shown when a session starts.
pub fn display_banner(locale: Locale) {
    println!("{}", t(locale, MessageKey::MainCopy));
    println!("{}", t(locale, MessageKey::SubCopy));
    println!("{}", t(locale, MessageKey::OneLiner));
}

/// Print the current inputs, grouped as parameters and recipe details.
pub fn display_inputs(locale: Locale, inputs: &CacaoInputs) {
    let groups = [
        (
            MessageKey::Parameters,
            [InputField::NibWeight, InputField::TargetCacao],
        ),
        (
            MessageKey::RecipeDetails,
            [InputField::OtherIngredients, InputField::CacaoButterInOther],
        ),
    ];

    for (title, fields) in groups {
        println!();
        println!("=== {} ===", t(locale, title));
        for field in fields {
            let mut out = String::new();
            row(
                &mut out,
                t(locale, field_label(field)),
                &format!("{} {}", inputs.get(field), field.unit()),
            );
            print!("{}", out);
            println!("      {}", t(locale, field_description(field)));
        }
    }
}

/// A validation error with its text resolved.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedError {
    pub field: String,
    pub title: String,
    pub message: String,
}

/// A warning with its text resolved.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedWarning {
    pub field: String,
    pub message: String,
}

/// Machine-readable report of one evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub locale: Locale,
    pub inputs: CacaoInputs,
    pub results: Option<CacaoResults>,
    pub warnings: Vec<LocalizedWarning>,
    pub errors: Vec<LocalizedError>,
}

/// Build a report with every message resolved in `locale`.
pub fn build_report(
    locale: Locale,
    inputs: &CacaoInputs,
    evaluation: &Result<Formulation, Vec<ValidationError>>,
) -> Report {
    let (results, warnings, errors) = match evaluation {
        Ok(formulation) => (
            Some(formulation.results),
            formulation
                .warnings
                .iter()
                .map(|w| LocalizedWarning {
                    field: w.field.to_string(),
                    message: t(locale, w.message).to_string(),
                })
                .collect(),
            Vec::new(),
        ),
        Err(errors) => (
            None,
            Vec::new(),
            errors
                .iter()
                .map(|e| LocalizedError {
                    field: e.field.to_string(),
                    title: t(locale, e.title).to_string(),
                    message: t(locale, e.message).to_string(),
                })
                .collect(),
        ),
    };

    Report {
        locale,
        inputs: *inputs,
        results,
        warnings,
        errors,
    }
}
