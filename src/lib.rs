pub mod calculator;
pub mod cli;
pub mod error;
pub mod i18n;
pub mod interface;
pub mod models;
pub mod state;

pub use calculator::{
    calculate, evaluate, get_warnings, validate_logic, validate_ranges, Formulation,
    ValidationError, Warning,
};
pub use error::{CacaoError, Result};
pub use models::{CacaoInputs, CacaoResults, InputField};
