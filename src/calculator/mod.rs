pub mod advisory;
pub mod constants;
pub mod formula;
pub mod pipeline;
pub mod validation;

pub use advisory::{get_warnings, Warning, WarningKind};
pub use constants::*;
pub use formula::{calculate, round_to, Composition};
pub use pipeline::{evaluate, Formulation};
pub use validation::{in_range, validate_logic, validate_ranges, ErrorKind, Field, ValidationError};
