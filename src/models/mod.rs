pub mod inputs;
pub mod results;

pub use inputs::{CacaoInputs, InputField};
pub use results::CacaoResults;
