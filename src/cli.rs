use clap::{Args, Parser, Subcommand};

use crate::i18n::Locale;
use crate::models::CacaoInputs;

/// Cacao Calculator: turn nib weight and target cacao % into a full chocolate recipe.
#[derive(Parser, Debug)]
#[command(name = "cacao_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Display language.
    #[arg(short, long, value_enum, global = true, default_value_t = Locale::En)]
    pub lang: Locale,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Edit the recipe parameters interactively.
    Interactive,

    /// Compute a single recipe from command-line parameters.
    Calc(CalcArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Cacao nib weight in grams (100 to 20000).
    #[arg(short, long, default_value_t = 1000.0)]
    pub nib_weight: f64,

    /// Target total cacao in percent (40 to 90).
    #[arg(short, long, default_value_t = 70.0)]
    pub target_cacao: f64,

    /// Other ingredients (e.g. milk powder) in percent (0 to 40).
    #[arg(short, long, default_value_t = 0.0)]
    pub other: f64,

    /// Cacao butter within other ingredients in percent (0 to 100).
    #[arg(short, long, default_value_t = 0.0)]
    pub butter: f64,

    /// Print a JSON report instead of text.
    #[arg(long)]
    pub json: bool,

    /// Show the calculation details.
    #[arg(long)]
    pub details: bool,
}

impl CalcArgs {
    pub fn inputs(&self) -> CacaoInputs {
        CacaoInputs::new(self.nib_weight, self.target_cacao, self.other, self.butter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_defaults_match_input_defaults() {
        let cli = Cli::parse_from(["cacao_calc", "calc"]);
        match cli.command {
            Some(Command::Calc(args)) => assert_eq!(args.inputs(), CacaoInputs::default()),
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.lang, Locale::En);
    }

    #[test]
    fn test_calc_flags() {
        let cli = Cli::parse_from([
            "cacao_calc", "--lang", "ja", "calc", "-n", "500", "-t", "45", "-o", "30", "-b",
            "80", "--json",
        ]);
        assert_eq!(cli.lang, Locale::Ja);
        let Some(Command::Calc(args)) = cli.command else {
            panic!("expected calc");
        };
        assert_eq!(args.inputs(), CacaoInputs::new(500.0, 45.0, 30.0, 80.0));
        assert!(args.json);
        assert!(!args.details);
    }

    #[test]
    fn test_no_subcommand_defaults_to_interactive() {
        let cli = Cli::parse_from(["cacao_calc"]);
        assert!(matches!(cli.command.unwrap_or_default(), Command::Interactive));
    }
}
