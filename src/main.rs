use clap::Parser;
use tracing_subscriber::EnvFilter;

use cacao_calc_rs::cli::{CalcArgs, Cli, Command};
use cacao_calc_rs::error::{CacaoError, Result};
use cacao_calc_rs::i18n::Locale;
use cacao_calc_rs::interface::{
    build_report, display_banner, display_evaluation, display_inputs, prompt_action,
    prompt_value, Action,
};
use cacao_calc_rs::state::RecipeSession;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        // Rejections were already printed in the chosen language.
        if !e.is_reported() {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

/// Log to stderr; RUST_LOG wins over the verbosity flag.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Interactive => cmd_interactive(cli.lang),
        Command::Calc(args) => cmd_calc(cli.lang, &args),
    }
}

/// Compute one recipe from command-line parameters.
fn cmd_calc(locale: Locale, args: &CalcArgs) -> Result<()> {
    let session = RecipeSession::with_inputs(args.inputs(), locale);
    let inputs = session.inputs();
    let evaluation = session.evaluate();

    if args.json {
        let report = build_report(locale, &inputs, &evaluation);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_evaluation(locale, &inputs, &evaluation, args.details);
    }

    match evaluation {
        Ok(_) => Ok(()),
        Err(errors) => Err(CacaoError::Rejected {
            count: errors.len(),
        }),
    }
}

/// Edit inputs field by field, re-evaluating after every change.
fn cmd_interactive(locale: Locale) -> Result<()> {
    let mut session = RecipeSession::new(locale);
    display_banner(session.locale());

    loop {
        display_inputs(session.locale(), &session.inputs());
        display_evaluation(session.locale(), &session.inputs(), &session.evaluate(), true);

        match prompt_action(session.locale(), &session.inputs())? {
            Action::Edit(field) => {
                let value = prompt_value(session.locale(), field, session.inputs().get(field))?;
                session.update(field, value);
            }
            Action::SwitchLanguage => session.toggle_locale(),
            Action::Reset => session.reset(),
            Action::Quit => break,
        }
    }

    Ok(())
}
