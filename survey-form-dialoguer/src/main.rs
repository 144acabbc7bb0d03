//! Interactive survey form.

use std::process::ExitCode;

use clap::Parser;
use survey_form::{FormError, FormSession, run_form};
use survey_form_dialoguer::DialoguerError;
use survey_form_dialoguer::DialoguerFrontend;
use survey_form_dialoguer::logging::{LogConfig, init_logging};

mod cli;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
    };
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }

    let mut frontend = if cli.plain {
        DialoguerFrontend::plain()
    } else {
        DialoguerFrontend::new()
    };
    let mut session = FormSession::new();

    println!("Survey Form");
    println!("All fields are required. Press Enter to keep the current value.");
    println!();

    match run_form(&mut frontend, &mut session) {
        Ok(_) => ExitCode::SUCCESS,
        Err(FormError::Frontend(error))
            if error
                .downcast_ref::<DialoguerError>()
                .is_some_and(DialoguerError::is_cancelled) =>
        {
            eprintln!("Survey cancelled.");
            ExitCode::from(130)
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
