//! apmcc - validator for custom game definitions
//!
//! Checks a YAML game definition file against the definition rules and
//! reports every problem found, with the path of each offending field.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands, ValidateArgs};
use colored::control;
use config::Config;
use error::{Error, Result};
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    let cli = Cli::parse_args();

    // Configuration is read before logging starts so its [logging] section applies
    let config = Config::load_with_file(cli.config.as_deref());

    if let Err(e) = init_logging(&cli, config.as_ref().ok()) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let color = cli.use_color() && config.as_ref().map(|c| c.output.color).unwrap_or(true);
    control::set_override(color);

    let result = config.and_then(|config| run(cli, &config, color));

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", error::format_error(&e, control::SHOULD_COLORIZE.should_colorize()));

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: &Config, use_color: bool) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = config.effective_output_format(cli.output)?;
    let mut output = OutputWriter::new(format, use_color, cli.quiet, cli.verbosity_level());

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    match (cli.file, cli.command) {
        (Some(file), None) => handlers::handle_validate(ValidateArgs::for_file(file), config, &mut output),
        (None, Some(Commands::Validate(args))) => handlers::handle_validate(args, config, &mut output),
        (None, Some(Commands::Generate(args))) => handlers::handle_generate(args, config, &mut output),
        (None, Some(Commands::Config(args))) => handlers::handle_config(args, config, &mut output),
        (None, Some(Commands::Completions(args))) => handlers::handle_completions(args),
        (Some(_), Some(_)) => Err(Error::invalid_args(
            "pass either a definition file or a subcommand, not both",
        )),
        (None, None) => Err(Error::invalid_args("no definition file given")),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: Option<&Config>) -> Result<()> {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());

    if let Some(config) = config {
        logging_config.merge_with_config(&config.logging, cli.verbosity_level());
    }

    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
