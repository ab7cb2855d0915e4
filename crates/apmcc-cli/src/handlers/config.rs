//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigShowArgs};
use crate::config::Config;
use crate::error::{ErrorContext, Result};
use crate::output::OutputWriter;
use serde::Serialize;

/// A searched configuration location
#[derive(Debug, Serialize)]
struct ConfigLocation {
    path: String,
    exists: bool,
}

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
        ConfigAction::Paths => handle_config_paths(output),
    }
}

/// Handle config show subcommand
fn handle_config_show(args: ConfigShowArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let rendered = config
        .render(args.format)
        .with_context(|| format!("Failed to render configuration as {:?}", args.format))?;
    output.write(&rendered)?;
    if !rendered.ends_with('\n') {
        output.writeln("")?;
    }
    Ok(())
}

/// Handle config paths subcommand
fn handle_config_paths(output: &mut OutputWriter) -> Result<()> {
    let locations: Vec<ConfigLocation> = Config::default_config_paths()
        .into_iter()
        .map(|path| ConfigLocation {
            exists: path.is_file(),
            path: path.display().to_string(),
        })
        .collect();

    if output.format() != crate::cli::OutputFormat::Human {
        return output.data(&locations);
    }

    output.info("Configuration files are searched in this order:")?;
    for location in &locations {
        let marker = if location.exists { " (found)" } else { "" };
        output.writeln(&format!("  {}{}", location.path, marker))?;
    }
    Ok(())
}
