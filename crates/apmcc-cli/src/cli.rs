//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.
//! `apmcc <FILE>` is shorthand for `apmcc validate <FILE>`.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// apmcc - Validate chapter/challenge game definitions
///
/// Reads a YAML game definition describing chapters of challenges,
/// progression items and filler pools, and reports every problem found.
#[derive(Parser, Debug)]
#[command(
    name = "apmcc",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "APMCC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (defaults to the configured format, else human)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Definition file to validate
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a game definition file
    Validate(ValidateArgs),

    /// Validate a definition, then generate a game from it (not yet implemented)
    Generate(GenerateArgs),

    /// Inspect configuration
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, Default)]
pub struct ValidateArgs {
    /// Path to the definition file (YAML, or JSON)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Reject keys that are not part of the definition layout
    #[arg(short, long)]
    pub strict: bool,

    /// Treat warnings as failures
    #[arg(long)]
    pub deny_warnings: bool,

    /// Print a summary of the definition when it is valid
    #[arg(long)]
    pub summary: bool,
}

impl ValidateArgs {
    /// Arguments for the bare `apmcc <FILE>` form
    pub fn for_file(file: PathBuf) -> Self {
        Self {
            file,
            ..Self::default()
        }
    }
}

/// Arguments for the generate command
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the definition file (YAML, or JSON)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Reject keys that are not part of the definition layout
    #[arg(short, long)]
    pub strict: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration inspection actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show(ConfigShowArgs),

    /// List the configuration file locations that are searched
    Paths,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

impl OutputFormat {
    /// Parse the name used in configuration files
    pub fn from_config_name(name: &str) -> Option<Self> {
        Self::from_str(name, true).ok()
    }
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
