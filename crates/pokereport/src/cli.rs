//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pokereport_core::ReportConfig;

/// Pokereport - creature lookup, name translation, and PDF reports
#[derive(Parser, Debug)]
#[command(name = "pokereport", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging for pokereport crates
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand; `generate` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The subcommand to run; `generate` with configured defaults when none is given.
    pub fn command_or_default(&mut self) -> Command {
        self.command
            .take()
            .unwrap_or_else(|| Command::Generate(GenerateArgs::default()))
    }
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch, translate, and render a report
    Generate(GenerateArgs),

    /// Inspect or edit the configuration file
    Config {
        /// Config operation
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Per-run overrides of the `[report]` configuration section.
#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Creature to look up
    #[arg(long)]
    pub creature: Option<String>,

    /// Target language code (e.g. "fr")
    #[arg(short, long)]
    pub language: Option<String>,

    /// Output PDF path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Writes any given overrides into `config`.
    pub fn apply(&self, config: &mut ReportConfig) {
        if let Some(creature) = &self.creature {
            config.report.creature = creature.clone();
        }
        if let Some(language) = &self.language {
            config.report.target_language = language.clone();
        }
        if let Some(output) = &self.output {
            config.report.output = output.clone();
        }
    }
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,

    /// Print the value at a dotted key (e.g. `report.output`)
    Get {
        /// Dotted key
        key: String,
    },

    /// Set the value at a dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value; booleans and numbers are detected
        value: String,
    },

    /// Write a default config file
    Init {
        /// Write here instead of the default location
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration as environment variables
    Export {
        /// Format as `--env KEY=VALUE` for `docker run`
        #[arg(long)]
        docker_env: bool,
    },
}
