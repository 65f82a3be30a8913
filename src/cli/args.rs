//! Top-level argument definitions

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::warn;

use crate::cli::commands::{
    batch::BatchArgs, calc::CalcArgs, completions::CompletionsArgs, config::ConfigCommands,
    grades::GradesArgs, models::ModelsArgs, range::RangeArgs,
};
use crate::core::Config;

#[derive(Parser, Debug)]
#[command(
    name = "viscalc",
    version,
    about = "In-service viscosity calculator - estimate viscosity at 40 °C after additive treatment",
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options accepted by every subcommand
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Output format (defaults to the config file setting, then auto)
    #[arg(long, short = 'o', global = true)]
    pub output: Option<OutputFormat>,

    /// Config file to use instead of the platform default
    #[arg(long, global = true, env = "VISCALC_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalOpts {
    /// Output format from the command line, falling back to the config file
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        if let Some(format) = self.output {
            return format;
        }
        match config.output.as_deref() {
            Some(name) => OutputFormat::from_str(name, true).unwrap_or_else(|_| {
                warn!(output = name, "unknown output format in config, using auto");
                OutputFormat::Auto
            }),
            None => OutputFormat::Auto,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pick the natural format for the command
    Auto,
    /// Human-readable text or table
    Pretty,
    Json,
    Yaml,
    Csv,
    Tsv,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the viscosity after treatment and check conformance
    Calc(CalcArgs),

    /// List the registered viscosity models
    Models(ModelsArgs),

    /// List the ISO grades offered for a product
    Grades(GradesArgs),

    /// Show the nominal conformance range for a product and grade
    Range(RangeArgs),

    /// Run calculations for every row of a CSV file
    Batch(BatchArgs),

    /// Inspect the configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
