//! `viscalc config` command - Inspect the effective configuration

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::output::{effective_format, print_json, print_yaml};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,
}

pub fn run(cmd: ConfigCommands, global: &GlobalOpts, config: &Config) -> Result<()> {
    match cmd {
        ConfigCommands::Show => run_show(global, config),
        ConfigCommands::Path => run_path(global),
    }
}

fn run_show(global: &GlobalOpts, config: &Config) -> Result<()> {
    match effective_format(global.output_format(config), OutputFormat::Yaml) {
        OutputFormat::Json => print_json(config),
        OutputFormat::Csv | OutputFormat::Tsv => Err(miette::miette!(
            "config cannot be shown as a table; use yaml or json"
        )),
        _ => print_yaml(config),
    }
}

fn run_path(global: &GlobalOpts) -> Result<()> {
    let path = match &global.config {
        Some(path) => Some(path.clone()),
        None => Config::default_path(),
    };
    let Some(path) = path else {
        return Err(miette::miette!(
            "No config directory could be determined for this platform"
        ));
    };

    if path.is_file() {
        println!("{}", path.display());
    } else {
        println!("{} {}", path.display(), style("(not found)").dim());
    }
    Ok(())
}
