//! `viscalc range` command - Resolve a nominal conformance range

use console::style;
use miette::Result;
use serde::Serialize;

use crate::cli::helpers::format_range;
use crate::cli::output::{effective_format, print_delimited, print_json, print_yaml};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{resolve_range, Config, RangeSource};
use crate::entities::{IsoGrade, Product};

#[derive(clap::Args, Debug)]
pub struct RangeArgs {
    /// Product family
    pub product: Product,

    /// ISO VG grade
    pub grade: IsoGrade,
}

#[derive(Debug, Serialize)]
struct RangeReport {
    product: Product,
    grade: IsoGrade,
    min: f64,
    /// None when unbounded
    max: Option<f64>,
    source: RangeSource,
}

pub fn run(args: RangeArgs, global: &GlobalOpts, config: &Config) -> Result<()> {
    let (range, source) = resolve_range(args.product, args.grade);
    let report = RangeReport {
        product: args.product,
        grade: args.grade,
        min: range.min,
        max: range.is_bounded().then_some(range.max),
        source,
    };

    let format = effective_format(global.output_format(config), OutputFormat::Pretty);
    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Yaml => print_yaml(&report)?,
        OutputFormat::Csv | OutputFormat::Tsv => print_delimited(&[report], format)?,
        OutputFormat::Auto | OutputFormat::Pretty => {
            println!(
                "{} · ISO {}: {} {}",
                args.product,
                args.grade,
                style(format_range(&range)).bold(),
                style(format!("({})", source)).dim()
            );
            if !args.product.allows(args.grade) {
                eprintln!(
                    "{} {} is not offered in ISO {}",
                    style("!").yellow().for_stderr(),
                    args.product,
                    args.grade
                );
            }
        }
    }
    Ok(())
}
