//! `viscalc calc` command - Estimate treated viscosity for one selection

use console::style;
use miette::Result;
use tracing::{debug, info};

use crate::cli::helpers::{display_precision, format_cst, format_range};
use crate::cli::output::{effective_format, print_delimited, print_json, print_yaml, ResultRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{compute, reconcile, Config, Verdict};
use crate::entities::{CalcState, Estimate, IsoGrade, Product};

#[derive(clap::Args, Debug)]
pub struct CalcArgs {
    /// Product family (decon-hd, decon-apac, decon-a, decon)
    #[arg(long, short = 'p')]
    pub product: Option<Product>,

    /// ISO VG grade; replaced by the product's default if not offered
    #[arg(long, short = 'g')]
    pub grade: Option<IsoGrade>,

    /// Measured initial viscosity at 40 °C (cSt)
    #[arg(long, short = 'i', default_value = "", allow_hyphen_values = true)]
    pub initial: String,

    /// Treat rate in percent (0-100)
    #[arg(long, short = 't', default_value = "", allow_hyphen_values = true)]
    pub treat_rate: String,

    /// Decimal places for the displayed estimate
    #[arg(long)]
    pub precision: Option<usize>,
}

/// Resolved (product, grade) selection for a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub product: Product,
    pub grade: IsoGrade,
    /// Grade the user asked for when it had to be replaced
    pub replaced: Option<IsoGrade>,
}

/// Resolve the selection from flags and config, reconciling the grade
pub fn resolve_selection(
    product: Option<Product>,
    grade: Option<IsoGrade>,
    config: &Config,
) -> Selection {
    let product = product.or(config.product).unwrap_or(Product::DeconHd);
    let Some(requested) = grade.or(config.grade) else {
        return Selection {
            product,
            grade: product.default_grade(),
            replaced: None,
        };
    };
    let grade = reconcile(product, requested);
    Selection {
        product,
        grade,
        replaced: (grade != requested).then_some(requested),
    }
}

pub fn run(args: CalcArgs, global: &GlobalOpts, config: &Config) -> Result<()> {
    let precision = display_precision(args.precision, config)?;
    let selection = resolve_selection(args.product, args.grade, config);

    if let (Some(requested), Some(_)) = (selection.replaced, args.grade) {
        eprintln!(
            "{} {} is not offered in ISO {}; using ISO {}",
            style("!").yellow().for_stderr(),
            selection.product,
            requested,
            selection.grade
        );
    }
    debug!(product = %selection.product, grade = %selection.grade, "selection");

    let estimate = compute(
        selection.product,
        selection.grade,
        &args.initial,
        &args.treat_rate,
    );
    info!(
        state = %estimate.state,
        computed = estimate.is_computed(),
        "calculation finished"
    );

    let format = effective_format(global.output_format(config), OutputFormat::Pretty);
    match format {
        OutputFormat::Json => print_json(&estimate)?,
        OutputFormat::Yaml => print_yaml(&estimate)?,
        OutputFormat::Csv | OutputFormat::Tsv => {
            let row = ResultRow::new(
                selection.product.name(),
                selection.grade.to_string(),
                &args.initial,
                &args.treat_rate,
                &estimate,
                precision,
            );
            print_delimited(&[row], format)?;
        }
        OutputFormat::Auto | OutputFormat::Pretty => {
            print_pretty(&selection, &estimate, precision);
        }
    }

    if estimate.state == CalcState::Invalid {
        for error in &estimate.errors {
            eprintln!("{} {}", style("✗").red().for_stderr(), error);
        }
        return Err(miette::miette!(
            "{} input error(s); no estimate calculated",
            estimate.errors.len()
        ));
    }
    Ok(())
}

fn print_pretty(selection: &Selection, estimate: &Estimate, precision: usize) {
    println!("{}", style("─".repeat(50)).dim());
    match (&estimate.model_label, &estimate.range) {
        (Some(label), Some(range)) => {
            println!(
                "{}: {} (range {})",
                style("Model").bold(),
                style(label).cyan(),
                format_range(range)
            );
        }
        _ => {
            println!(
                "{}: none for {} · ISO {}",
                style("Model").bold(),
                selection.product,
                selection.grade
            );
        }
    }
    println!("{}", style("─".repeat(50)).dim());

    match estimate.state {
        CalcState::Computed => {
            if let Some(value) = estimate.estimated_viscosity {
                println!(
                    "Resulting viscosity at 40 °C: {}",
                    style(format_cst(value, precision)).bold()
                );
            }
            if let Some(within) = estimate.within_range {
                let verdict = Verdict::from_within(within);
                match verdict {
                    Verdict::Within => println!("{} {}", style("✓").green(), verdict),
                    Verdict::Outside => println!("{} {}", style("⚠").yellow(), verdict),
                }
            }
        }
        CalcState::Incomplete => {
            println!("{}", style("Enter values to calculate").dim());
        }
        CalcState::Unmapped => {
            println!(
                "{}",
                style("No viscosity model is registered for this selection").dim()
            );
        }
        CalcState::Invalid => {
            println!("{}", style("No estimate: fix the input errors").dim());
        }
    }
}
