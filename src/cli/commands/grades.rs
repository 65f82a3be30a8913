//! `viscalc grades` command - Grades offered for a product

use console::style;
use miette::Result;
use serde::Serialize;

use crate::cli::output::{effective_format, print_delimited, print_json, print_yaml};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{reconcile, Config};
use crate::entities::{IsoGrade, Product};

#[derive(clap::Args, Debug)]
pub struct GradesArgs {
    /// Product family
    pub product: Product,

    /// Currently selected grade; prints the grade to use with this product
    #[arg(long, short = 'c')]
    pub current: Option<IsoGrade>,
}

#[derive(Debug, Serialize)]
struct GradesReport {
    product: Product,
    grades: &'static [IsoGrade],
    default: IsoGrade,
    #[serde(skip_serializing_if = "Option::is_none")]
    reconciled: Option<IsoGrade>,
}

#[derive(Debug, Serialize)]
struct GradeRow {
    product: &'static str,
    grade: u16,
    default: bool,
}

pub fn run(args: GradesArgs, global: &GlobalOpts, config: &Config) -> Result<()> {
    let product = args.product;
    let reconciled = args.current.map(|current| reconcile(product, current));
    let report = GradesReport {
        product,
        grades: product.allowed_grades(),
        default: product.default_grade(),
        reconciled,
    };

    let format = effective_format(global.output_format(config), OutputFormat::Pretty);
    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Yaml => print_yaml(&report)?,
        OutputFormat::Csv | OutputFormat::Tsv => {
            let rows: Vec<GradeRow> = report
                .grades
                .iter()
                .map(|g| GradeRow {
                    product: product.name(),
                    grade: g.value(),
                    default: *g == report.default,
                })
                .collect();
            print_delimited(&rows, format)?;
        }
        OutputFormat::Auto | OutputFormat::Pretty => match (args.current, reconciled) {
            (Some(current), Some(grade)) => {
                println!("{}", grade);
                if current != grade {
                    eprintln!(
                        "{} {} is not offered in ISO {}; default is ISO {}",
                        style("!").yellow().for_stderr(),
                        product,
                        current,
                        grade
                    );
                }
            }
            _ => {
                println!("{}:", style(product.name()).bold());
                for grade in report.grades {
                    if *grade == report.default {
                        println!("  ISO {} {}", grade, style("(default)").dim());
                    } else {
                        println!("  ISO {}", grade);
                    }
                }
            }
        },
    }
    Ok(())
}
