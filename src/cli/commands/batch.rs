//! `viscalc batch` command - Calculate every row of a CSV file
//!
//! Input columns: `product,grade,initial_viscosity,treat_rate`. Rows are
//! computed as given; a grade the product does not offer is reported as
//! `unmapped` rather than corrected.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::cli::helpers::display_precision;
use crate::cli::output::{effective_format, print_delimited, print_json, print_yaml, ResultRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{compute, Config};
use crate::entities::{CalcState, Estimate, IsoGrade, Product};

#[derive(clap::Args, Debug)]
pub struct BatchArgs {
    /// CSV file to read, or `-` for stdin
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Decimal places for the reported estimates
    #[arg(long)]
    pub precision: Option<usize>,
}

/// One input record; measurement columns may be left blank
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRecord {
    pub product: String,
    pub grade: String,
    #[serde(default)]
    pub initial_viscosity: String,
    #[serde(default)]
    pub treat_rate: String,
}

/// Compute one record. Unknown product or grade text yields an `invalid`
/// row with the parse error as its message.
pub fn process_record(record: &BatchRecord, precision: usize) -> ResultRow {
    let selection = record
        .product
        .parse::<Product>()
        .map_err(|e| e.to_string())
        .and_then(|product| {
            record
                .grade
                .parse::<IsoGrade>()
                .map(|grade| (product, grade))
                .map_err(|e| e.to_string())
        });

    match selection {
        Ok((product, grade)) => {
            let estimate = compute(
                product,
                grade,
                &record.initial_viscosity,
                &record.treat_rate,
            );
            ResultRow::new(
                product.name(),
                grade.to_string(),
                &record.initial_viscosity,
                &record.treat_rate,
                &estimate,
                precision,
            )
        }
        Err(message) => {
            let mut estimate = Estimate::empty(CalcState::Invalid);
            estimate.errors.push(message);
            ResultRow::new(
                record.product.trim(),
                record.grade.trim(),
                &record.initial_viscosity,
                &record.treat_rate,
                &estimate,
                precision,
            )
        }
    }
}

/// Read every record from CSV text and compute it
pub fn process_csv<R: Read>(input: R, precision: usize) -> Result<Vec<ResultRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<BatchRecord>().enumerate() {
        // header is line 1
        let line = index + 2;
        let record =
            record.map_err(|e| miette::miette!("Invalid CSV record at line {}: {}", line, e))?;
        let row = process_record(&record, precision);
        debug!(line, state = %row.state, "row processed");
        rows.push(row);
    }
    Ok(rows)
}

pub fn run(args: BatchArgs, global: &GlobalOpts, config: &Config) -> Result<()> {
    let precision = display_precision(args.precision, config)?;

    let input: Box<dyn Read> = if args.input.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        Box::new(File::open(&args.input).map_err(|e| {
            miette::miette!("Cannot open {}: {}", args.input.display(), e)
        })?)
    };

    let rows = process_csv(input, precision)?;
    let computed = rows
        .iter()
        .filter(|r| r.state == CalcState::Computed)
        .count();
    info!(
        input = %args.input.display(),
        rows = rows.len(),
        computed,
        "batch finished"
    );

    let format = effective_format(global.output_format(config), OutputFormat::Csv);
    match format {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Yaml => print_yaml(&rows)?,
        OutputFormat::Tsv => print_delimited(&rows, format)?,
        OutputFormat::Csv | OutputFormat::Auto | OutputFormat::Pretty => {
            print_delimited(&rows, OutputFormat::Csv)?
        }
    }
    io::Write::flush(&mut io::stdout()).into_diagnostic()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
product,grade,initial_viscosity,treat_rate
decon-hd,220,200,10
Decon (APAC),32,30,0
D_A,68,70,5
decon-hd,46,45,10
decon,46,,10
decon,46,45,150
Decon B,46,45,10
";

    #[test]
    fn test_process_csv_states() {
        let rows = process_csv(INPUT.as_bytes(), 1).unwrap();
        let states: Vec<CalcState> = rows.iter().map(|r| r.state).collect();
        assert_eq!(
            states,
            vec![
                CalcState::Computed,
                CalcState::Computed,
                CalcState::Computed,
                CalcState::Unmapped,
                CalcState::Incomplete,
                CalcState::Invalid,
                CalcState::Invalid,
            ]
        );
    }

    #[test]
    fn test_process_csv_values() {
        let rows = process_csv(INPUT.as_bytes(), 1).unwrap();
        assert_eq!(rows[0].estimate_cst, Some(195.6));
        assert_eq!(rows[0].within_range, Some(false));
        assert_eq!(rows[1].estimate_cst, Some(30.0));
        assert_eq!(rows[1].within_range, Some(true));
        assert_eq!(rows[2].estimate_cst, Some(61.5));
        assert_eq!(rows[2].product, "Decon A");
        assert_eq!(rows[5].errors, "Treat rate must be 0–100%.");
        assert!(rows[6].errors.contains("Unknown product"));
        assert_eq!(rows[6].product, "Decon B");
    }

    #[test]
    fn test_missing_measurement_columns_are_incomplete() {
        let input = "product,grade\ndecon,46\n";
        let rows = process_csv(input.as_bytes(), 1).unwrap();
        assert_eq!(rows[0].state, CalcState::Incomplete);
        assert_eq!(rows[0].errors, "");
    }

    #[test]
    fn test_missing_grade_column_is_an_error() {
        let input = "product,initial_viscosity\ndecon,46\n";
        assert!(process_csv(input.as_bytes(), 1).is_err());
    }
}
