//! Output formatting utilities

use std::io::Write;

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::helpers::round_to;
use crate::cli::OutputFormat;
use crate::entities::{CalcState, Estimate};

/// Determine the effective output format, resolving `Auto` to the
/// command's natural format
pub fn effective_format(format: OutputFormat, natural: OutputFormat) -> OutputFormat {
    match format {
        OutputFormat::Auto => natural,
        other => other,
    }
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{}", json);
    Ok(())
}

/// Print a value as YAML
pub fn print_yaml<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let yaml = serde_yml::to_string(value).into_diagnostic()?;
    print!("{}", yaml);
    Ok(())
}

/// Write rows as CSV (or TSV when `delimiter` is a tab) with a header line
pub fn write_delimited<T: Serialize, W: Write>(rows: &[T], delimiter: u8, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);
    for row in rows {
        writer.serialize(row).into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;
    Ok(())
}

/// Write rows to stdout in CSV or TSV; other formats are not delimited
pub fn print_delimited<T: Serialize>(rows: &[T], format: OutputFormat) -> Result<()> {
    let delimiter = if format == OutputFormat::Tsv { b'\t' } else { b',' };
    write_delimited(rows, delimiter, std::io::stdout().lock())
}

/// One flat result line, shared by `calc` and `batch` delimited output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub product: String,
    pub grade: String,
    pub initial_viscosity: String,
    pub treat_rate: String,
    pub state: CalcState,
    /// Estimate rounded to the display precision
    pub estimate_cst: Option<f64>,
    pub within_range: Option<bool>,
    pub model: Option<String>,
    pub range_min: Option<f64>,
    /// Empty when the range is unbounded
    pub range_max: Option<f64>,
    pub errors: String,
}

impl ResultRow {
    pub fn new(
        product: impl Into<String>,
        grade: impl Into<String>,
        initial_viscosity: &str,
        treat_rate: &str,
        estimate: &Estimate,
        precision: usize,
    ) -> Self {
        Self {
            product: product.into(),
            grade: grade.into(),
            initial_viscosity: initial_viscosity.trim().to_string(),
            treat_rate: treat_rate.trim().to_string(),
            state: estimate.state,
            estimate_cst: estimate
                .estimated_viscosity
                .map(|v| round_to(v, precision)),
            within_range: estimate.within_range,
            model: estimate.model_label.clone(),
            range_min: estimate.range.map(|r| r.min),
            range_max: estimate.range.map(|r| r.max).filter(|m| m.is_finite()),
            errors: estimate.errors.join("; "),
        }
    }
}
