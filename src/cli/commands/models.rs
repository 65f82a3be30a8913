//! `viscalc models` command - List registered viscosity models

use miette::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::helpers::format_range;
use crate::cli::output::{effective_format, print_delimited, print_json, print_yaml};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{models, models_for_product, Config};
use crate::entities::{Model, Product};

#[derive(clap::Args, Debug)]
pub struct ModelsArgs {
    /// Only list models for this product
    #[arg(long, short = 'p')]
    pub product: Option<Product>,
}

/// Table/CSV row for one model
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct ModelRow {
    #[tabled(rename = "PRODUCT")]
    pub product: String,
    #[tabled(rename = "ISO VG")]
    pub grade: u16,
    #[tabled(rename = "MODEL")]
    pub label: String,
    #[tabled(rename = "POLYNOMIAL")]
    pub polynomial: String,
    #[tabled(rename = "RANGE")]
    pub range: String,
}

impl From<&Model> for ModelRow {
    fn from(model: &Model) -> Self {
        Self {
            product: model.product.name().to_string(),
            grade: model.grade.value(),
            label: model.label.clone(),
            polynomial: model.polynomial.to_string(),
            range: format_range(&model.range),
        }
    }
}

pub fn run(args: ModelsArgs, global: &GlobalOpts, config: &Config) -> Result<()> {
    let list = match args.product {
        Some(product) => models_for_product(product),
        None => models(),
    };

    let format = effective_format(global.output_format(config), OutputFormat::Pretty);
    match format {
        OutputFormat::Json => print_json(&list)?,
        OutputFormat::Yaml => print_yaml(&list)?,
        OutputFormat::Csv | OutputFormat::Tsv => {
            let rows: Vec<ModelRow> = list.iter().map(ModelRow::from).collect();
            print_delimited(&rows, format)?;
        }
        OutputFormat::Auto | OutputFormat::Pretty => {
            let rows: Vec<ModelRow> = list.iter().map(ModelRow::from).collect();
            let mut table = Table::new(rows);
            table.with(Style::sharp());
            println!("{}", table);
            println!("{} model(s); t = treat rate (%), v0 = initial viscosity (cSt)", list.len());
        }
    }
    Ok(())
}
