use crate::strategy::{AnalysisOptions, DEFAULT_TOP_PRODUCTS_LIMIT};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Compute per-seller sales performance reports
#[derive(Parser, Debug)]
#[command(name = "seller-analytics")]
#[command(about = "Compute per-seller revenue, profit, bonus and top products", long_about = None)]
pub struct CliArgs {
    /// Input JSON file containing sellers, products and purchase records
    #[arg(value_name = "INPUT", help = "Path to the input JSON dataset")]
    pub input_file: PathBuf,

    /// Output format for the reports
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "csv",
        help = "Report format: 'csv' or 'json'"
    )]
    pub format: ReportFormat,

    /// Number of top products listed per seller
    #[arg(
        long = "top-products",
        value_name = "COUNT",
        help = "Number of top products per seller (default: 10)"
    )]
    pub top_products: Option<usize>,
}

/// Available report output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Csv,
    Json,
}

impl CliArgs {
    /// Build AnalysisOptions from CLI arguments
    ///
    /// The built-in calculators are always used. A missing or zero
    /// `--top-products` falls back to the default limit.
    pub fn to_options(&self) -> AnalysisOptions {
        let limit = match self.top_products {
            Some(0) | None => DEFAULT_TOP_PRODUCTS_LIMIT,
            Some(limit) => limit,
        };
        AnalysisOptions::default().with_top_products_limit(limit)
    }
}
