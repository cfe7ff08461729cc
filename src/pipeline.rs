//! File-to-report pipeline
//!
//! Orchestrates a complete run: read the dataset, analyze it, and write the
//! reports in the requested format. Used by the binary and by the end-to-end
//! tests.

use crate::cli::ReportFormat;
use crate::core::SalesAggregator;
use crate::io::{read_dataset, write_reports_csv, write_reports_json};
use crate::strategy::AnalysisOptions;
use crate::types::SalesError;
use std::io::Write;
use std::path::Path;

/// Analyze the dataset at `input_path` and write reports to `output`
///
/// Returns the number of reports written.
///
/// # Errors
///
/// Returns an error if the dataset cannot be read, fails validation, or the
/// reports cannot be written. Nothing is written to `output` unless the
/// analysis succeeded.
pub fn process_file(
    input_path: &Path,
    options: &AnalysisOptions,
    format: ReportFormat,
    output: &mut dyn Write,
) -> Result<usize, SalesError> {
    let dataset = read_dataset(input_path)?;
    let reports = SalesAggregator::new(*options).analyze(&dataset)?;

    match format {
        ReportFormat::Csv => write_reports_csv(&reports, output)?,
        ReportFormat::Json => write_reports_json(&reports, output)?,
    }

    Ok(reports.len())
}
