//! I/O module
//!
//! Handles dataset loading and report output.
//!
//! # Components
//!
//! - `dataset_reader` - JSON dataset loading
//! - `report_format` - Report serialization (CSV and JSON)

pub mod dataset_reader;
pub mod report_format;

pub use dataset_reader::{parse_dataset, read_dataset};
pub use report_format::{format_top_products, write_reports_csv, write_reports_json};
