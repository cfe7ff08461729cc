//! JSON dataset reader
//!
//! Loads a `SalesDataset` from a JSON document of the form:
//!
//! ```json
//! {
//!   "sellers": [{ "id": "seller_1", "first_name": "Anna", "last_name": "Ivanova" }],
//!   "products": [{ "sku": "SKU_001", "purchase_price": 12.5 }],
//!   "purchase_records": [{
//!     "seller_id": "seller_1",
//!     "total_amount": 40.0,
//!     "items": [{ "sku": "SKU_001", "sale_price": 20.0, "quantity": 2, "discount": 0 }]
//!   }]
//! }
//! ```
//!
//! # Error Handling
//!
//! - A missing file is reported as `SalesError::FileNotFound`
//! - Other open/read failures are `SalesError::IoError`
//! - Malformed JSON is `SalesError::ParseError` with the offending line
//!
//! The reader does not validate content. Missing collections come back empty
//! and are rejected by the aggregator.

use crate::types::{SalesDataset, SalesError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read a dataset from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a valid dataset.
pub fn read_dataset(path: &Path) -> Result<SalesDataset, SalesError> {
    let json = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SalesError::file_not_found(&path.display().to_string()),
        _ => SalesError::from(e),
    })?;

    let dataset = parse_dataset(&json)?;

    debug!(
        path = %path.display(),
        sellers = dataset.sellers.len(),
        products = dataset.products.len(),
        purchase_records = dataset.purchase_records.len(),
        "dataset loaded"
    );

    Ok(dataset)
}

/// Parse a dataset from a JSON string
pub fn parse_dataset(json: &str) -> Result<SalesDataset, SalesError> {
    Ok(serde_json::from_str(json)?)
}
