//! Error types for the seller analytics library
//!
//! This module defines all error types that can occur while loading a sales
//! dataset, analyzing it, or writing the resulting reports.
//!
//! # Error Categories
//!
//! - **Input Errors**: Empty or missing collections, malformed analysis options
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Parse Errors**: Malformed JSON datasets, CSV write failures
//!
//! Dangling references inside a dataset (a purchase record naming an unknown
//! seller, an item naming an unknown sku) are not errors. The aggregator skips
//! them and keeps going.

use thiserror::Error;

/// Main error type for the seller analytics library
///
/// The analysis core only ever returns [`SalesError::InvalidInput`], either
/// before any record is processed or when a money total no longer fits in a
/// `Decimal`. No partial report is produced in either case. The remaining
/// variants come from the I/O layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SalesError {
    /// The dataset or the analysis options are not usable
    ///
    /// Raised when sellers, products or purchase records are missing or empty,
    /// or when an option carries a value the aggregator cannot work with.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of what is wrong with the input
        reason: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The dataset could not be parsed, or a report could not be encoded
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for SalesError {
    fn from(error: std::io::Error) -> Self {
        SalesError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for SalesError {
    fn from(error: serde_json::Error) -> Self {
        // serde_json reports line 0 for errors that have no position
        let line = match error.line() {
            0 => None,
            line => Some(line as u64),
        };

        SalesError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for SalesError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        SalesError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl SalesError {
    /// Create an InvalidInput error for a missing or empty collection
    pub fn empty_collection(collection: &str) -> Self {
        SalesError::InvalidInput {
            reason: format!("'{}' must be a non-empty list", collection),
        }
    }

    /// Create an InvalidInput error for a malformed analysis option
    pub fn invalid_option(option: &str, detail: &str) -> Self {
        SalesError::InvalidInput {
            reason: format!("option '{}' {}", option, detail),
        }
    }

    /// Create an InvalidInput error for a money computation that overflowed
    pub fn arithmetic_overflow(operation: &str, seller_id: &str) -> Self {
        SalesError::InvalidInput {
            reason: format!(
                "arithmetic overflow in {} for seller {}",
                operation, seller_id
            ),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        SalesError::FileNotFound {
            path: path.to_string(),
        }
    }
}
