//! Types module
//!
//! Contains core data structures used throughout the library.
//! This module organizes types into logical submodules:
//! - `product`: Product catalog types
//! - `seller`: Seller cards and per-seller accumulators
//! - `purchase`: Purchase records, line items and the input dataset
//! - `report`: Per-seller output reports
//! - `error`: Error types for the library

pub mod error;
pub mod product;
pub mod purchase;
pub mod report;
pub mod seller;

pub use error::SalesError;
pub use product::{Product, Sku};
pub use purchase::{Item, PurchaseRecord, SalesDataset};
pub use report::{ProductSales, SellerReport};
pub use seller::{Seller, SellerAccumulator, SellerId};
