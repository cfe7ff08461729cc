//! Core business logic module
//!
//! This module contains the sales analysis components:
//! - `catalog` - sku → product lookup
//! - `seller_ledger` - per-seller accumulators in seller input order
//! - `ranking` - profit ranking, top products and money rounding
//! - `aggregator` - validation and orchestration of the analysis

pub mod aggregator;
pub mod catalog;
pub mod ranking;
pub mod seller_ledger;

pub use aggregator::{analyze_sales_data, AccumulationSummary, SalesAggregator};
pub use catalog::ProductCatalog;
pub use seller_ledger::SellerLedger;
