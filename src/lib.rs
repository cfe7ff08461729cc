//! Seller Analytics Library
//! # Overview
//!
//! This library computes per-seller sales performance metrics (revenue, profit,
//! bonus and top products) from sellers, a product catalog and purchase records.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Seller, Product, PurchaseRecord, SellerReport, etc.)
//! - [`strategy`] - Pluggable revenue, profit and bonus calculators
//! - [`core`] - Business logic components:
//!   - [`core::catalog`] - sku → product lookup
//!   - [`core::seller_ledger`] - Per-seller running totals
//!   - [`core::ranking`] - Profit ranking, top products, rounding
//!   - [`core::aggregator`] - Validation and orchestration
//! - [`io`] - JSON dataset loading and CSV/JSON report output
//! - [`pipeline`] - File-to-report orchestration
//! - [`cli`] - CLI arguments parsing
//!
//! # Analysis
//!
//! 1. Validate that sellers, products and purchase records are all non-empty
//! 2. Index products by sku and sellers by id
//! 3. Walk purchase records once, crediting revenue, sales count, item profit
//!    and units sold to the record's seller. Unknown sellers and skus are skipped
//! 4. Rank sellers with at least one sale by profit, highest first
//! 5. Assign bonus tiers by rank and build the reports
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use seller_analytics::{
//!     analyze_sales_data, AnalysisOptions, Item, Product, PurchaseRecord, SalesDataset, Seller,
//! };
//!
//! let dataset = SalesDataset {
//!     sellers: vec![Seller::new("s1", "A", "B")],
//!     products: vec![Product::new("p1", dec!(5))],
//!     purchase_records: vec![PurchaseRecord::new(
//!         "s1",
//!         dec!(100),
//!         vec![Item::new("p1", dec!(20), 5)],
//!     )],
//! };
//!
//! let reports = analyze_sales_data(&dataset, &AnalysisOptions::default()).unwrap();
//! assert_eq!(reports[0].profit, dec!(75));
//! assert_eq!(reports[0].bonus, dec!(11.25));
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod strategy;
pub mod types;

pub use self::core::{analyze_sales_data, SalesAggregator};
pub use io::{read_dataset, write_reports_csv, write_reports_json};
pub use strategy::AnalysisOptions;
pub use types::{
    Item, Product, ProductSales, PurchaseRecord, SalesDataset, SalesError, Seller,
    SellerAccumulator, SellerReport,
};
