//! Calculation strategy module
//!
//! This module defines the pluggable calculators the aggregator is built from,
//! and the `AnalysisOptions` structure that selects them. Each calculator is a
//! plain function pointer with a fixed signature, so callers can swap any of
//! them without touching the aggregation pass itself.
//!
//! Money calculators return `None` when the computation overflows; the
//! aggregator turns that into `SalesError::InvalidInput`.
//!
//! # Calculators
//!
//! - [`RevenueCalculator`] - revenue credited to a seller for one purchase record
//! - [`ProfitCalculator`] - profit of one line item given its product card
//! - [`BonusCalculator`] - bonus rate for a seller given its rank
//!
//! The built-in implementations live in [`defaults`].

pub mod defaults;

use crate::core::catalog::ProductCatalog;
use crate::types::{Item, Product, PurchaseRecord, SalesError, SellerAccumulator};
use rust_decimal::Decimal;

pub use defaults::{
    bonus_by_profit, catalog_item_revenue, discounted_line_profit, record_total_revenue,
};

/// Revenue credited to the seller for one matched purchase record
///
/// The catalog lets item-based strategies skip lines with unknown skus.
pub type RevenueCalculator = fn(&PurchaseRecord, &ProductCatalog<'_>) -> Option<Decimal>;

/// Profit of one line item whose sku matched a product
pub type ProfitCalculator = fn(&Item, &Product) -> Option<Decimal>;

/// Bonus rate (fraction of profit) for the seller at `rank` out of `total`
///
/// `rank` is 0-based in the profit-ordered list of sellers with sales.
pub type BonusCalculator = fn(rank: usize, total: usize, seller: &SellerAccumulator) -> Decimal;

/// Default number of entries in a report's `top_products`
pub const DEFAULT_TOP_PRODUCTS_LIMIT: usize = 10;

/// Options controlling a sales analysis
///
/// `AnalysisOptions::default()` selects the built-in calculators and a
/// top-products limit of 10.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    /// Revenue strategy
    pub revenue: RevenueCalculator,

    /// Per-item profit strategy
    pub profit: ProfitCalculator,

    /// Bonus strategy
    pub bonus: BonusCalculator,

    /// Maximum number of entries in `top_products` (must be > 0)
    pub top_products_limit: usize,
}

impl AnalysisOptions {
    /// Replace the revenue strategy
    pub fn with_revenue(mut self, revenue: RevenueCalculator) -> Self {
        self.revenue = revenue;
        self
    }

    /// Replace the per-item profit strategy
    pub fn with_profit(mut self, profit: ProfitCalculator) -> Self {
        self.profit = profit;
        self
    }

    /// Replace the bonus strategy
    pub fn with_bonus(mut self, bonus: BonusCalculator) -> Self {
        self.bonus = bonus;
        self
    }

    /// Replace the top-products limit
    pub fn with_top_products_limit(mut self, limit: usize) -> Self {
        self.top_products_limit = limit;
        self
    }

    /// Check that the options can drive an analysis
    ///
    /// # Errors
    ///
    /// Returns `SalesError::InvalidInput` if `top_products_limit` is zero.
    pub fn validate(&self) -> Result<(), SalesError> {
        if self.top_products_limit == 0 {
            return Err(SalesError::invalid_option(
                "top_products_limit",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            revenue: record_total_revenue,
            profit: discounted_line_profit,
            bonus: bonus_by_profit,
            top_products_limit: DEFAULT_TOP_PRODUCTS_LIMIT,
        }
    }
}
