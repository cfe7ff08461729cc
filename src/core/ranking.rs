//! Ranking, bonus and top-product helpers
//!
//! Everything here works on accumulators after the accumulation pass is
//! complete. Profit comparisons use unrounded values; rounding is applied only
//! when a report field is produced.

use crate::types::{ProductSales, SellerAccumulator};
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Reverse;

/// Decimal places kept in report money fields
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Round a money amount to 2 decimal places, half away from zero
///
/// `2.345` becomes `2.35` and `-2.345` becomes `-2.35`. Results that round
/// to zero are returned as positive zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount
        .round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Keep sellers with at least one sale, ordered by profit descending
///
/// The sort is stable: sellers with equal profit keep their input order.
pub fn rank_sellers(accumulators: Vec<SellerAccumulator>) -> Vec<SellerAccumulator> {
    let mut ranked: Vec<SellerAccumulator> = accumulators
        .into_iter()
        .filter(|acc| acc.sales_count > 0)
        .collect();
    ranked.sort_by_key(|acc| Reverse(acc.profit));
    ranked
}

/// Best-selling products of a seller by units sold
///
/// Sorted by quantity descending, ties in first-seen order, truncated to `limit`.
pub fn top_products(accumulator: &SellerAccumulator, limit: usize) -> Vec<ProductSales> {
    let mut products = accumulator.products_sold().to_vec();
    products.sort_by_key(|p| Reverse(p.quantity));
    products.truncate(limit);
    products
}
