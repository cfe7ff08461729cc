//! Report types produced by the aggregator

use super::product::Sku;
use super::seller::SellerId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Units sold of one sku by one seller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSales {
    pub sku: Sku,
    pub quantity: u64,
}

/// Performance summary for one seller with at least one sale
///
/// Money fields are rounded to two decimal places. Reports are emitted in
/// ranked order, highest unrounded profit first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: SellerId,

    /// "first_name last_name"
    pub name: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,

    pub sales_count: usize,

    /// Best-selling products by units, at most the configured limit
    pub top_products: Vec<ProductSales>,

    #[serde(with = "rust_decimal::serde::float")]
    pub bonus: Decimal,
}
