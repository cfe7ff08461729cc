//! Purchase-related types
//!
//! This module defines purchase records, their line items, and the dataset
//! container that bundles sellers, products and purchase records together.

use super::product::{Product, Sku};
use super::seller::{Seller, SellerId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of a purchase record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Product sold on this line
    pub sku: Sku,

    /// Unit price before discount
    #[serde(with = "rust_decimal::serde::float")]
    pub sale_price: Decimal,

    /// Units sold
    pub quantity: u32,

    /// Discount percentage (0-100); absent means no discount
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub discount: Option<Decimal>,
}

impl Item {
    /// Create an item without discount
    pub fn new(sku: impl Into<Sku>, sale_price: Decimal, quantity: u32) -> Self {
        Item {
            sku: sku.into(),
            sale_price,
            quantity,
            discount: None,
        }
    }

    /// Set the discount percentage
    pub fn with_discount(mut self, discount: Decimal) -> Self {
        self.discount = Some(discount);
        self
    }

    /// Discount percentage, zero when absent
    pub fn discount_pct(&self) -> Decimal {
        self.discount.unwrap_or(Decimal::ZERO)
    }
}

/// A single purchase (receipt) attributed to a seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Seller credited with the purchase
    pub seller_id: SellerId,

    /// Amount charged for the whole receipt
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,

    /// Line items in receipt order
    #[serde(default)]
    pub items: Vec<Item>,
}

impl PurchaseRecord {
    /// Create a purchase record
    pub fn new(seller_id: impl Into<SellerId>, total_amount: Decimal, items: Vec<Item>) -> Self {
        PurchaseRecord {
            seller_id: seller_id.into(),
            total_amount,
            items,
        }
    }
}

/// The three input collections the aggregator works on
///
/// Missing collections deserialize as empty and are rejected later by the
/// aggregator's validation, so "absent" and "empty" behave the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesDataset {
    /// Seller cards, unique by id
    #[serde(default)]
    pub sellers: Vec<Seller>,

    /// Product cards, unique by sku
    #[serde(default)]
    pub products: Vec<Product>,

    /// Purchase records in processing order
    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}
