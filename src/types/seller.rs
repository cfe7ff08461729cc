//! Seller-related types
//!
//! This module defines the Seller card as found in the input dataset and the
//! SellerAccumulator that carries a seller's running totals during analysis.

use super::product::Sku;
use super::report::ProductSales;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Seller identifier
pub type SellerId = String;

/// A seller card from the input dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// Unique seller identifier
    pub id: SellerId,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,
}

impl Seller {
    /// Create a seller card
    pub fn new(
        id: impl Into<SellerId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Seller {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display name used in reports: "first_name last_name"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Running totals for one seller
///
/// Created zeroed for every seller when the aggregator indexes its input and
/// mutated only during the single accumulation pass. Ranking and reporting
/// read it but never change it.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerAccumulator {
    /// The seller these totals belong to
    pub seller: Seller,

    /// Sum of the revenue strategy over every matched purchase record
    pub revenue: Decimal,

    /// Sum of the profit strategy over every matched item
    pub profit: Decimal,

    /// Number of matched purchase records
    pub sales_count: usize,

    /// Units sold per sku, in the order each sku was first seen
    products_sold: Vec<ProductSales>,

    /// Position of each sku inside `products_sold`
    product_positions: HashMap<Sku, usize>,
}

impl SellerAccumulator {
    /// Create an accumulator with zero revenue, profit and sales
    pub fn new(seller: Seller) -> Self {
        SellerAccumulator {
            seller,
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: Vec::new(),
            product_positions: HashMap::new(),
        }
    }

    /// Add `quantity` units of `sku` to the sold-quantity tally
    pub fn record_units(&mut self, sku: &str, quantity: u32) {
        match self.product_positions.get(sku).copied() {
            Some(position) => self.products_sold[position].quantity += u64::from(quantity),
            None => {
                self.product_positions
                    .insert(sku.to_string(), self.products_sold.len());
                self.products_sold.push(ProductSales {
                    sku: sku.to_string(),
                    quantity: u64::from(quantity),
                });
            }
        }
    }

    /// Units sold per sku, in first-seen order
    pub fn products_sold(&self) -> &[ProductSales] {
        &self.products_sold
    }
}
