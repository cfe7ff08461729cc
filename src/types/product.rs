//! Product catalog types
//!
//! Products carry the cost basis used when computing per-line profit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stock-keeping unit, the unique product identifier
pub type Sku = String;

/// A product card from the catalog
///
/// Only `sku` and `purchase_price` take part in the analysis. Other fields the
/// catalog may carry (category, retail price, ...) are ignored on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub sku: Sku,

    /// Cost basis of a single unit (non-negative)
    #[serde(default, with = "rust_decimal::serde::float")]
    pub purchase_price: Decimal,

    /// Human-readable product name, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Product {
    /// Create a product with the given sku and cost basis
    pub fn new(sku: impl Into<Sku>, purchase_price: Decimal) -> Self {
        Product {
            sku: sku.into(),
            purchase_price,
            name: None,
        }
    }
}
