//! Product catalog index
//!
//! This module provides the `ProductCatalog` struct, a read-only lookup from
//! sku to product card built once per analysis.

use crate::types::Product;
use std::collections::HashMap;
use tracing::warn;

/// Lookup from sku to product
///
/// Skus are expected to be unique. If a sku appears more than once, the last
/// card wins and a warning is logged.
#[derive(Debug, Default)]
pub struct ProductCatalog<'a> {
    products: HashMap<&'a str, &'a Product>,
}

impl<'a> ProductCatalog<'a> {
    /// Index a slice of product cards by sku
    pub fn build(products: &'a [Product]) -> Self {
        let mut index = HashMap::with_capacity(products.len());

        for product in products {
            if index.insert(product.sku.as_str(), product).is_some() {
                warn!(sku = %product.sku, "duplicate sku in product list, keeping the last card");
            }
        }

        ProductCatalog { products: index }
    }

    /// Look up a product by sku
    pub fn get(&self, sku: &str) -> Option<&'a Product> {
        self.products.get(sku).copied()
    }

    /// Number of distinct skus
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Whether the sku is known
    pub fn contains(&self, sku: &str) -> bool {
        self.products.contains_key(sku)
    }
}
