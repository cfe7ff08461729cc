//! Seller ledger module
//!
//! This module provides the `SellerLedger` struct which owns one
//! `SellerAccumulator` per seller for the duration of an analysis.
//!
//! The SellerLedger is responsible for:
//! - Creating a zeroed accumulator for every seller up front
//! - Resolving seller ids to accumulators during the accumulation pass
//! - Preserving seller input order, which ranking uses to break profit ties

use crate::types::{Seller, SellerAccumulator, SellerId};
use std::collections::HashMap;
use tracing::warn;

/// Per-seller accumulators in seller input order
///
/// Seller ids are expected to be unique. A repeated id replaces the earlier
/// seller card but keeps the position of its first occurrence.
#[derive(Debug, Default)]
pub struct SellerLedger {
    /// Accumulators in the order sellers first appeared
    accumulators: Vec<SellerAccumulator>,

    /// Map of seller ids to positions in `accumulators`
    positions: HashMap<SellerId, usize>,
}

impl SellerLedger {
    /// Create a ledger with a zeroed accumulator for each seller
    pub fn new(sellers: &[Seller]) -> Self {
        let mut ledger = SellerLedger {
            accumulators: Vec::with_capacity(sellers.len()),
            positions: HashMap::with_capacity(sellers.len()),
        };

        for seller in sellers {
            match ledger.positions.get(&seller.id).copied() {
                Some(position) => {
                    warn!(seller_id = %seller.id, "duplicate seller id, keeping the last card");
                    ledger.accumulators[position] = SellerAccumulator::new(seller.clone());
                }
                None => {
                    ledger
                        .positions
                        .insert(seller.id.clone(), ledger.accumulators.len());
                    ledger.accumulators.push(SellerAccumulator::new(seller.clone()));
                }
            }
        }

        ledger
    }

    /// Get the accumulator for a seller id, if the seller is known
    pub fn get_mut(&mut self, seller_id: &str) -> Option<&mut SellerAccumulator> {
        let position = *self.positions.get(seller_id)?;
        self.accumulators.get_mut(position)
    }

    /// Get the accumulator for a seller id without mutating it
    pub fn get(&self, seller_id: &str) -> Option<&SellerAccumulator> {
        let position = *self.positions.get(seller_id)?;
        self.accumulators.get(position)
    }

    /// Number of distinct sellers
    pub fn len(&self) -> usize {
        self.accumulators.len()
    }

    /// Whether the ledger holds no sellers
    pub fn is_empty(&self) -> bool {
        self.accumulators.is_empty()
    }

    /// Consume the ledger, yielding accumulators in seller input order
    pub fn into_accumulators(self) -> Vec<SellerAccumulator> {
        self.accumulators
    }
}
