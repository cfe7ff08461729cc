//! Built-in calculators
//!
//! The default revenue is the receipt's `total_amount`. `catalog_item_revenue`
//! rebuilds it from the discounted lines instead. Bonus rates are fractions of
//! profit (0.15 means 15%).

use crate::core::catalog::ProductCatalog;
use crate::types::{Item, Product, PurchaseRecord, SellerAccumulator};
use rust_decimal::Decimal;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Revenue of a purchase record: the amount charged for the whole receipt
pub fn record_total_revenue(
    record: &PurchaseRecord,
    _catalog: &ProductCatalog<'_>,
) -> Option<Decimal> {
    Some(record.total_amount)
}

/// Revenue rebuilt from line items: `sale_price × quantity × (1 − discount/100)`
///
/// Lines whose sku is not in the catalog add nothing.
pub fn catalog_item_revenue(
    record: &PurchaseRecord,
    catalog: &ProductCatalog<'_>,
) -> Option<Decimal> {
    record
        .items
        .iter()
        .filter(|item| catalog.contains(&item.sku))
        .try_fold(Decimal::ZERO, |total, item| {
            let line = item
                .sale_price
                .checked_mul(Decimal::from(item.quantity))?
                .checked_mul(discount_factor(item)?)?;
            total.checked_add(line)
        })
}

/// Profit of one line: `(sale_price × (1 − discount/100) − purchase_price) × quantity`
pub fn discounted_line_profit(item: &Item, product: &Product) -> Option<Decimal> {
    let unit_profit = item
        .sale_price
        .checked_mul(discount_factor(item)?)?
        .checked_sub(product.purchase_price)?;
    unit_profit.checked_mul(Decimal::from(item.quantity))
}

fn discount_factor(item: &Item) -> Option<Decimal> {
    Decimal::ONE.checked_sub(item.discount_pct().checked_div(HUNDRED)?)
}

/// Bonus rate by profit rank
///
/// | rank      | rate |
/// |-----------|------|
/// | 0         | 0.15 |
/// | 1, 2      | 0.10 |
/// | last      | 0.00 |
/// | any other | 0.05 |
///
/// The rules are checked top-down, so a lone seller (rank 0 and last at the
/// same time) gets 0.15, and with three sellers the last one still gets 0.10.
pub fn bonus_by_profit(rank: usize, total: usize, _seller: &SellerAccumulator) -> Decimal {
    if rank == 0 {
        Decimal::new(15, 2)
    } else if rank == 1 || rank == 2 {
        Decimal::new(10, 2)
    } else if rank + 1 == total {
        Decimal::ZERO
    } else {
        Decimal::new(5, 2)
    }
}
