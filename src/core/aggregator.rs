//! Sales aggregation engine
//!
//! This module provides the `SalesAggregator` that turns a `SalesDataset` into
//! ranked per-seller reports by coordinating the `ProductCatalog`, the
//! `SellerLedger` and the calculators selected in `AnalysisOptions`.
//!
//! The aggregator enforces the following rules:
//! - Input is validated before anything is processed; invalid input yields
//!   `SalesError::InvalidInput` and no partial result
//! - Purchase records naming an unknown seller are skipped
//! - Items naming an unknown sku are skipped, but their record still counts
//!   as a sale and still contributes revenue
//! - Revenue, profit and bonus use checked arithmetic; an overflow yields
//!   `SalesError::InvalidInput` and no partial result
//! - Accumulators are never touched again once ranking starts

use crate::core::catalog::ProductCatalog;
use crate::core::ranking::{rank_sellers, round_money, top_products};
use crate::core::seller_ledger::SellerLedger;
use crate::strategy::AnalysisOptions;
use crate::types::{SalesDataset, SalesError, SellerAccumulator, SellerReport};
use tracing::{debug, info};

/// Counters describing one accumulation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccumulationSummary {
    /// Purchase records credited to a known seller
    pub matched_records: usize,

    /// Purchase records skipped because their seller is unknown
    pub skipped_records: usize,

    /// Items skipped because their sku is unknown
    pub skipped_items: usize,
}

/// Sales aggregation engine
///
/// Holds the analysis options and runs the validate → index → accumulate →
/// rank → report pipeline over a dataset. The aggregator itself is stateless
/// between calls; every analysis builds fresh indices.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesAggregator {
    options: AnalysisOptions,
}

impl SalesAggregator {
    /// Create an aggregator with the given options
    pub fn new(options: AnalysisOptions) -> Self {
        SalesAggregator { options }
    }

    /// Analyze a dataset and produce one report per seller with sales
    ///
    /// Reports are ordered by profit descending; sellers with equal profit
    /// keep their order from `dataset.sellers`.
    ///
    /// # Errors
    ///
    /// Returns `SalesError::InvalidInput` if:
    /// - `sellers`, `products` or `purchase_records` is empty
    /// - the options fail validation
    /// - a seller's revenue, profit or bonus overflows
    pub fn analyze(&self, dataset: &SalesDataset) -> Result<Vec<SellerReport>, SalesError> {
        self.validate(dataset)?;

        let catalog = ProductCatalog::build(&dataset.products);
        let mut ledger = SellerLedger::new(&dataset.sellers);

        let summary = self.accumulate(dataset, &catalog, &mut ledger)?;

        let ranked = rank_sellers(ledger.into_accumulators());
        let reports = self.build_reports(&ranked)?;

        info!(
            sellers = dataset.sellers.len(),
            products = catalog.len(),
            matched_records = summary.matched_records,
            skipped_records = summary.skipped_records,
            skipped_items = summary.skipped_items,
            reports = reports.len(),
            "sales analysis complete"
        );

        Ok(reports)
    }

    /// Reject datasets and options the analysis cannot work with
    fn validate(&self, dataset: &SalesDataset) -> Result<(), SalesError> {
        if dataset.sellers.is_empty() {
            return Err(SalesError::empty_collection("sellers"));
        }
        if dataset.products.is_empty() {
            return Err(SalesError::empty_collection("products"));
        }
        if dataset.purchase_records.is_empty() {
            return Err(SalesError::empty_collection("purchase_records"));
        }

        self.options.validate()
    }

    /// Single pass over purchase records in input order
    fn accumulate(
        &self,
        dataset: &SalesDataset,
        catalog: &ProductCatalog<'_>,
        ledger: &mut SellerLedger,
    ) -> Result<AccumulationSummary, SalesError> {
        let mut summary = AccumulationSummary::default();

        for record in &dataset.purchase_records {
            let Some(seller) = ledger.get_mut(&record.seller_id) else {
                debug!(seller_id = %record.seller_id, "skipping purchase record for unknown seller");
                summary.skipped_records += 1;
                continue;
            };

            summary.matched_records += 1;
            seller.sales_count += 1;
            seller.revenue = (self.options.revenue)(record, catalog)
                .and_then(|revenue| seller.revenue.checked_add(revenue))
                .ok_or_else(|| SalesError::arithmetic_overflow("revenue", &record.seller_id))?;

            for item in &record.items {
                let Some(product) = catalog.get(&item.sku) else {
                    debug!(
                        seller_id = %record.seller_id,
                        sku = %item.sku,
                        "skipping item for unknown sku"
                    );
                    summary.skipped_items += 1;
                    continue;
                };

                seller.profit = (self.options.profit)(item, product)
                    .and_then(|profit| seller.profit.checked_add(profit))
                    .ok_or_else(|| SalesError::arithmetic_overflow("profit", &record.seller_id))?;
                seller.record_units(&item.sku, item.quantity);
            }
        }

        Ok(summary)
    }

    /// Turn ranked accumulators into reports, assigning bonus tiers by rank
    fn build_reports(&self, ranked: &[SellerAccumulator]) -> Result<Vec<SellerReport>, SalesError> {
        let total = ranked.len();

        ranked
            .iter()
            .enumerate()
            .map(|(rank, acc)| {
                let rate = (self.options.bonus)(rank, total, acc);
                let bonus = rate
                    .checked_mul(acc.profit)
                    .ok_or_else(|| SalesError::arithmetic_overflow("bonus", &acc.seller.id))?;

                Ok(SellerReport {
                    seller_id: acc.seller.id.clone(),
                    name: acc.seller.full_name(),
                    revenue: round_money(acc.revenue),
                    profit: round_money(acc.profit),
                    sales_count: acc.sales_count,
                    top_products: top_products(acc, self.options.top_products_limit),
                    bonus: round_money(bonus),
                })
            })
            .collect()
    }
}

/// Analyze a dataset with the given options
///
/// Convenience wrapper around [`SalesAggregator::analyze`].
pub fn analyze_sales_data(
    dataset: &SalesDataset,
    options: &AnalysisOptions,
) -> Result<Vec<SellerReport>, SalesError> {
    SalesAggregator::new(*options).analyze(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::catalog_item_revenue;
    use crate::types::{Item, Product, ProductSales, PurchaseRecord, Seller};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn single_sale_dataset() -> SalesDataset {
        SalesDataset {
            sellers: vec![Seller::new("s1", "A", "B")],
            products: vec![Product::new("p1", dec!(5))],
            purchase_records: vec![PurchaseRecord::new(
                "s1",
                dec!(100),
                vec![Item::new("p1", dec!(20), 5).with_discount(dec!(0))],
            )],
        }
    }

    /// Five sellers with distinct profits, s5 has no sales
    fn five_seller_dataset() -> SalesDataset {
        let sale = |seller: &str, quantity: u32| {
            PurchaseRecord::new(
                seller,
                Decimal::from(quantity * 10),
                vec![Item::new("p1", dec!(10), quantity)],
            )
        };

        SalesDataset {
            sellers: vec![
                Seller::new("s1", "Anna", "Ivanova"),
                Seller::new("s2", "Boris", "Smirnov"),
                Seller::new("s3", "Vera", "Kuznetsova"),
                Seller::new("s4", "Gleb", "Popov"),
                Seller::new("s5", "Dina", "Sokolova"),
                Seller::new("s6", "Egor", "Lebedev"),
            ],
            products: vec![Product::new("p1", dec!(6))],
            purchase_records: vec![
                sale("s1", 1),
                sale("s2", 5),
                sale("s3", 2),
                sale("s4", 4),
                sale("s6", 3),
            ],
        }
    }

    #[test]
    fn test_single_sale_report() {
        let reports = analyze_sales_data(&single_sale_dataset(), &AnalysisOptions::default())
            .unwrap();

        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.seller_id, "s1");
        assert_eq!(report.name, "A B");
        assert_eq!(report.revenue, dec!(100));
        assert_eq!(report.profit, dec!(75));
        assert_eq!(report.sales_count, 1);
        assert_eq!(report.bonus, dec!(11.25));
        assert_eq!(
            report.top_products,
            vec![ProductSales {
                sku: "p1".to_string(),
                quantity: 5
            }]
        );
    }

    #[test]
    fn test_empty_sellers_rejected() {
        let mut dataset = single_sale_dataset();
        dataset.sellers.clear();

        let result = SalesAggregator::default().analyze(&dataset);
        assert_eq!(result, Err(SalesError::empty_collection("sellers")));
    }

    #[test]
    fn test_empty_products_rejected() {
        let mut dataset = single_sale_dataset();
        dataset.products.clear();

        let result = SalesAggregator::default().analyze(&dataset);
        assert_eq!(result, Err(SalesError::empty_collection("products")));
    }

    #[test]
    fn test_empty_purchase_records_rejected() {
        let mut dataset = single_sale_dataset();
        dataset.purchase_records.clear();

        let result = SalesAggregator::default().analyze(&dataset);
        assert_eq!(result, Err(SalesError::empty_collection("purchase_records")));
    }

    #[test]
    fn test_invalid_options_rejected_before_processing() {
        let options = AnalysisOptions::default().with_top_products_limit(0);

        let result = analyze_sales_data(&single_sale_dataset(), &options);
        assert!(matches!(result, Err(SalesError::InvalidInput { .. })));
    }

    #[test]
    fn test_unknown_seller_record_is_skipped() {
        let mut dataset = single_sale_dataset();
        dataset.purchase_records.push(PurchaseRecord::new(
            "unknown",
            dec!(1000),
            vec![Item::new("p1", dec!(20), 50)],
        ));

        let reports = SalesAggregator::default().analyze(&dataset).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].revenue, dec!(100));
        assert_eq!(reports[0].profit, dec!(75));
        assert_eq!(reports[0].sales_count, 1);
    }

    #[test]
    fn test_unknown_sku_item_is_skipped_but_record_counts() {
        let mut dataset = single_sale_dataset();
        dataset.purchase_records.push(PurchaseRecord::new(
            "s1",
            dec!(40),
            vec![Item::new("ghost", dec!(40), 1)],
        ));

        let reports = SalesAggregator::default().analyze(&dataset).unwrap();

        assert_eq!(reports[0].sales_count, 2);
        assert_eq!(reports[0].revenue, dec!(140));
        assert_eq!(reports[0].profit, dec!(75));
        assert_eq!(reports[0].top_products.len(), 1);
    }

    #[test]
    fn test_accumulation_summary_counts_skips() {
        let mut dataset = single_sale_dataset();
        dataset.purchase_records.push(PurchaseRecord::new(
            "nobody",
            dec!(1),
            vec![Item::new("p1", dec!(1), 1)],
        ));
        dataset.purchase_records.push(PurchaseRecord::new(
            "s1",
            dec!(1),
            vec![Item::new("ghost", dec!(1), 1), Item::new("p1", dec!(1), 1)],
        ));

        let aggregator = SalesAggregator::default();
        let catalog = ProductCatalog::build(&dataset.products);
        let mut ledger = SellerLedger::new(&dataset.sellers);
        let summary = aggregator
            .accumulate(&dataset, &catalog, &mut ledger)
            .unwrap();

        assert_eq!(
            summary,
            AccumulationSummary {
                matched_records: 2,
                skipped_records: 1,
                skipped_items: 1,
            }
        );
        assert_eq!(ledger.get("s1").unwrap().products_sold()[0].quantity, 6);
    }

    #[test]
    fn test_reports_ranked_with_bonus_tiers() {
        let reports = SalesAggregator::default()
            .analyze(&five_seller_dataset())
            .unwrap();

        // Unit profit is 4: s2=20, s4=16, s6=12, s3=8, s1=4
        let ids: Vec<&str> = reports.iter().map(|r| r.seller_id.as_str()).collect();
        assert_eq!(ids, vec!["s2", "s4", "s6", "s3", "s1"]);

        let bonuses: Vec<Decimal> = reports.iter().map(|r| r.bonus).collect();
        assert_eq!(
            bonuses,
            vec![dec!(3.00), dec!(1.60), dec!(1.20), dec!(0.40), dec!(0)]
        );
    }

    #[test]
    fn test_report_count_and_sales_count_totals() {
        let dataset = five_seller_dataset();
        let reports = SalesAggregator::default().analyze(&dataset).unwrap();

        assert_eq!(reports.len(), 5);
        assert!(reports.len() <= dataset.sellers.len());
        let total_sales: usize = reports.iter().map(|r| r.sales_count).sum();
        assert_eq!(total_sales, dataset.purchase_records.len());
    }

    #[test]
    fn test_seller_without_sales_is_not_reported() {
        let reports = SalesAggregator::default()
            .analyze(&five_seller_dataset())
            .unwrap();

        assert!(reports.iter().all(|r| r.seller_id != "s5"));
    }

    #[test]
    fn test_custom_calculators_are_used() {
        fn double_revenue(
            record: &PurchaseRecord,
            _catalog: &ProductCatalog<'_>,
        ) -> Option<Decimal> {
            record.total_amount.checked_mul(dec!(2))
        }
        fn gross_profit(item: &Item, _product: &Product) -> Option<Decimal> {
            item.sale_price.checked_mul(Decimal::from(item.quantity))
        }
        fn no_bonus(_rank: usize, _total: usize, _seller: &SellerAccumulator) -> Decimal {
            Decimal::ZERO
        }

        let options = AnalysisOptions::default()
            .with_revenue(double_revenue)
            .with_profit(gross_profit)
            .with_bonus(no_bonus);
        let reports = SalesAggregator::new(options)
            .analyze(&single_sale_dataset())
            .unwrap();

        assert_eq!(reports[0].revenue, dec!(200));
        assert_eq!(reports[0].profit, dec!(100));
        assert_eq!(reports[0].bonus, dec!(0));
    }

    #[test]
    fn test_top_products_limit_option() {
        let mut dataset = single_sale_dataset();
        dataset.products.push(Product::new("p2", dec!(1)));
        dataset.purchase_records.push(PurchaseRecord::new(
            "s1",
            dec!(10),
            vec![Item::new("p2", dec!(2), 9)],
        ));

        let options = AnalysisOptions::default().with_top_products_limit(1);
        let reports = analyze_sales_data(&dataset, &options).unwrap();

        assert_eq!(
            reports[0].top_products,
            vec![ProductSales {
                sku: "p2".to_string(),
                quantity: 9
            }]
        );
    }

    #[test]
    fn test_rounding_applied_only_to_output() {
        // Three lines of profit 0.333... each: rounded per line would give 0.99
        let dataset = SalesDataset {
            sellers: vec![Seller::new("s1", "A", "B")],
            products: vec![Product::new("p1", dec!(0))],
            purchase_records: vec![PurchaseRecord::new(
                "s1",
                dec!(1),
                vec![
                    Item::new("p1", dec!(1), 1).with_discount(dec!(66.66666666)),
                    Item::new("p1", dec!(1), 1).with_discount(dec!(66.66666666)),
                    Item::new("p1", dec!(1), 1).with_discount(dec!(66.66666666)),
                ],
            )],
        };

        let reports = SalesAggregator::default().analyze(&dataset).unwrap();
        assert_eq!(reports[0].profit, dec!(1.00));
        assert_eq!(reports[0].top_products[0].quantity, 3);
    }

    #[test]
    fn test_item_based_revenue_ignores_unknown_skus() {
        let mut dataset = single_sale_dataset();
        dataset.purchase_records.push(PurchaseRecord::new(
            "s1",
            dec!(500),
            vec![
                Item::new("p1", dec!(10), 2).with_discount(dec!(50)),
                Item::new("ghost", dec!(400), 1),
            ],
        ));

        let options = AnalysisOptions::default().with_revenue(catalog_item_revenue);
        let reports = analyze_sales_data(&dataset, &options).unwrap();

        // 20 × 5 from the first record, 10 × 2 × 0.5 from the second
        assert_eq!(reports[0].revenue, dec!(110));
        assert_eq!(reports[0].sales_count, 2);
    }

    #[test]
    fn test_revenue_overflow_is_rejected() {
        let mut dataset = single_sale_dataset();
        dataset.purchase_records = vec![
            PurchaseRecord::new("s1", dec!(50000000000000000000000000000), vec![]),
            PurchaseRecord::new("s1", dec!(50000000000000000000000000000), vec![]),
        ];

        let result = analyze_sales_data(&dataset, &AnalysisOptions::default());
        assert_eq!(result, Err(SalesError::arithmetic_overflow("revenue", "s1")));
    }

    #[test]
    fn test_line_profit_overflow_is_rejected() {
        let mut dataset = single_sale_dataset();
        dataset.purchase_records = vec![PurchaseRecord::new(
            "s1",
            dec!(1),
            vec![Item::new("p1", dec!(100000000000000000000000000), 4_000_000_000)],
        )];

        let result = analyze_sales_data(&dataset, &AnalysisOptions::default());
        assert_eq!(result, Err(SalesError::arithmetic_overflow("profit", "s1")));
    }

    #[test]
    fn test_profit_total_overflow_is_rejected() {
        let mut dataset = single_sale_dataset();
        let line = Item::new("p1", Decimal::MAX, 1);
        dataset.products = vec![Product::new("p1", dec!(0))];
        dataset.purchase_records = vec![PurchaseRecord::new(
            "s1",
            dec!(1),
            vec![line.clone(), line],
        )];

        let result = analyze_sales_data(&dataset, &AnalysisOptions::default());
        assert_eq!(result, Err(SalesError::arithmetic_overflow("profit", "s1")));
    }

    #[test]
    fn test_bonus_overflow_is_rejected() {
        fn huge_rate(_rank: usize, _total: usize, _seller: &SellerAccumulator) -> Decimal {
            Decimal::MAX
        }

        let options = AnalysisOptions::default().with_bonus(huge_rate);
        let result = analyze_sales_data(&single_sale_dataset(), &options);
        assert_eq!(result, Err(SalesError::arithmetic_overflow("bonus", "s1")));
    }
}
