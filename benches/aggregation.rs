//! Benchmark suite for the sales aggregation pipeline
//!
//! Uses the divan benchmarking framework over synthetic datasets built in
//! memory, so no fixture files are needed.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Dataset sizes are given as purchase record counts. Every dataset has 50
//! sellers, 200 products and 4 items per record, with a small share of records
//! and items pointing at unknown sellers and skus.

use rust_decimal::Decimal;
use seller_analytics::{
    analyze_sales_data, write_reports_csv, AnalysisOptions, Item, Product, PurchaseRecord,
    SalesDataset, Seller,
};

const SELLERS: usize = 50;
const PRODUCTS: usize = 200;
const ITEMS_PER_RECORD: usize = 4;

fn main() {
    divan::main();
}

/// Build a deterministic dataset with `records` purchase records
fn build_dataset(records: usize) -> SalesDataset {
    let sellers = (0..SELLERS)
        .map(|n| Seller::new(format!("seller_{}", n), "First", format!("Last{}", n)))
        .collect();

    let products = (0..PRODUCTS)
        .map(|n| Product::new(format!("SKU_{:04}", n), Decimal::new(500 + n as i64 * 7, 2)))
        .collect();

    let purchase_records = (0..records)
        .map(|n| {
            // Every 97th record names a seller that does not exist
            let seller_id = if n % 97 == 0 {
                "seller_unknown".to_string()
            } else {
                format!("seller_{}", (n * 31) % SELLERS)
            };

            let items: Vec<Item> = (0..ITEMS_PER_RECORD)
                .map(|i| {
                    // Every 53rd line names a sku outside the catalog
                    let sku = if (n + i) % 53 == 0 {
                        "SKU_MISSING".to_string()
                    } else {
                        format!("SKU_{:04}", (n * 7 + i * 13) % PRODUCTS)
                    };
                    Item::new(sku, Decimal::new(1500 + (n % 40) as i64 * 25, 2), (i % 3 + 1) as u32)
                        .with_discount(Decimal::from((n % 4) * 5))
                })
                .collect();

            let total: Decimal = items
                .iter()
                .map(|item| item.sale_price * Decimal::from(item.quantity))
                .sum();

            PurchaseRecord::new(seller_id, total, items)
        })
        .collect();

    SalesDataset {
        sellers,
        products,
        purchase_records,
    }
}

/// Analysis only, over datasets of increasing size
#[divan::bench(args = [100, 1_000, 100_000])]
fn analyze(bencher: divan::Bencher, records: usize) {
    let dataset = build_dataset(records);
    let options = AnalysisOptions::default();

    bencher.bench_local(|| {
        analyze_sales_data(divan::black_box(&dataset), &options).expect("Analysis failed")
    });
}

/// Analysis followed by CSV rendering of the reports
#[divan::bench(args = [1_000, 100_000])]
fn analyze_and_write_csv(bencher: divan::Bencher, records: usize) {
    let dataset = build_dataset(records);
    let options = AnalysisOptions::default();

    bencher.bench_local(|| {
        let reports = analyze_sales_data(&dataset, &options).expect("Analysis failed");
        let mut output = Vec::new();
        write_reports_csv(&reports, &mut output).expect("Write failed");
        output
    });
}
