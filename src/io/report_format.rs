//! Report serialization
//!
//! Writes seller reports as CSV (one row per seller) or as a JSON array.
//! All functions write to a caller-supplied writer and perform no other I/O.

use crate::types::{ProductSales, SalesError, SellerReport};
use std::io::Write;

/// CSV header for seller reports
pub const CSV_HEADER: [&str; 7] = [
    "seller_id",
    "name",
    "revenue",
    "profit",
    "sales_count",
    "bonus",
    "top_products",
];

/// Render top products as `sku:quantity` pairs joined by `;`
pub fn format_top_products(products: &[ProductSales]) -> String {
    products
        .iter()
        .map(|p| format!("{}:{}", p.sku, p.quantity))
        .collect::<Vec<_>>()
        .join(";")
}

/// Write reports in CSV format
///
/// Columns: seller_id, name, revenue, profit, sales_count, bonus, top_products.
/// Money columns always carry two decimal places. Rows keep the ranked order.
///
/// # Errors
///
/// Returns `SalesError::ParseError` or `SalesError::IoError` if writing fails.
pub fn write_reports_csv(
    reports: &[SellerReport],
    output: &mut dyn Write,
) -> Result<(), SalesError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(CSV_HEADER)?;

    for report in reports {
        writer.write_record(&[
            report.seller_id.clone(),
            report.name.clone(),
            format!("{:.2}", report.revenue),
            format!("{:.2}", report.profit),
            report.sales_count.to_string(),
            format!("{:.2}", report.bonus),
            format_top_products(&report.top_products),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

/// Write reports as a pretty-printed JSON array
///
/// # Errors
///
/// Returns `SalesError::ParseError` or `SalesError::IoError` if writing fails.
pub fn write_reports_json(
    reports: &[SellerReport],
    output: &mut dyn Write,
) -> Result<(), SalesError> {
    serde_json::to_writer_pretty(&mut *output, reports)?;
    writeln!(output)?;
    Ok(())
}
