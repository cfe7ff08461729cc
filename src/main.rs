//! Seller Analytics CLI
//!
//! Command-line interface for computing seller performance reports from a JSON
//! dataset.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- data.json > reports.csv
//! cargo run -- --format json data.json > reports.json
//! cargo run -- --top-products 5 data.json
//! RUST_LOG=debug cargo run -- data.json
//! ```
//!
//! Reports go to stdout, logs to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed dataset, empty collections, etc.)

use seller_analytics::{cli, pipeline};
use std::process;

fn main() {
    cli::init_logging();

    let args = cli::parse_args();
    let options = args.to_options();

    let mut output = std::io::stdout().lock();
    if let Err(e) = pipeline::process_file(&args.input_file, &options, args.format, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
