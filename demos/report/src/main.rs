//! report — smallest end-to-end demo for the tabex workspace.
//!
//! Builds a small price list the way a web app would for a spreadsheet
//! download: Excel-compat preset, semicolon delimiter, header row, a
//! non-breaking-space cleanup substitution, then streams the finished
//! artifact to stdout through the transport seam.
//!
//! Run with `RUST_LOG=debug cargo run -p report` to watch the open/seal
//! lifecycle.

use anyhow::Result;

use tabex_writer::{CsvDocument, RawStream};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_PATH: &str = "./report.csv";

const ROWS: [[(&str, &str); 3]; 3] = [
    [("sku", "A-100"), ("name", "Espresso beans 1\u{a0}kg"), ("price", "18.90")],
    [("sku", "B-230"), ("name", "Filter papers"), ("price", "3.40")],
    [("sku", "C-775"), ("name", "Caf\u{e9} cup set"), ("price", "24.00")],
];

fn main() -> Result<()> {
    env_logger::init();

    let mut doc = CsvDocument::new(OUTPUT_PATH);
    doc.excel_compat()
        .set_delimiter(";")?
        .set_header([("sku", "SKU"), ("name", "Article"), ("price", "Price (EUR)")])
        .substitute("\u{a0}", " ")?;

    for row in ROWS {
        doc.write_keyed(row)?;
    }
    log::info!("wrote {} rows to {}", ROWS.len(), OUTPUT_PATH);

    let mut stdout = RawStream(std::io::stdout().lock());
    doc.stream_to(&mut stdout)?;
    Ok(())
}
