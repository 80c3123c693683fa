use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::metrics;
use crate::models::Transaction;

const HEADER: [&str; 6] = ["id", "date", "description", "category", "amount", "color"];

/// Write the transaction feed as CSV. Amounts keep their sign and two
/// decimals; `color` is the token the dashboard uses for the category dot.
pub(crate) fn write_transactions<W: Write>(writer: W, transactions: &[Transaction]) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)
        .context("Failed to write CSV header")?;

    for txn in transactions {
        wtr.write_record([
            txn.id.to_string(),
            txn.date.clone(),
            txn.description.clone(),
            txn.category.clone(),
            format!("{:.2}", metrics::round_cents(txn.amount)),
            txn.category_color().to_string(),
        ])
        .with_context(|| format!("Failed to write transaction {}", txn.id))?;
    }

    wtr.flush().context("Failed to flush CSV output")?;
    Ok(transactions.len())
}

pub(crate) fn export_to_path(path: &Path, transactions: &[Transaction]) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_transactions(file, transactions)
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod export_tests;
