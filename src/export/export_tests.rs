#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::data::Dataset;

fn to_string(transactions: &[Transaction]) -> String {
    let mut out = Vec::new();
    write_transactions(&mut out, transactions).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_header_only_when_empty() {
    assert_eq!(to_string(&[]), "id,date,description,category,amount,color\n");
}

#[test]
fn test_sample_feed() {
    let data = Dataset::sample();
    let out = to_string(&data.transactions);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[1], "1,2024-01-15,Grocery Store,Food,-65.40,category-food");
    assert_eq!(lines[3], "3,2024-01-14,Part-time Job,Income,320.00,success");
}

#[test]
fn test_unknown_category_is_muted() {
    let txn = Transaction::new(9, "Gift", dec!(-5), "Gifts", "2024-02-01");
    let out = to_string(&[txn]);
    assert!(out.ends_with("9,2024-02-01,Gift,Gifts,-5.00,muted\n"));
}

#[test]
fn test_amounts_rounded_to_cents() {
    let txns = [
        Transaction::new(1, "x", dec!(-12.509), "Food", "2024-01-09"),
        Transaction::new(2, "y", dec!(0.125), "Income", "2024-01-09"),
    ];
    let out = to_string(&txns);
    assert!(out.contains("1,2024-01-09,x,Food,-12.51,category-food\n"));
    assert!(out.contains("2,2024-01-09,y,Income,0.13,success\n"));
}

#[test]
fn test_fields_with_commas_are_quoted() {
    let txn = Transaction::new(1, "Books, pens", dec!(-12.5), "Education", "2024-01-10");
    let out = to_string(&[txn]);
    assert!(out.contains("\"Books, pens\""));
}

#[test]
fn test_export_to_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("feed.csv");
    let data = Dataset::sample();
    let count = export_to_path(&path, &data.transactions).unwrap();
    assert_eq!(count, 5);
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("id,date,description,category,amount,color\n"));
    assert!(written.contains("Movie Tickets"));
}

#[test]
fn test_export_to_missing_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope").join("feed.csv");
    let err = export_to_path(&path, &[]).unwrap_err();
    assert!(err.to_string().contains("Failed to create"));
}
