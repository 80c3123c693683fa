#![allow(clippy::unwrap_used)]

use super::*;

fn run_with(args: &[&str], data: &Dataset) -> (Result<()>, String) {
    let mut argv = vec!["findash".to_string()];
    argv.extend(args.iter().map(|a| a.to_string()));
    let mut out = Vec::new();
    let result = run_command(&argv, data, &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn run(args: &[&str]) -> (Result<()>, String) {
    run_with(args, &Dataset::sample())
}

#[test]
fn test_summary() {
    let (result, out) = run(&["summary"]);
    result.unwrap();
    assert!(out.contains("$2,450.75"));
    assert!(out.contains("$1,320.00"));
    assert!(out.contains("$180.00"));
    assert!(out.contains("12.0%"));
    assert!(out.contains("May"));
    assert!(out.contains("over"));
}

#[test]
fn test_goals() {
    let (result, out) = run(&["goals"]);
    result.unwrap();
    assert!(out.contains("Emergency Fund"));
    assert!(out.contains("42.5% complete • $1,150.00 remaining"));
    assert!(out.contains("26.7% complete"));
    assert!(out.contains("18.8% complete"));
}

#[test]
fn test_transactions_signs() {
    let (result, out) = run(&["t"]);
    result.unwrap();
    assert!(out.contains("+$320.00"));
    assert!(out.contains("$65.40"));
    assert!(!out.contains("-$65.40"));
    assert!(out.contains("In: $320.00  Out: $146.90  Net: $173.10"));
}

#[test]
fn test_categories() {
    let (result, out) = run(&["categories"]);
    result.unwrap();
    assert!(out.contains("$1,580.00"));
    assert!(out.contains("category-food"));
    assert!(out.contains("28.5%"));
}

#[test]
fn test_export_to_stdout() {
    let (result, out) = run(&["export"]);
    result.unwrap();
    assert!(out.starts_with("id,date,description,category,amount,color\n"));
    assert_eq!(out.lines().count(), 6);
}

#[test]
fn test_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let path_str = path.to_str().unwrap();
    let (result, out) = run(&["export", path_str]);
    result.unwrap();
    assert!(out.contains("Exported 5 transactions"));
    assert!(path.exists());
}

#[test]
fn test_version() {
    let (result, out) = run(&["--version"]);
    result.unwrap();
    assert!(out.starts_with("findash "));
}

#[test]
fn test_unknown_command_fails_with_usage() {
    let (result, out) = run(&["frobnicate"]);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Unknown command: frobnicate"));
    assert!(out.contains("Usage: findash"));
}

#[test]
fn test_shellexpand() {
    assert_eq!(shellexpand("/tmp/x.csv"), "/tmp/x.csv");
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    assert_eq!(shellexpand("~/x.csv"), format!("{home}/x.csv"));
}

#[test]
fn test_goal_over_target_matches_dashboard_caption() {
    let mut data = Dataset::sample();
    data.goals = vec![crate::models::Goal::new(
        7,
        "Overshoot",
        rust_decimal_macros::dec!(1200),
        rust_decimal_macros::dec!(1000),
        crate::models::Tone::Info,
    )];
    let (result, out) = run_with(&["goals"], &data);
    result.unwrap();
    assert!(out.contains("120.0% complete • $200.00 over target"));
    assert!(out.contains("reached"));
    assert!(!out.contains("-$200.00"));
}

#[test]
fn test_no_command_prints_usage() {
    let data = Dataset::sample();
    let mut out = Vec::new();
    run_command(&["findash".to_string()], &data, &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("Usage: findash"));
}

#[test]
fn test_empty_args_print_usage() {
    let data = Dataset::sample();
    let mut out = Vec::new();
    run_command(&[], &data, &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("Usage: findash"));
}
