#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::palette::ColorToken;

// ── Transaction ───────────────────────────────────────────────

fn make_txn(amount: Decimal, category: &str) -> Transaction {
    Transaction::new(1, "Test", amount, category, "2024-01-15")
}

#[test]
fn test_income() {
    let txn = make_txn(dec!(320.00), "Income");
    assert!(txn.is_income());
    assert!(!txn.is_expense());
    assert_eq!(txn.amount_tone(), ColorToken::Success);
}

#[test]
fn test_expense() {
    let txn = make_txn(dec!(-65.40), "Food");
    assert!(!txn.is_income());
    assert!(txn.is_expense());
    assert_eq!(txn.amount_tone(), ColorToken::Destructive);
}

#[test]
fn test_zero_is_neither() {
    let txn = make_txn(Decimal::ZERO, "Food");
    assert!(!txn.is_income());
    assert!(!txn.is_expense());
}

#[test]
fn test_abs_amount() {
    assert_eq!(make_txn(dec!(-65.40), "Food").abs_amount(), dec!(65.40));
    assert_eq!(make_txn(dec!(320.00), "Income").abs_amount(), dec!(320.00));
}

#[test]
fn test_category_color_uses_resolver() {
    assert_eq!(make_txn(dec!(-1), "Food").category_color(), ColorToken::CategoryFood);
    assert_eq!(make_txn(dec!(1), "Income").category_color(), ColorToken::Success);
    assert_eq!(make_txn(dec!(-1), "Gifts").category_color(), ColorToken::Muted);
}

// ── Goal ──────────────────────────────────────────────────────

#[test]
fn test_goal_progress() {
    let goal = Goal::new(1, "Emergency Fund", dec!(850), dec!(2000), Tone::Success);
    assert_eq!(goal.progress_percent(), dec!(42.5));
    assert_eq!(goal.remaining(), dec!(1150));
    assert!((goal.progress_ratio() - 0.425).abs() < 1e-9);
    assert!(!goal.is_reached());
}

#[test]
fn test_goal_exceeded() {
    let goal = Goal::new(9, "Overshoot", dec!(1200), dec!(1000), Tone::Info);
    assert_eq!(goal.progress_percent(), dec!(120));
    assert_eq!(goal.remaining(), dec!(-200));
    assert!((goal.progress_ratio() - 1.2).abs() < 1e-9);
    assert!(goal.is_reached());
}

// ── Tone ──────────────────────────────────────────────────────

#[test]
fn test_tone_tokens() {
    assert_eq!(Tone::Success.token(), ColorToken::Success);
    assert_eq!(Tone::Info.token(), ColorToken::Info);
    assert_eq!(Tone::Warning.token(), ColorToken::Warning);
}

#[test]
fn test_tone_display() {
    assert_eq!(format!("{}", Tone::Warning), "warning");
}

// ── MonthlyRecord ─────────────────────────────────────────────

#[test]
fn test_monthly_over_budget() {
    assert!(MonthlyRecord::new("May", dec!(1680), dec!(1500)).is_over_budget());
    assert!(!MonthlyRecord::new("Mar", dec!(1450), dec!(1500)).is_over_budget());
    assert!(!MonthlyRecord::new("X", dec!(1500), dec!(1500)).is_over_budget());
}

// ── Summary ───────────────────────────────────────────────────

#[test]
fn test_summary_remaining() {
    let summary = Summary {
        total_balance: dec!(2450.75),
        balance_note: String::new(),
        monthly_budget: dec!(1500),
        current_spending: dec!(1320),
        spending_note: String::new(),
    };
    assert_eq!(summary.remaining_budget(), dec!(180));
    assert_eq!(summary.remaining_percent(), dec!(12));
    assert!((summary.remaining_ratio() - 0.12).abs() < 1e-9);
}

#[test]
fn test_category_slice_display() {
    let slice = CategorySlice::new("Health", dec!(120), ColorToken::CategoryHealth);
    assert_eq!(format!("{slice}"), "Health");
}
