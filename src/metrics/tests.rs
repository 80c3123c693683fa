#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::palette::ColorToken;

// ── remaining_budget ──────────────────────────────────────────

#[test]
fn test_remaining_budget_under() {
    assert_eq!(remaining_budget(dec!(1500), dec!(1320)), dec!(180));
}

#[test]
fn test_remaining_budget_over_is_negative() {
    assert_eq!(remaining_budget(dec!(1500), dec!(1680)), dec!(-180));
}

#[test]
fn test_remaining_budget_exact() {
    assert_eq!(remaining_budget(dec!(1500), dec!(1500)), Decimal::ZERO);
}

#[test]
fn test_remaining_budget_keeps_cents() {
    assert_eq!(remaining_budget(dec!(100.00), dec!(33.33)), dec!(66.67));
}

// ── goal_progress_percent ─────────────────────────────────────

#[test]
fn test_goal_progress_basic() {
    assert_eq!(goal_progress_percent(dec!(850), dec!(2000)), dec!(42.5));
}

#[test]
fn test_goal_progress_over_target_not_clamped() {
    let p = goal_progress_percent(dec!(1200), dec!(1000));
    assert_eq!(p, dec!(120));
    assert!(p > dec!(100));
}

#[test]
fn test_goal_progress_zero_current() {
    assert_eq!(goal_progress_percent(Decimal::ZERO, dec!(800)), Decimal::ZERO);
}

#[test]
fn test_goal_progress_negative_current() {
    assert_eq!(goal_progress_percent(dec!(-50), dec!(200)), dec!(-25));
}

#[test]
fn test_goal_progress_is_repeatable() {
    let a = goal_progress_percent(dec!(320), dec!(1200));
    let b = goal_progress_percent(dec!(320), dec!(1200));
    assert_eq!(a, b);
    assert_eq!(a.round_dp(1), dec!(26.7));
}

// ── goal_remaining ────────────────────────────────────────────

#[test]
fn test_goal_remaining() {
    assert_eq!(goal_remaining(dec!(850), dec!(2000)), dec!(1150));
    assert_eq!(goal_remaining(dec!(1200), dec!(1000)), dec!(-200));
}

// ── budget_remaining_ratio ────────────────────────────────────

#[test]
fn test_budget_remaining_ratio() {
    let r = budget_remaining_ratio(dec!(1500), dec!(1320));
    assert!((r - 0.12).abs() < 1e-9);
}

#[test]
fn test_budget_remaining_ratio_over_budget_is_negative() {
    let r = budget_remaining_ratio(dec!(1500), dec!(1680));
    assert!((r + 0.12).abs() < 1e-9);
}

#[test]
fn test_budget_remaining_percent() {
    assert_eq!(budget_remaining_percent(dec!(1500), dec!(1320)), dec!(12));
    assert_eq!(budget_remaining_percent(dec!(1500), dec!(1680)), dec!(-12));
    assert_eq!(budget_remaining_percent(Decimal::ZERO, dec!(1)), Decimal::ZERO);
}

#[test]
fn test_budget_remaining_ratio_zero_budget() {
    assert_eq!(budget_remaining_ratio(Decimal::ZERO, dec!(10)), 0.0);
}

// ── category totals ───────────────────────────────────────────

fn slice(name: &str, value: Decimal) -> CategorySlice {
    CategorySlice::new(name, value, ColorToken::Muted)
}

#[test]
fn test_category_total() {
    let slices = vec![slice("A", dec!(450)), slice("B", dec!(280)), slice("C", dec!(270))];
    assert_eq!(category_total(&slices), dec!(1000));
}

#[test]
fn test_category_total_empty() {
    assert_eq!(category_total(&[]), Decimal::ZERO);
}

#[test]
fn test_category_share() {
    assert_eq!(category_share_percent(dec!(450), dec!(1000)), dec!(45));
    assert_eq!(category_share_percent(dec!(1), dec!(4)), dec!(25));
}

#[test]
fn test_category_share_zero_total() {
    assert_eq!(category_share_percent(dec!(5), Decimal::ZERO), Decimal::ZERO);
}

// ── gauge_ratio ───────────────────────────────────────────────

#[test]
fn test_gauge_ratio_clamps() {
    assert_eq!(gauge_ratio(1.2), 1.0);
    assert_eq!(gauge_ratio(-0.3), 0.0);
    assert_eq!(gauge_ratio(0.425), 0.425);
    assert_eq!(gauge_ratio(f64::NAN), 0.0);
}

// ── round_cents ───────────────────────────────────────────────

#[test]
fn test_round_cents_rounds_instead_of_truncating() {
    assert_eq!(round_cents(dec!(-12.509)), dec!(-12.51));
    assert_eq!(round_cents(dec!(12.505)), dec!(12.51));
    assert_eq!(round_cents(dec!(12.504)), dec!(12.50));
    assert_eq!(round_cents(dec!(7)), dec!(7));
}
