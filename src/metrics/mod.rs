//! Arithmetic behind the dashboard numbers. Every function here is pure and
//! total over its documented domain; nothing is clamped.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::CategorySlice;

/// `monthly_budget - current_spending`. Negative when over budget.
pub fn remaining_budget(monthly_budget: Decimal, current_spending: Decimal) -> Decimal {
    monthly_budget - current_spending
}

/// Completion of a goal as a percentage, `current / target * 100`.
///
/// `target` must be non-zero. The result may exceed 100 or be negative.
pub fn goal_progress_percent(current: Decimal, target: Decimal) -> Decimal {
    debug_assert!(!target.is_zero(), "goal target must be non-zero");
    current / target * Decimal::ONE_HUNDRED
}

/// Amount still missing to reach `target`. Negative once the goal is exceeded.
pub fn goal_remaining(current: Decimal, target: Decimal) -> Decimal {
    target - current
}

/// Share of the monthly budget still unspent, in percent. Negative when over
/// budget. A zero budget yields zero.
pub fn budget_remaining_percent(monthly_budget: Decimal, current_spending: Decimal) -> Decimal {
    if monthly_budget.is_zero() {
        return Decimal::ZERO;
    }
    remaining_budget(monthly_budget, current_spending) / monthly_budget * Decimal::ONE_HUNDRED
}

/// [`budget_remaining_percent`] as a fraction, for gauges.
pub fn budget_remaining_ratio(monthly_budget: Decimal, current_spending: Decimal) -> f64 {
    (budget_remaining_percent(monthly_budget, current_spending) / Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0)
}

pub fn category_total(slices: &[CategorySlice]) -> Decimal {
    slices.iter().map(|s| s.value).sum()
}

/// Percentage of `total` taken by `value`. A zero total yields zero.
pub fn category_share_percent(value: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    value / total * Decimal::ONE_HUNDRED
}

/// Round to whole cents, half away from zero.
pub fn round_cents(val: Decimal) -> Decimal {
    val.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamp a ratio into the range a progress gauge can draw.
pub fn gauge_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests;
