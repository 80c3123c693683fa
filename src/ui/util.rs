use rust_decimal::{Decimal, RoundingStrategy};

use crate::metrics;
use crate::models::Goal;

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let rounded = metrics::round_cents(val);
    let abs = rounded.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if rounded < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Transaction feed amount: inflows get a leading `+`, outflows show only
/// their magnitude (the color carries the sign).
pub(crate) fn format_signed_amount(val: Decimal) -> String {
    let sign = if val > Decimal::ZERO { "+" } else { "" };
    format!("{sign}{}", format_amount(val.abs()))
}

/// One decimal place, half away from zero. e.g. `42.5` → `"42.5%"`
pub(crate) fn format_percent(val: Decimal) -> String {
    let rounded = val.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.1}%")
}

/// Caption under a goal: percent done and what is left, or how far past
/// the target it is.
pub(crate) fn goal_caption(goal: &Goal) -> String {
    let progress = format_percent(goal.progress_percent());
    let remaining = goal.remaining();
    if remaining < Decimal::ZERO {
        format!(
            "{progress} complete • {} over target",
            format_amount(remaining.abs())
        )
    } else {
        format!("{progress} complete • {} remaining", format_amount(remaining))
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as one).
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Text progress bar for plain output. `ratio` is clamped to `[0, 1]`.
pub(crate) fn progress_bar(ratio: f64, width: usize) -> String {
    let ratio = metrics::gauge_ratio(ratio);
    let filled = ((ratio * width as f64) as usize).min(width);
    let empty = width - filled;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
