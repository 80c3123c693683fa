use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::Tone;
use crate::metrics;

/// A savings goal. `target` must be non-zero; `current` may exceed it.
#[derive(Debug, Clone)]
pub struct Goal {
    pub id: i64,
    pub name: String,
    pub current: Decimal,
    pub target: Decimal,
    pub tone: Tone,
}

impl Goal {
    pub fn new(id: i64, name: &str, current: Decimal, target: Decimal, tone: Tone) -> Self {
        Self {
            id,
            name: name.to_string(),
            current,
            target,
            tone,
        }
    }

    pub fn progress_percent(&self) -> Decimal {
        metrics::goal_progress_percent(self.current, self.target)
    }

    /// Progress as a fraction for gauges; unclamped.
    pub fn progress_ratio(&self) -> f64 {
        (self.progress_percent() / Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0)
    }

    pub fn remaining(&self) -> Decimal {
        metrics::goal_remaining(self.current, self.target)
    }

    pub fn is_reached(&self) -> bool {
        self.current >= self.target
    }
}
