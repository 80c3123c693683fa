use rust_decimal::Decimal;

use crate::metrics;

/// Figures behind the three summary cards.
#[derive(Debug, Clone)]
pub struct Summary {
    pub total_balance: Decimal,
    pub balance_note: String,
    pub monthly_budget: Decimal,
    pub current_spending: Decimal,
    pub spending_note: String,
}

impl Summary {
    pub fn remaining_budget(&self) -> Decimal {
        metrics::remaining_budget(self.monthly_budget, self.current_spending)
    }

    pub fn remaining_percent(&self) -> Decimal {
        metrics::budget_remaining_percent(self.monthly_budget, self.current_spending)
    }

    pub fn remaining_ratio(&self) -> f64 {
        metrics::budget_remaining_ratio(self.monthly_budget, self.current_spending)
    }
}
