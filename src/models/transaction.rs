use rust_decimal::Decimal;

use crate::palette::{self, ColorToken};

#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: i64,
    pub description: String,
    /// Positive = inflow, negative = outflow.
    pub amount: Decimal,
    pub category: String,
    /// Format: "YYYY-MM-DD"
    pub date: String,
}

impl Transaction {
    pub fn new(id: i64, description: &str, amount: Decimal, category: &str, date: &str) -> Self {
        Self {
            id,
            description: description.to_string(),
            amount,
            category: category.to_string(),
            date: date.to_string(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }

    /// Color class for the amount column: inflows are `Success`, everything
    /// else (including zero) is `Destructive`.
    pub fn amount_tone(&self) -> ColorToken {
        if self.is_income() {
            ColorToken::Success
        } else {
            ColorToken::Destructive
        }
    }

    pub fn category_color(&self) -> ColorToken {
        palette::color_for(&self.category)
    }
}
