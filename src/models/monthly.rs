use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct MonthlyRecord {
    pub month: String,
    pub spending: Decimal,
    pub budget: Decimal,
}

impl MonthlyRecord {
    pub fn new(month: &str, spending: Decimal, budget: Decimal) -> Self {
        Self {
            month: month.to_string(),
            spending,
            budget,
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.spending > self.budget
    }
}
