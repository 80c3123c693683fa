//! The literal dataset the dashboard renders. Nothing here is loaded from
//! disk; every value is authored in this file.

use rust_decimal_macros::dec;

use crate::models::{CategorySlice, Goal, Insight, MonthlyRecord, Summary, Tone, Transaction};
use crate::palette::ColorToken;

#[derive(Debug, Clone)]
pub struct Dataset {
    pub summary: Summary,
    pub monthly: Vec<MonthlyRecord>,
    pub categories: Vec<CategorySlice>,
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
    pub insights: Vec<Insight>,
}

impl Dataset {
    pub fn sample() -> Self {
        Self {
            summary: Summary {
                total_balance: dec!(2450.75),
                balance_note: "+2.5% from last month".into(),
                monthly_budget: dec!(1500),
                current_spending: dec!(1320),
                spending_note: "12% under budget".into(),
            },
            monthly: vec![
                MonthlyRecord::new("Jan", dec!(1200), dec!(1500)),
                MonthlyRecord::new("Feb", dec!(980), dec!(1500)),
                MonthlyRecord::new("Mar", dec!(1450), dec!(1500)),
                MonthlyRecord::new("Apr", dec!(1320), dec!(1500)),
                MonthlyRecord::new("May", dec!(1680), dec!(1500)),
                MonthlyRecord::new("Jun", dec!(1200), dec!(1500)),
            ],
            categories: vec![
                CategorySlice::new("Food", dec!(450), ColorToken::CategoryFood),
                CategorySlice::new("Transport", dec!(280), ColorToken::CategoryTransport),
                CategorySlice::new("Entertainment", dec!(200), ColorToken::CategoryEntertainment),
                CategorySlice::new("Education", dec!(350), ColorToken::CategoryEducation),
                CategorySlice::new("Shopping", dec!(180), ColorToken::CategoryShopping),
                CategorySlice::new("Health", dec!(120), ColorToken::CategoryHealth),
            ],
            transactions: vec![
                Transaction::new(1, "Grocery Store", dec!(-65.40), "Food", "2024-01-15"),
                Transaction::new(2, "Bus Pass", dec!(-45.00), "Transport", "2024-01-14"),
                Transaction::new(3, "Part-time Job", dec!(320.00), "Income", "2024-01-14"),
                Transaction::new(4, "Coffee Shop", dec!(-12.50), "Food", "2024-01-13"),
                Transaction::new(5, "Movie Tickets", dec!(-24.00), "Entertainment", "2024-01-12"),
            ],
            goals: vec![
                Goal::new(1, "Emergency Fund", dec!(850), dec!(2000), Tone::Success),
                Goal::new(2, "New Laptop", dec!(320), dec!(1200), Tone::Info),
                Goal::new(3, "Spring Break Trip", dec!(150), dec!(800), Tone::Warning),
            ],
            insights: vec![
                Insight::new(
                    "Food spending trending high",
                    "You've spent 15% more on food this month compared to your average",
                    Tone::Warning,
                ),
                Insight::new(
                    "Great savings progress!",
                    "You're 42% closer to your emergency fund goal this month",
                    Tone::Success,
                ),
            ],
        }
    }
}
