use rust_decimal::Decimal;

use crate::palette::ColorToken;

/// One slice of the category ring chart.
#[derive(Debug, Clone)]
pub struct CategorySlice {
    pub name: String,
    pub value: Decimal,
    pub color: ColorToken,
}

impl CategorySlice {
    pub fn new(name: &str, value: Decimal, color: ColorToken) -> Self {
        Self {
            name: name.to_string(),
            value,
            color,
        }
    }
}

impl std::fmt::Display for CategorySlice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
