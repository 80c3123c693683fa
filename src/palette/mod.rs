/// Abstract display color. The UI theme decides what each token looks like;
/// nothing outside `ui::theme` knows about terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    CategoryFood,
    CategoryTransport,
    CategoryEntertainment,
    CategoryEducation,
    CategoryShopping,
    CategoryHealth,
    Success,
    Info,
    Warning,
    Destructive,
    Primary,
    Muted,
}

impl ColorToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CategoryFood => "category-food",
            Self::CategoryTransport => "category-transport",
            Self::CategoryEntertainment => "category-entertainment",
            Self::CategoryEducation => "category-education",
            Self::CategoryShopping => "category-shopping",
            Self::CategoryHealth => "category-health",
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Destructive => "destructive",
            Self::Primary => "primary",
            Self::Muted => "muted",
        }
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category label → token. Exact, case-sensitive matches only.
const CATEGORY_COLORS: &[(&str, ColorToken)] = &[
    ("Food", ColorToken::CategoryFood),
    ("Transport", ColorToken::CategoryTransport),
    ("Entertainment", ColorToken::CategoryEntertainment),
    ("Education", ColorToken::CategoryEducation),
    ("Shopping", ColorToken::CategoryShopping),
    ("Health", ColorToken::CategoryHealth),
    ("Income", ColorToken::Success),
];

/// Resolve the display color for a transaction category.
///
/// Unknown labels, including the empty string and labels that only differ in
/// case from a known category, resolve to [`ColorToken::Muted`].
pub fn color_for(category: &str) -> ColorToken {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, token)| *token)
        .unwrap_or(ColorToken::Muted)
}
