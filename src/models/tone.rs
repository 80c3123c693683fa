use crate::palette::ColorToken;

/// Accent used by goals and insight cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Warning,
}

impl Tone {
    pub fn token(&self) -> ColorToken {
        match self {
            Self::Success => ColorToken::Success,
            Self::Info => ColorToken::Info,
            Self::Warning => ColorToken::Warning,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
