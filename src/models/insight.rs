use super::Tone;

/// A hardcoded insight card. Nothing computes these.
#[derive(Debug, Clone)]
pub struct Insight {
    pub title: String,
    pub detail: String,
    pub tone: Tone,
}

impl Insight {
    pub fn new(title: &str, detail: &str, tone: Tone) -> Self {
        Self {
            title: title.to_string(),
            detail: detail.to_string(),
            tone,
        }
    }
}
