// src/core/types.rs — Submission and evaluation records

use serde::{Deserialize, Serialize};

/// Themes offered by the submission form. Callers may still pass any other string.
pub const KNOWN_THEMES: [&str; 5] = [
    "Open Event",
    "Sustainability & GreenTech",
    "FinTech Innovation",
    "AI & Machine Learning",
    "Social Impact",
];

pub const DEFAULT_THEME: &str = "Open Event";

/// Snapshot of what the user asked to have judged. Any field may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaSubmission {
    pub title: String,
    pub theme: String,
    pub description: String,
}

impl IdeaSubmission {
    pub fn new(
        title: impl Into<String>,
        theme: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            theme: theme.into(),
            description: description.into(),
        }
    }

    /// True when the theme is one of `KNOWN_THEMES` (exact match).
    pub fn has_known_theme(&self) -> bool {
        KNOWN_THEMES.contains(&self.theme.as_str())
    }
}

/// The structured critique produced by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: String,
    pub impression: String,
    pub strengths: Vec<String>,
    pub risks: Vec<String>,
    pub weakness: String,
    pub improvement: String,
    pub title_suggestions: TitleSuggestions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleSuggestions {
    pub high_score_variations: Vec<String>,
    pub theme_aligned_variations: Vec<String>,
}

impl Evaluation {
    /// Numerator of `score` when it has the `"<integer>/100"` shape.
    pub fn score_value(&self) -> Option<u32> {
        parse_score(&self.score)
    }
}

/// True when `s` is `<digits>/100`. The numerator is not range-checked.
pub fn is_score_format(s: &str) -> bool {
    s.strip_suffix("/100")
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Parse `"72/100"` into `72`. Anything else, including padding, is rejected.
pub fn parse_score(s: &str) -> Option<u32> {
    if !is_score_format(s) {
        return None;
    }
    s.strip_suffix("/100")?.parse().ok()
}
