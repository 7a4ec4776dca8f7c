use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundPattern {
    #[default]
    None,
    Dots,
    Grid,
    Lines,
    Waves,
    Circles,
    Triangles,
}

impl BackgroundPattern {
    /// Structured patterns suggested while the user is in a productive streak.
    pub const PRODUCTIVE: [BackgroundPattern; 3] = [
        BackgroundPattern::Dots,
        BackgroundPattern::Grid,
        BackgroundPattern::Lines,
    ];

    /// Softer patterns suggested when activity leans towards leisure.
    pub const RELAXED: [BackgroundPattern; 3] = [
        BackgroundPattern::Waves,
        BackgroundPattern::Circles,
        BackgroundPattern::Triangles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundPattern::None => "none",
            BackgroundPattern::Dots => "dots",
            BackgroundPattern::Grid => "grid",
            BackgroundPattern::Lines => "lines",
            BackgroundPattern::Waves => "waves",
            BackgroundPattern::Circles => "circles",
            BackgroundPattern::Triangles => "triangles",
        }
    }

    pub fn is_productive(&self) -> bool {
        Self::PRODUCTIVE.contains(self)
    }

    pub fn is_relaxed(&self) -> bool {
        Self::RELAXED.contains(self)
    }
}
