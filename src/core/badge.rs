use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative label for a compatibility score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CompatibilityBadge {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl CompatibilityBadge {
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => CompatibilityBadge::Excellent,
            70..=84 => CompatibilityBadge::Good,
            55..=69 => CompatibilityBadge::Fair,
            _ => CompatibilityBadge::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompatibilityBadge::Excellent => "Excellent",
            CompatibilityBadge::Good => "Good",
            CompatibilityBadge::Fair => "Fair",
            CompatibilityBadge::Poor => "Poor",
        }
    }
}

impl fmt::Display for CompatibilityBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
