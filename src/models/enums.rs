use serde::{Deserialize, Serialize};

/// Confidence bucket shown on result cards.
///
/// Boundaries are inclusive on the Medium side: exactly 0.4 and exactly
/// 0.7 both bucket as Medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceBucket {
    High,
    Medium,
    Low,
}

impl ConfidenceBucket {
    /// Bucket a confidence score: >0.7 High, 0.4–0.7 Medium, <0.4 Low.
    pub fn from_confidence(confidence: f32) -> Self {
        if confidence > 0.7 {
            Self::High
        } else if confidence >= 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for ConfidenceBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
