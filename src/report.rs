use serde::{Deserialize, Serialize};

/// Verdict tiers, ordered from benign to hostile so callers can compare
/// them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Safe,
    Suspicious,
    Scam,
}

pub const SCAM_THRESHOLD: u32 = 51;
pub const SUSPICIOUS_THRESHOLD: u32 = 26;

impl RiskLevel {
    /// Map an aggregate score onto a tier. The cutoffs are part of the
    /// product contract and do not move with configuration.
    pub fn from_score(score: u32) -> Self {
        if score >= SCAM_THRESHOLD {
            RiskLevel::Scam
        } else if score >= SUSPICIOUS_THRESHOLD {
            RiskLevel::Suspicious
        } else {
            RiskLevel::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "SAFE",
            RiskLevel::Suspicious => "SUSPICIOUS",
            RiskLevel::Scam => "SCAM",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full verdict for one URL. Serializes for the JSON output mode; the
/// plain CLI renders the same fields by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub risk_level: RiskLevel,
    pub score: u32,
    /// Short labels naming what fired, deduplicated, in detector order.
    pub indicators: Vec<String>,
    /// One explanation per finding, in detector order.
    pub threats: Vec<String>,
    pub advice: Vec<String>,
}
