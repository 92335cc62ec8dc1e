use crate::detection::Finding;

pub const MAX_SCORE: u32 = 100;

/// Folded view of a finding list: the clamped score plus the display
/// lists the final report carries.
#[derive(Debug, Clone)]
pub struct ScoreSummary {
    pub score: u32,
    pub indicators: Vec<String>,
    pub threats: Vec<String>,
}

/// Sum weights and clamp to [0, 100]. Indicator labels are deduplicated
/// in first-seen order; weights still count once per finding, so a label
/// that fires twice scores twice while displaying once. Threat texts are
/// kept verbatim in finding order.
pub fn aggregate(findings: &[Finding]) -> ScoreSummary {
    let mut score: u32 = 0;
    let mut indicators: Vec<String> = Vec::new();
    let mut threats: Vec<String> = Vec::new();

    for finding in findings {
        score += finding.weight;
        if !indicators.contains(&finding.indicator) {
            indicators.push(finding.indicator.clone());
        }
        threats.push(finding.threat.clone());
    }

    ScoreSummary {
        score: score.min(MAX_SCORE),
        indicators,
        threats,
    }
}
