use crate::advice;
use crate::config::RuleSet;
use crate::detection::DetectorSet;
use crate::normalizer;
use crate::report::{AnalysisResult, RiskLevel};
use crate::scoring;

/// Score assigned when the input never parses. Sits in the suspicious
/// band; unreadable input is never reported safe.
pub const FALLBACK_SCORE: u32 = 40;

/// The complete scoring pipeline. Holds the rule tables and the detector
/// battery; both are immutable after construction, so one evaluator can
/// serve any number of threads.
pub struct LinkRiskEvaluator {
    rules: RuleSet,
    detectors: DetectorSet,
}

impl Default for LinkRiskEvaluator {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

impl LinkRiskEvaluator {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            detectors: DetectorSet::standard(),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn detector_names(&self) -> Vec<&'static str> {
        self.detectors.names()
    }

    /// Score one candidate URL. Total over its input domain: any string,
    /// including empty or unparseable ones, comes back as a populated
    /// result rather than an error.
    pub fn evaluate(&self, url_text: &str) -> AnalysisResult {
        let url = match normalizer::normalize(url_text) {
            Ok(url) => url,
            Err(e) => {
                log::debug!("Input did not parse as a URL: {}", e);
                return Self::malformed_verdict();
            }
        };

        let findings = self.detectors.run(&url, &self.rules);
        let summary = scoring::aggregate(&findings);
        let risk_level = RiskLevel::from_score(summary.score);

        log::debug!(
            "Evaluated host {} with {} finding(s): score {} -> {}",
            url.host,
            findings.len(),
            summary.score,
            risk_level
        );

        AnalysisResult {
            risk_level,
            score: summary.score,
            indicators: summary.indicators,
            threats: summary.threats,
            advice: advice::for_tier(risk_level),
        }
    }

    fn malformed_verdict() -> AnalysisResult {
        AnalysisResult {
            risk_level: RiskLevel::Suspicious,
            score: FALLBACK_SCORE,
            indicators: vec!["Invalid URL".to_string()],
            threats: vec!["URL format appears invalid or malformed".to_string()],
            advice: advice::for_malformed(),
        }
    }
}
