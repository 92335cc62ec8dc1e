use crate::config::RuleSet;
use crate::evaluator::LinkRiskEvaluator;
use crate::report::AnalysisResult;
use regex::Regex;
use serde::{Deserialize, Serialize};

const KEYWORD_WEIGHT: u32 = 2;
const LINK_WEIGHT: u32 = 3;
const SHORT_MESSAGE_WEIGHT: u32 = 1;
const SHORT_MESSAGE_LEN: usize = 15;

pub const HIGH_RISK_THRESHOLD: u32 = 6;
pub const MEDIUM_RISK_THRESHOLD: u32 = 3;

/// Verdict tiers for free-form messages. These use their own scale; the
/// message score is not comparable to a URL score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MessageRiskLevel {
    Safe,
    #[serde(rename = "Medium Risk")]
    MediumRisk,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl MessageRiskLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            MessageRiskLevel::HighRisk
        } else if score >= MEDIUM_RISK_THRESHOLD {
            MessageRiskLevel::MediumRisk
        } else {
            MessageRiskLevel::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRiskLevel::Safe => "Safe",
            MessageRiskLevel::MediumRisk => "Medium Risk",
            MessageRiskLevel::HighRisk => "High Risk",
        }
    }
}

impl std::fmt::Display for MessageRiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One extracted link together with its full URL verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkVerdict {
    pub url: String,
    pub analysis: AnalysisResult,
}

/// Verdict for one message: the message-level score and reasons, the
/// standing awareness tips, and a full URL verdict for every link found
/// in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageReport {
    pub risk_level: MessageRiskLevel,
    pub score: u32,
    pub reasons: Vec<String>,
    pub awareness_tips: Vec<String>,
    pub link_reports: Vec<LinkVerdict>,
}

/// The standing education block attached to every message verdict.
pub fn awareness_tips() -> Vec<String> {
    vec![
        "Never click unknown links".to_string(),
        "Do not share OTP or bank details".to_string(),
        "Verify sender identity".to_string(),
        "Avoid urgent payment requests".to_string(),
    ]
}

/// Scores free-form text (SMS, chat, email body) for scam tells, then
/// hands every embedded link to the URL pipeline for its own verdict.
/// Link verdicts are informational and never change the message score.
pub struct MessageAnalyzer {
    link_pattern: Regex,
    link_evaluator: LinkRiskEvaluator,
}

impl Default for MessageAnalyzer {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

impl MessageAnalyzer {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            // Lowercase scheme only: matching runs over the raw text.
            link_pattern: Regex::new(r"https?://\S+").unwrap(),
            link_evaluator: LinkRiskEvaluator::new(rules),
        }
    }

    pub fn analyze(&self, text: &str) -> MessageReport {
        let text_lower = text.to_lowercase();
        let mut score: u32 = 0;
        let mut reasons: Vec<String> = Vec::new();

        for word in &self.link_evaluator.rules().message_keywords {
            if text_lower.contains(word.as_str()) {
                score += KEYWORD_WEIGHT;
                reasons.push(format!("Suspicious keyword detected: '{word}'"));
            }
        }

        let links: Vec<&str> = self
            .link_pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .collect();
        if !links.is_empty() {
            score += LINK_WEIGHT;
            reasons.push("Message contains suspicious links".to_string());
        }

        if text.chars().count() < SHORT_MESSAGE_LEN {
            score += SHORT_MESSAGE_WEIGHT;
            reasons.push("Very short message".to_string());
        }

        let risk_level = MessageRiskLevel::from_score(score);
        log::debug!(
            "Analyzed message ({} chars, {} link(s)): score {} -> {}",
            text.chars().count(),
            links.len(),
            score,
            risk_level
        );

        let link_reports = links
            .iter()
            .map(|link| LinkVerdict {
                url: link.to_string(),
                analysis: self.link_evaluator.evaluate(link),
            })
            .collect();

        MessageReport {
            risk_level,
            score,
            reasons,
            awareness_tips: awareness_tips(),
            link_reports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RiskLevel;

    #[test]
    fn keywords_score_two_each() {
        let analyzer = MessageAnalyzer::default();
        // Exactly 15 chars, so the short-message bonus stays out.
        let report = analyzer.analyze("URGENT: you win");

        assert_eq!(report.score, 4);
        assert_eq!(report.risk_level, MessageRiskLevel::MediumRisk);
        assert_eq!(report.reasons.len(), 2);
        assert!(report.reasons[0].contains("urgent"));
    }

    #[test]
    fn embedded_link_adds_three_once() {
        let analyzer = MessageAnalyzer::default();
        let report = analyzer.analyze("visit https://example.com today");

        assert_eq!(report.score, 3);
        assert_eq!(report.risk_level, MessageRiskLevel::MediumRisk);
        assert_eq!(
            report.reasons,
            vec!["Message contains suspicious links".to_string()]
        );
        assert_eq!(report.link_reports.len(), 1);
        assert_eq!(report.link_reports[0].url, "https://example.com");
        assert_eq!(report.link_reports[0].analysis.risk_level, RiskLevel::Safe);
    }

    #[test]
    fn multiple_links_still_add_three_but_each_gets_a_verdict() {
        let analyzer = MessageAnalyzer::default();
        let report =
            analyzer.analyze("see https://bit.ly/a and also https://example.com/page today");

        assert_eq!(report.score, 3);
        assert_eq!(report.link_reports.len(), 2);
        assert!(report.link_reports[0]
            .analysis
            .indicators
            .contains(&"URL Shortener".to_string()));
    }

    #[test]
    fn short_message_gets_one_point() {
        let analyzer = MessageAnalyzer::default();
        let report = analyzer.analyze("hi");

        assert_eq!(report.score, 1);
        assert_eq!(report.risk_level, MessageRiskLevel::Safe);
        assert_eq!(report.reasons, vec!["Very short message".to_string()]);
    }

    #[test]
    fn empty_message_counts_as_short() {
        let analyzer = MessageAnalyzer::default();
        let report = analyzer.analyze("");

        assert_eq!(report.score, 1);
        assert_eq!(report.risk_level, MessageRiskLevel::Safe);
    }

    #[test]
    fn three_keywords_reach_high_risk() {
        let analyzer = MessageAnalyzer::default();
        let report = analyzer.analyze("urgent win lottery");

        assert_eq!(report.score, 6);
        assert_eq!(report.risk_level, MessageRiskLevel::HighRisk);
    }

    #[test]
    fn keywords_and_link_cross_the_high_risk_line() {
        let analyzer = MessageAnalyzer::default();
        let report = analyzer.analyze("urgent win https://example.com");

        // 2 + 2 for the keywords, 3 for the link.
        assert_eq!(report.score, 7);
        assert_eq!(report.risk_level, MessageRiskLevel::HighRisk);
        assert_eq!(report.reasons.len(), 3);
    }

    #[test]
    fn loaded_scam_text_is_high_risk() {
        let analyzer = MessageAnalyzer::default();
        let report = analyzer
            .analyze("URGENT: bank blocked! verify account now click now http://evil.xyz");

        // urgent, bank blocked, verify account, click now (2 each) + link.
        assert_eq!(report.score, 11);
        assert_eq!(report.risk_level, MessageRiskLevel::HighRisk);
        assert_eq!(report.link_reports.len(), 1);
    }

    #[test]
    fn uppercase_scheme_is_not_extracted() {
        // Link matching runs over the raw text with a lowercase scheme
        // pattern; shouting the scheme dodges the bonus.
        let analyzer = MessageAnalyzer::default();
        let report = analyzer.analyze("see HTTPS://EVIL.COM for details");

        assert_eq!(report.score, 0);
        assert!(report.link_reports.is_empty());
    }

    #[test]
    fn tips_ride_along_on_every_report() {
        let analyzer = MessageAnalyzer::default();
        let report = analyzer.analyze("completely ordinary message text");

        assert_eq!(report.awareness_tips.len(), 4);
        assert_eq!(report.awareness_tips[0], "Never click unknown links");
    }

    #[test]
    fn analysis_is_deterministic() {
        let analyzer = MessageAnalyzer::default();
        let text = "urgent: verify account at https://sbi-verify.xyz now";
        assert_eq!(analyzer.analyze(text), analyzer.analyze(text));
    }
}
