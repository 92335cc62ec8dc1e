use super::{Detector, Finding};
use crate::config::RuleSet;
use crate::normalizer::NormalizedUrl;

const WEIGHT: u32 = 15;

/// Hyphenated tokens phishers bolt onto lookalike domains. The list is a
/// fixed part of the check rather than rule configuration.
const SUSPICIOUS_SUFFIXES: [&str; 10] = [
    "-login",
    "-secure",
    "-verification",
    "-support",
    "-helpdesk",
    "-update",
    "-service",
    "-alert",
    "-check",
    "-notice",
];

pub struct SuspiciousSuffixDetector;

impl Default for SuspiciousSuffixDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SuspiciousSuffixDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for SuspiciousSuffixDetector {
    fn name(&self) -> &'static str {
        "suspicious_suffix"
    }

    fn run(&self, url: &NormalizedUrl, _rules: &RuleSet) -> Vec<Finding> {
        let has_suspicious_suffix = SUSPICIOUS_SUFFIXES
            .iter()
            .any(|suffix| url.host.contains(suffix));

        if has_suspicious_suffix {
            vec![Finding::new(
                "Suspicious Domain Pattern",
                "Domain name contains suspicious patterns",
                WEIGHT,
            )]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;

    #[test]
    fn flags_hyphenated_phishing_token() {
        let detector = SuspiciousSuffixDetector::new();
        let rules = RuleSet::default();
        let url = normalize("https://paypal-secure-verify.com/login").unwrap();

        let findings = detector.run(&url, &rules);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].indicator, "Suspicious Domain Pattern");
        assert_eq!(findings[0].weight, 15);
    }

    #[test]
    fn one_finding_even_with_several_tokens() {
        let detector = SuspiciousSuffixDetector::new();
        let rules = RuleSet::default();
        let url = normalize("https://bank-login-support.example/").unwrap();

        assert_eq!(detector.run(&url, &rules).len(), 1);
    }

    #[test]
    fn token_must_include_hyphen() {
        let detector = SuspiciousSuffixDetector::new();
        let rules = RuleSet::default();
        // "login" without the leading hyphen is the keyword detector's job.
        let url = normalize("https://login.example.com/").unwrap();

        assert!(detector.run(&url, &rules).is_empty());
    }
}
