use super::{Detector, Finding};
use crate::config::RuleSet;
use crate::normalizer::NormalizedUrl;

const WEIGHT: u32 = 30;

/// Flags hosts that belong to known link-shortening services.
pub struct ShortenerDetector;

impl Default for ShortenerDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortenerDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for ShortenerDetector {
    fn name(&self) -> &'static str {
        "shortener"
    }

    fn run(&self, url: &NormalizedUrl, rules: &RuleSet) -> Vec<Finding> {
        let is_shortener = rules
            .shorteners
            .iter()
            .any(|shortener| url.host.contains(shortener.as_str()));

        if is_shortener {
            vec![Finding::new(
                "URL Shortener",
                "URL shorteners hide the real destination",
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
    fn flags_known_shortener() {
        let detector = ShortenerDetector::new();
        let rules = RuleSet::default();
        let url = normalize("https://bit.ly/abc123").unwrap();

        let findings = detector.run(&url, &rules);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].indicator, "URL Shortener");
        assert_eq!(findings[0].weight, 30);
    }

    #[test]
    fn shortener_match_is_substring_of_host() {
        let detector = ShortenerDetector::new();
        let rules = RuleSet::default();
        let url = normalize("https://evil.bit.ly.example.com/").unwrap();

        assert_eq!(detector.run(&url, &rules).len(), 1);
    }

    #[test]
    fn ignores_regular_domain() {
        let detector = ShortenerDetector::new();
        let rules = RuleSet::default();
        let url = normalize("https://www.wikipedia.org/").unwrap();

        assert!(detector.run(&url, &rules).is_empty());
    }
}
