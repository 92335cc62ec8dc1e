use super::{Detector, Finding};
use crate::config::RuleSet;
use crate::normalizer::NormalizedUrl;

const WEIGHT: u32 = 25;

/// An '@' anywhere in the URL. Browsers treat everything before it as
/// userinfo, so "paypal.com@evil.com" lands on evil.com while the eye
/// reads paypal.com.
pub struct CredentialSymbolDetector;

impl Default for CredentialSymbolDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialSymbolDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for CredentialSymbolDetector {
    fn name(&self) -> &'static str {
        "credential_symbol"
    }

    fn run(&self, url: &NormalizedUrl, _rules: &RuleSet) -> Vec<Finding> {
        if url.full_url.contains('@') {
            vec![Finding::new(
                "Email Spoofing",
                "URL contains @ symbol (email spoofing technique)",
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
    fn flags_userinfo_spoof() {
        let detector = CredentialSymbolDetector::new();
        let rules = RuleSet::default();
        let url = normalize("https://paypal.com@evil.com/login").unwrap();

        let findings = detector.run(&url, &rules);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].indicator, "Email Spoofing");
        assert_eq!(findings[0].weight, 25);
    }

    #[test]
    fn flags_at_symbol_in_query() {
        let detector = CredentialSymbolDetector::new();
        let rules = RuleSet::default();
        let url = normalize("https://example.com/unsubscribe?user=a@b.com").unwrap();

        assert_eq!(detector.run(&url, &rules).len(), 1);
    }

    #[test]
    fn clean_url_passes() {
        let detector = CredentialSymbolDetector::new();
        let rules = RuleSet::default();
        let url = normalize("https://example.com/contact").unwrap();

        assert!(detector.run(&url, &rules).is_empty());
    }
}
