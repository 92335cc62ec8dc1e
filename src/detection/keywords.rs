use super::{Detector, Finding};
use crate::config::RuleSet;
use crate::normalizer::NormalizedUrl;

/// Scans hostname and path for literal scam vocabulary. Every matching
/// keyword contributes its category's tier weight, so a URL stuffed with
/// bait terms accumulates score fast. The aggregate step collapses
/// repeated labels but keeps every weight contribution.
pub struct KeywordDetector;

impl Default for KeywordDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for KeywordDetector {
    fn name(&self) -> &'static str {
        "keywords"
    }

    fn run(&self, url: &NormalizedUrl, rules: &RuleSet) -> Vec<Finding> {
        let mut findings = Vec::new();
        for category in &rules.keyword_categories {
            for keyword in &category.keywords {
                if url.path_and_query.contains(keyword.as_str())
                    || url.host.contains(keyword.as_str())
                {
                    findings.push(Finding::new(
                        keyword.clone(),
                        format!("URL contains scam keyword '{keyword}'"),
                        category.tier.weight(),
                    ));
                }
            }
        }
        findings
    }
}
