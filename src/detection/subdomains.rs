use super::{Detector, Finding};
use crate::config::RuleSet;
use crate::normalizer::NormalizedUrl;

const WEIGHT: u32 = 15;
const MAX_LABELS: usize = 4;

/// Counts dot-separated labels in the hostname. More than four labels
/// reads as deliberate nesting to bury the real domain.
pub struct SubdomainDetector;

impl Default for SubdomainDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SubdomainDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for SubdomainDetector {
    fn name(&self) -> &'static str {
        "subdomains"
    }

    fn run(&self, url: &NormalizedUrl, _rules: &RuleSet) -> Vec<Finding> {
        let label_count = url.host.split('.').count();
        if label_count > MAX_LABELS {
            vec![Finding::new(
                "Excessive Subdomains",
                format!("Too many subdomains ({label_count})"),
                WEIGHT,
            )]
        } else {
            Vec::new()
        }
    }
}
