use super::{Detector, Finding};
use crate::config::RuleSet;
use crate::normalizer::NormalizedUrl;
use regex::Regex;

const WEIGHT: u32 = 30;

/// Matches dotted-quad sequences in the hostname. The pattern is loose:
/// an IP buried inside a longer hostname still fires.
pub struct IpLiteralDetector {
    ip_pattern: Regex,
}

impl Default for IpLiteralDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl IpLiteralDetector {
    pub fn new() -> Self {
        Self {
            ip_pattern: Regex::new(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").unwrap(),
        }
    }
}

impl Detector for IpLiteralDetector {
    fn name(&self) -> &'static str {
        "ip_literal"
    }

    fn run(&self, url: &NormalizedUrl, _rules: &RuleSet) -> Vec<Finding> {
        if self.ip_pattern.is_match(&url.host) {
            vec![Finding::new(
                "IP Address",
                "URL uses IP address instead of domain name",
                WEIGHT,
            )]
        } else {
            Vec::new()
        }
    }
}
