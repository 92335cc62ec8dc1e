use super::{Detector, Finding};
use crate::config::RuleSet;
use crate::normalizer::NormalizedUrl;

const WEIGHT: u32 = 15;

/// Plain-http links lose transport encryption. Bare domains were already
/// upgraded to https during normalization, so this only fires when the
/// input itself insisted on http.
pub struct TransportDetector;

impl Default for TransportDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl TransportDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for TransportDetector {
    fn name(&self) -> &'static str {
        "transport"
    }

    fn run(&self, url: &NormalizedUrl, _rules: &RuleSet) -> Vec<Finding> {
        if url.scheme == "http" {
            vec![Finding::new(
                "No HTTPS",
                "Site does not use HTTPS encryption",
                WEIGHT,
            )]
        } else {
            Vec::new()
        }
    }
}
