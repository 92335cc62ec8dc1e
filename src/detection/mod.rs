pub mod brand;
pub mod credential_symbol;
pub mod dangerous_extension;
pub mod ip_literal;
pub mod keywords;
pub mod shortener;
pub mod subdomains;
pub mod suspicious_suffix;
pub mod transport;

use crate::config::RuleSet;
use crate::normalizer::NormalizedUrl;

/// One signal raised by a detector: a short label for display, a human
/// explanation, and the weight it contributes to the aggregate score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub indicator: String,
    pub threat: String,
    pub weight: u32,
}

impl Finding {
    pub fn new(indicator: impl Into<String>, threat: impl Into<String>, weight: u32) -> Self {
        Self {
            indicator: indicator.into(),
            threat: threat.into(),
            weight,
        }
    }
}

/// A single URL check. Detectors are stateless, read the normalized URL
/// and the rule tables, and report zero or more findings. They never
/// fail; a URL that reaches a detector has already parsed.
pub trait Detector: Send + Sync {
    fn name(&self) -> &'static str;
    fn run(&self, url: &NormalizedUrl, rules: &RuleSet) -> Vec<Finding>;
}

/// The fixed battery of checks, in evaluation order. The order is part
/// of the contract: findings always come back in this sequence.
pub struct DetectorSet {
    detectors: Vec<Box<dyn Detector>>,
}

impl DetectorSet {
    pub fn standard() -> Self {
        Self {
            detectors: vec![
                Box::new(shortener::ShortenerDetector::new()),
                Box::new(dangerous_extension::DangerousExtensionDetector::new()),
                Box::new(ip_literal::IpLiteralDetector::new()),
                Box::new(suspicious_suffix::SuspiciousSuffixDetector::new()),
                Box::new(subdomains::SubdomainDetector::new()),
                Box::new(credential_symbol::CredentialSymbolDetector::new()),
                Box::new(transport::TransportDetector::new()),
                Box::new(keywords::KeywordDetector::new()),
                Box::new(brand::BrandDetector::new()),
            ],
        }
    }

    pub fn run(&self, url: &NormalizedUrl, rules: &RuleSet) -> Vec<Finding> {
        let mut findings = Vec::new();
        for detector in &self.detectors {
            let hits = detector.run(url, rules);
            for hit in &hits {
                log::debug!(
                    "Detector {} fired: {} (+{})",
                    detector.name(),
                    hit.indicator,
                    hit.weight
                );
            }
            findings.extend(hits);
        }
        findings
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}
