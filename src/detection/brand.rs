use super::{Detector, Finding};
use crate::config::RuleSet;
use crate::normalizer::NormalizedUrl;

const WEIGHT: u32 = 25;

/// Brand tokens appearing in a hostname the brand does not own. The
/// guard accepts only hosts ending in `<brand>.com` or `<brand>.in`;
/// anything else carrying the token is treated as impersonation.
pub struct BrandDetector;

impl Default for BrandDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl BrandDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for BrandDetector {
    fn name(&self) -> &'static str {
        "brand"
    }

    fn run(&self, url: &NormalizedUrl, rules: &RuleSet) -> Vec<Finding> {
        let mut findings = Vec::new();
        for group in &rules.brand_groups {
            for brand in &group.brands {
                let owned_com = format!("{brand}.com");
                let owned_in = format!("{brand}.in");
                if url.host.contains(brand.as_str())
                    && !url.host.ends_with(&owned_com)
                    && !url.host.ends_with(&owned_in)
                {
                    findings.push(Finding::new(
                        format!("{brand} impersonation"),
                        format!("Domain appears to impersonate {brand}"),
                        WEIGHT,
                    ));
                }
            }
        }
        findings
    }
}
