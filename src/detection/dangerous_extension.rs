use super::{Detector, Finding};
use crate::config::RuleSet;
use crate::normalizer::NormalizedUrl;

const WEIGHT: u32 = 25;

/// Looks for executable or archive suffixes anywhere in the full URL,
/// query included. A link handing out an .apk or .exe is treated as a
/// payload drop regardless of where the suffix appears.
pub struct DangerousExtensionDetector;

impl Default for DangerousExtensionDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DangerousExtensionDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for DangerousExtensionDetector {
    fn name(&self) -> &'static str {
        "dangerous_extension"
    }

    fn run(&self, url: &NormalizedUrl, rules: &RuleSet) -> Vec<Finding> {
        let has_dangerous_ext = rules
            .dangerous_extensions
            .iter()
            .any(|ext| url.full_url.contains(ext.as_str()));

        if has_dangerous_ext {
            vec![Finding::new(
                "Dangerous File",
                "URL contains executable or archive file",
                WEIGHT,
            )]
        } else {
            Vec::new()
        }
    }
}
