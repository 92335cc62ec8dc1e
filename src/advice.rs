use crate::report::RiskLevel;

/// Advice strings keyed on the verdict tier, finished with the two
/// universal recommendations. Text is fixed; no dynamic content.
pub fn for_tier(level: RiskLevel) -> Vec<String> {
    let mut advice: Vec<String> = Vec::new();

    match level {
        RiskLevel::Scam => {
            advice.push("🛑 DO NOT click this link - it appears to be a scam".to_string());
            advice.push("❌ Do not enter any personal or financial information".to_string());
        }
        RiskLevel::Suspicious => {
            advice.push("⚠️ Be cautious with this link".to_string());
            advice.push("🔍 Hover to see the actual URL before clicking".to_string());
        }
        RiskLevel::Safe => {
            advice.push("✅ This link appears safe".to_string());
            advice.push(
                "🔒 Always verify the domain and HTTPS before entering sensitive info".to_string(),
            );
        }
    }

    advice.push(
        "📞 If unsure, contact the organization directly using a known phone number".to_string(),
    );
    advice.push("🚨 Report suspicious links to cyber.nic.in".to_string());

    advice
}

/// Conservative guidance for input that never parsed. Does not include
/// the universal closers.
pub fn for_malformed() -> Vec<String> {
    vec![
        "⚠️ This URL cannot be parsed properly".to_string(),
        "🛑 Do not click on malformed URLs".to_string(),
        "📋 Copy the full URL and check carefully before visiting".to_string(),
    ]
}
