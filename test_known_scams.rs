#![allow(clippy::uninlined_format_args)]

use clicksafe::report::RiskLevel;
use clicksafe::{LinkRiskEvaluator, MessageAnalyzer, MessageRiskLevel, RuleSet};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Testing known scam and safe examples against the built-in tables...");

    let evaluator = LinkRiskEvaluator::new(RuleSet::default());
    let analyzer = MessageAnalyzer::new(RuleSet::default());
    let mut failures = 0;

    println!("\n=== URL verdicts ===");
    let url_cases: &[(&str, RiskLevel)] = &[
        ("https://bit.ly/abc123", RiskLevel::Suspicious),
        ("http://192.168.1.5/kyc-update", RiskLevel::Scam),
        ("https://paypal-secure-verify.com/login", RiskLevel::Scam),
        ("https://sbi-login-verify.xyz", RiskLevel::Scam),
        ("http://update-kyc-sbi.online/verify.apk", RiskLevel::Scam),
        ("https://www.wikipedia.org/", RiskLevel::Safe),
        ("https://www.rust-lang.org/learn", RiskLevel::Safe),
        ("not a url at all", RiskLevel::Suspicious),
    ];

    for (url, expected) in url_cases {
        let result = evaluator.evaluate(url);
        if result.risk_level == *expected {
            println!(
                "✅ PASS  {} ({}/100)  {}",
                result.risk_level, result.score, url
            );
        } else {
            failures += 1;
            println!(
                "❌ FAIL  expected {}, got {} ({}/100)  {}",
                expected, result.risk_level, result.score, url
            );
        }
    }

    println!("\n=== Worked example ===");
    let example = "https://paypal-secure-verify.com/login";
    let result = evaluator.evaluate(example);
    println!("URL: {}", example);
    println!("Score: {}/100 -> {}", result.score, result.risk_level);
    println!("Indicators: {}", result.indicators.join(", "));
    for advice in &result.advice {
        println!("  {}", advice);
    }

    println!("\n=== Message verdicts ===");
    let message_cases: &[(&str, MessageRiskLevel)] = &[
        (
            "URGENT: Your bank blocked! Verify account now at https://sbi-verify.xyz",
            MessageRiskLevel::HighRisk,
        ),
        (
            "Congratulations you win a lottery prize",
            MessageRiskLevel::MediumRisk,
        ),
        ("Lunch at noon tomorrow?", MessageRiskLevel::Safe),
        ("ok", MessageRiskLevel::Safe),
    ];

    for (text, expected) in message_cases {
        let report = analyzer.analyze(text);
        if report.risk_level == *expected {
            println!(
                "✅ PASS  {} (score {})  {:?}",
                report.risk_level, report.score, text
            );
        } else {
            failures += 1;
            println!(
                "❌ FAIL  expected {}, got {} (score {})  {:?}",
                expected, report.risk_level, report.score, text
            );
        }
    }

    println!();
    if failures > 0 {
        println!("❌ {failures} case(s) failed");
        std::process::exit(1);
    }
    println!("✅ All cases passed");
    Ok(())
}
