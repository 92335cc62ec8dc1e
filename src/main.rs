use clap::{Arg, Command};
use clicksafe::report::{AnalysisResult, RiskLevel};
use clicksafe::{LinkRiskEvaluator, MessageAnalyzer, MessageRiskLevel, RuleSet};
use log::LevelFilter;
use std::process;

fn main() {
    let matches = Command::new("clicksafe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Deterministic URL and message risk scoring for scam awareness")
        .long_about(
            "ClickSafe scores candidate links and free-form messages against a fixed\n\
             battery of scam checks:\n\
             • URL analysis: shorteners, payload extensions, IP hosts, lookalike\n\
               domains, spoofing tricks, scam keywords, brand impersonation\n\
             • Message analysis: scam vocabulary, embedded links, length tells\n\
             • Always produces a verdict - malformed input gets a conservative one",
        )
        .arg(
            Arg::new("rules")
                .short('r')
                .long("rules")
                .value_name("FILE")
                .help("Rule table file path")
                .default_value("/etc/clicksafe.yaml"),
        )
        .arg(
            Arg::new("generate-rules")
                .long("generate-rules")
                .value_name("FILE")
                .help("Write the built-in rule tables to a file")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("test-rules")
                .long("test-rules")
                .help("Validate rule tables and print a summary")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .value_name("URL")
                .help("Analyze a single URL")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("batch")
                .long("batch")
                .value_name("FILE")
                .help("Analyze URLs from a file, one per line")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("message")
                .short('m')
                .long("message")
                .value_name("TEXT")
                .help("Analyze a text message for scam tells")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("message-file")
                .long("message-file")
                .value_name("FILE")
                .help("Analyze a message read from a file")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit JSON instead of formatted text")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging with per-detector detail")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    // Initialize logger based on verbose flag
    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(path) = matches.get_one::<String>("generate-rules") {
        generate_default_rules(path);
        return;
    }

    let rules_path = matches.get_one::<String>("rules").unwrap();
    let rules = match load_rules(rules_path) {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("Error loading rule tables: {e}");
            process::exit(1);
        }
    };

    let json = matches.get_flag("json");

    if matches.get_flag("test-rules") {
        test_rules(&rules);
        return;
    }

    if let Some(url) = matches.get_one::<String>("url") {
        let evaluator = LinkRiskEvaluator::new(rules);
        let result = evaluator.evaluate(url);
        if json {
            print_json(&result);
        } else {
            print_url_result(url, &result);
        }
        return;
    }

    if let Some(path) = matches.get_one::<String>("batch") {
        run_batch(rules, path, json);
        return;
    }

    if let Some(text) = matches.get_one::<String>("message") {
        analyze_message(rules, text, json);
        return;
    }

    if let Some(path) = matches.get_one::<String>("message-file") {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error reading message file: {e}");
                process::exit(1);
            }
        };
        analyze_message(rules, text.trim_end_matches('\n'), json);
        return;
    }

    eprintln!("Nothing to analyze. Use --url, --message, --message-file or --batch (see --help).");
    process::exit(2);
}

fn load_rules(path: &str) -> anyhow::Result<RuleSet> {
    if std::path::Path::new(path).exists() {
        RuleSet::from_file(path)
    } else {
        log::warn!("Rule file '{path}' not found, using built-in tables");
        Ok(RuleSet::default())
    }
}

fn generate_default_rules(path: &str) {
    let rules = RuleSet::default();
    match rules.to_file(path) {
        Ok(()) => {
            println!("Built-in rule tables written to: {path}");
            println!("Edit the file and pass it back with --rules.");
        }
        Err(e) => {
            eprintln!("Error writing rule file: {e}");
            process::exit(1);
        }
    }
}

fn test_rules(rules: &RuleSet) {
    println!("🔍 Testing rule tables...");
    println!();

    println!("Keyword categories: {}", rules.keyword_categories.len());
    for category in &rules.keyword_categories {
        println!(
            "  {}: {} keyword(s), weight {}",
            category.name,
            category.keywords.len(),
            category.tier.weight()
        );
    }
    println!("Brand groups: {}", rules.brand_groups.len());
    for group in &rules.brand_groups {
        println!("  {}: {} brand(s)", group.name, group.brands.len());
    }
    println!("Shorteners: {}", rules.shorteners.len());
    println!("Dangerous extensions: {}", rules.dangerous_extensions.len());
    println!("Message keywords: {}", rules.message_keywords.len());
    println!();

    let evaluator = LinkRiskEvaluator::new(rules.clone());
    println!("Detectors: {}", evaluator.detector_names().join(", "));
    println!("✅ Rule tables validated");
}

fn tier_badge(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Scam => "🛑",
        RiskLevel::Suspicious => "⚠️",
        RiskLevel::Safe => "✅",
    }
}

fn message_badge(level: MessageRiskLevel) -> &'static str {
    match level {
        MessageRiskLevel::HighRisk => "🛑",
        MessageRiskLevel::MediumRisk => "⚠️",
        MessageRiskLevel::Safe => "✅",
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("Error serializing result: {e}");
            process::exit(1);
        }
    }
}

fn print_url_result(url: &str, result: &AnalysisResult) {
    println!("🔍 Analyzing: {url}");
    println!();
    println!(
        "{} Risk level: {} (score {}/100)",
        tier_badge(result.risk_level),
        result.risk_level,
        result.score
    );

    if !result.indicators.is_empty() {
        println!();
        println!("Indicators:");
        for indicator in &result.indicators {
            println!("  • {indicator}");
        }
    }

    if !result.threats.is_empty() {
        println!();
        println!("Threats:");
        for threat in &result.threats {
            println!("  • {threat}");
        }
    }

    println!();
    println!("Safety advice:");
    for advice in &result.advice {
        println!("  {advice}");
    }
}

fn run_batch(rules: RuleSet, path: &str, json: bool) {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading batch file: {e}");
            process::exit(1);
        }
    };

    let evaluator = LinkRiskEvaluator::new(rules);
    let urls: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    if json {
        let reports: Vec<serde_json::Value> = urls
            .iter()
            .map(|url| {
                serde_json::json!({
                    "url": url,
                    "analysis": evaluator.evaluate(url),
                })
            })
            .collect();
        print_json(&reports);
        return;
    }

    let mut scam = 0;
    let mut suspicious = 0;
    let mut safe = 0;
    for url in &urls {
        let result = evaluator.evaluate(url);
        match result.risk_level {
            RiskLevel::Scam => scam += 1,
            RiskLevel::Suspicious => suspicious += 1,
            RiskLevel::Safe => safe += 1,
        }
        println!(
            "{} {:<10} {:>3}/100  {}",
            tier_badge(result.risk_level),
            result.risk_level.to_string(),
            result.score,
            url
        );
    }
    println!();
    println!(
        "Analyzed {} URL(s): {} scam, {} suspicious, {} safe",
        urls.len(),
        scam,
        suspicious,
        safe
    );
}

fn analyze_message(rules: RuleSet, text: &str, json: bool) {
    if text.trim().is_empty() {
        eprintln!("Error: Message is required");
        process::exit(1);
    }

    let analyzer = MessageAnalyzer::new(rules);
    let report = analyzer.analyze(text);

    if json {
        print_json(&report);
        return;
    }

    println!("🔍 Analyzing message ({} chars)", text.chars().count());
    println!();
    println!(
        "{} Risk level: {} (score {})",
        message_badge(report.risk_level),
        report.risk_level,
        report.score
    );

    if !report.reasons.is_empty() {
        println!();
        println!("Reasons:");
        for reason in &report.reasons {
            println!("  • {reason}");
        }
    }

    if !report.link_reports.is_empty() {
        println!();
        println!("Links found:");
        for (i, link) in report.link_reports.iter().enumerate() {
            println!(
                "  [{}] {} {} ({}/100)  {}",
                i + 1,
                tier_badge(link.analysis.risk_level),
                link.analysis.risk_level,
                link.analysis.score,
                link.url
            );
            for indicator in &link.analysis.indicators {
                println!("      • {indicator}");
            }
        }
    }

    println!();
    println!("Awareness tips:");
    for tip in &report.awareness_tips {
        println!("  • {tip}");
    }
}
