use serde::{Deserialize, Serialize};

/// Weight tier attached to a keyword category. The numeric weights are
/// fixed; a category opts into one of the three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightTier {
    High,
    Medium,
    Low,
}

impl WeightTier {
    pub fn weight(self) -> u32 {
        match self {
            WeightTier::High => 25,
            WeightTier::Medium => 20,
            WeightTier::Low => 15,
        }
    }
}

/// Named group of scam-keyword literals sharing one weight tier.
/// Membership is fixed configuration, never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeywordCategory {
    pub name: String,
    pub tier: WeightTier,
    pub keywords: Vec<String>,
}

/// Named group of brand tokens used for impersonation detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrandGroup {
    pub name: String,
    pub brands: Vec<String>,
}

/// The full set of pattern tables the detectors consult. Built once at
/// startup and passed into the evaluator; a caller can load a custom set
/// from YAML or inject a minimal one in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSet {
    pub keyword_categories: Vec<KeywordCategory>,
    pub brand_groups: Vec<BrandGroup>,
    pub shorteners: Vec<String>,
    pub dangerous_extensions: Vec<String>,
    pub message_keywords: Vec<String>,
}

impl RuleSet {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let rules: RuleSet = serde_yaml::from_str(&content)?;
        Ok(rules)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn category(name: &str, tier: WeightTier, keywords: &[&str]) -> KeywordCategory {
    KeywordCategory {
        name: name.to_string(),
        tier,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

fn brand_group(name: &str, brands: &[&str]) -> BrandGroup {
    BrandGroup {
        name: name.to_string(),
        brands: brands.iter().map(|b| b.to_string()).collect(),
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet {
            keyword_categories: vec![
                category(
                    "verification",
                    WeightTier::High,
                    &[
                        "verify",
                        "verify-now",
                        "verifyaccount",
                        "verify_account",
                        "verification",
                        "reverify",
                    ],
                ),
                category(
                    "update",
                    WeightTier::Medium,
                    &["update", "update-now", "updateaccount", "update_account"],
                ),
                category(
                    "security",
                    WeightTier::Medium,
                    &["secure", "security", "security-check", "securelogin"],
                ),
                category(
                    "confirmation",
                    WeightTier::Low,
                    &["confirm", "confirmation", "confirmemail", "confirm_email"],
                ),
                category(
                    "login",
                    WeightTier::High,
                    &["login", "signin", "sign-in", "sign_in", "auth", "authenticate"],
                ),
                category(
                    "password",
                    WeightTier::Low,
                    &[
                        "reset",
                        "reset-password",
                        "password-reset",
                        "resetpassword",
                        "change-password",
                    ],
                ),
                category(
                    "account",
                    WeightTier::Low,
                    &[
                        "unlock",
                        "account-unlock",
                        "accountunlock",
                        "suspended",
                        "blocked",
                        "hold",
                    ],
                ),
                category(
                    "kyc",
                    WeightTier::High,
                    &["kyc", "kyc-update", "kycupdate", "aadhar", "aadhaar", "pan", "pan-verify"],
                ),
                category(
                    "otp",
                    WeightTier::High,
                    &["otp", "otp-verify", "validate", "validation"],
                ),
                category(
                    "payment",
                    WeightTier::Medium,
                    &["billing", "payment", "pay", "upi", "bank", "wallet", "transaction"],
                ),
                category(
                    "reward",
                    WeightTier::Low,
                    &["refund", "cashback", "reward", "bonus", "prize", "lottery", "winner"],
                ),
                category(
                    "urgency",
                    WeightTier::Low,
                    &[
                        "claim",
                        "claim-now",
                        "free",
                        "offer",
                        "limited",
                        "urgent",
                        "hurry",
                        "immediate",
                    ],
                ),
                category(
                    "alert",
                    WeightTier::Low,
                    &["alert", "warning", "risk", "fraud", "suspicious", "unusual"],
                ),
            ],
            brand_groups: vec![
                brand_group(
                    "banking",
                    &["sbi", "hdfc", "icici", "axis", "boi", "yes", "kotak", "idbi"],
                ),
                brand_group(
                    "payments",
                    &["paypal", "paytm", "phonepe", "gpay", "google-pay", "amazon-pay"],
                ),
                brand_group(
                    "ecommerce",
                    &["amazon", "flipkart", "meesho", "snapdeal", "myntra"],
                ),
                brand_group(
                    "social",
                    &["facebook", "instagram", "whatsapp", "telegram", "twitter"],
                ),
                brand_group("telecom", &["jio", "airtel", "vi", "bsnl", "mtnl"]),
                brand_group(
                    "government",
                    &["gov", "india", "income-tax", "uidai", "ntas", "portal"],
                ),
            ],
            shorteners: [
                "bit.ly",
                "tinyurl.com",
                "goo.gl",
                "t.co",
                "cutt.ly",
                "rebrand.ly",
                "shorturl.at",
                "is.gd",
                "tiny.cc",
                "lnk.to",
                "vil.ltd",
                "short.link",
                "clck.ru",
                "ow.ly",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            dangerous_extensions: [
                ".apk", ".exe", ".zip", ".rar", ".iso", ".js", ".html", ".bat", ".cmd",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            message_keywords: [
                "urgent",
                "win",
                "lottery",
                "free",
                "click now",
                "verify account",
                "limited time",
                "payment required",
                "offer expires",
                "bank blocked",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}
