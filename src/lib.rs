pub mod advice;
pub mod config;
pub mod detection;
pub mod evaluator;
pub mod message;
pub mod normalizer;
pub mod report;
pub mod scoring;

pub use config::{BrandGroup, KeywordCategory, RuleSet, WeightTier};
pub use evaluator::LinkRiskEvaluator;
pub use message::{LinkVerdict, MessageAnalyzer, MessageReport, MessageRiskLevel};
pub use report::{AnalysisResult, RiskLevel};
