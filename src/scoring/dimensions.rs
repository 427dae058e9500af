//! The five sub-scorers.
//!
//! Each scorer is a pure function over part of a profile and returns the
//! sub-score together with the factors that produced it. Weights, thresholds
//! and keyword lists are static tables iterated once per call.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::factors::{bucket, keyword, match_bucket, match_keywords, Bucket, Keyword, Threshold};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// One of the five evaluated dimensions, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Market,
    Team,
    Financial,
    BusinessModel,
    Traction,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Market,
        Dimension::Team,
        Dimension::Financial,
        Dimension::BusinessModel,
        Dimension::Traction,
    ];

    /// Human label, e.g. "Market Potential"
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Market => "Market Potential",
            Dimension::Team => "Team Capability",
            Dimension::Financial => "Financial Health",
            Dimension::BusinessModel => "Business Model",
            Dimension::Traction => "Traction",
        }
    }

    /// Key used for the metric in serialized results
    pub fn metric_key(&self) -> &'static str {
        match self {
            Dimension::Market => "market_potential",
            Dimension::Team => "team_capability",
            Dimension::Financial => "financial_health",
            Dimension::BusinessModel => "business_model",
            Dimension::Traction => "traction",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FactorContribution {
    pub label: String,       // e.g. "Revenue", "Keyword"
    pub description: String, // e.g. "250000 matched '>100000' -> +30"
    pub before: f64,         // Score before this factor
    pub after: f64,          // Score after this factor
}

/// A sub-score and the factors that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub score: f64,
    pub factors: Vec<FactorContribution>,
}

/// Running total for one dimension, recording each step.
struct Tally {
    dimension: Dimension,
    score: f64,
    factors: Vec<FactorContribution>,
}

impl Tally {
    fn new(dimension: Dimension, base: f64) -> Self {
        Self {
            dimension,
            score: base,
            factors: Vec::new(),
        }
    }

    fn add(&mut self, label: &str, description: String, points: f64) {
        let before = self.score;
        self.score += points;
        self.factors.push(FactorContribution {
            label: label.to_string(),
            description,
            before,
            after: self.score,
        });
    }

    fn add_bucket(&mut self, label: &str, buckets: &[Bucket], value: f64) {
        if let Some(b) = match_bucket(buckets, value) {
            let description = format!("{} matched '{}' -> {:+}", value, b.threshold, b.points);
            self.add(label, description, b.points);
        }
    }

    fn add_keywords(&mut self, keywords: &[Keyword], text: &str) {
        for k in match_keywords(keywords, text) {
            self.add("Keyword", format!("matched '{}' -> {:+}", k.text, k.points), k.points);
        }
    }

    fn finish(mut self) -> DimensionScore {
        let clamped = self.score.clamp(MIN_SCORE, MAX_SCORE);
        if clamped != self.score {
            self.factors.push(FactorContribution {
                label: "Clamp".to_string(),
                description: format!("limited to {}-{}", MIN_SCORE, MAX_SCORE),
                before: self.score,
                after: clamped,
            });
        }
        DimensionScore {
            dimension: self.dimension,
            score: clamped,
            factors: self.factors,
        }
    }
}

const MARKET_SIZE: [Bucket; 4] = [
    bucket(Threshold::GreaterEqual(1_000_000_000.0), 90.0),
    bucket(Threshold::GreaterEqual(100_000_000.0), 75.0),
    bucket(Threshold::GreaterEqual(10_000_000.0), 60.0),
    bucket(Threshold::Otherwise, 40.0),
];

/// Market potential from total market size.
pub fn score_market(market_size: f64) -> DimensionScore {
    let mut tally = Tally::new(Dimension::Market, 0.0);
    tally.add_bucket("Market size", &MARKET_SIZE, market_size);
    tally.finish()
}

const TEAM_SIZE: [Bucket; 4] = [
    bucket(Threshold::GreaterEqual(10.0), 25.0),
    bucket(Threshold::GreaterEqual(5.0), 20.0),
    bucket(Threshold::GreaterEqual(2.0), 15.0),
    bucket(Threshold::Otherwise, 10.0),
];

const TEAM_EXPERIENCE: [Keyword; 6] = [
    keyword("years", 12.5),
    keyword("experience", 12.5),
    keyword("founded", 12.5),
    keyword("exit", 12.5),
    keyword("success", 12.5),
    keyword("industry", 12.5),
];

/// Team capability from headcount and a free-text experience description.
pub fn score_team(team_size: u32, experience: &str) -> DimensionScore {
    let mut tally = Tally::new(Dimension::Team, 0.0);
    tally.add_bucket("Team size", &TEAM_SIZE, f64::from(team_size));
    tally.add_keywords(&TEAM_EXPERIENCE, experience);
    tally.finish()
}

const REVENUE: [Bucket; 4] = [
    bucket(Threshold::GreaterThan(1_000_000.0), 40.0),
    bucket(Threshold::GreaterThan(100_000.0), 30.0),
    bucket(Threshold::GreaterThan(10_000.0), 20.0),
    bucket(Threshold::Otherwise, 10.0),
];

const VALUATION_RATIO: [Bucket; 3] = [
    bucket(Threshold::LessThan(10.0), 30.0),
    bucket(Threshold::LessThan(20.0), 20.0),
    bucket(Threshold::Otherwise, 10.0),
];

/// Points for the efficiency component when the ratio is undefined
const DEGENERATE_RATIO_POINTS: f64 = 10.0;

const EQUITY: [Bucket; 3] = [
    bucket(Threshold::LessEqual(15.0), 30.0),
    bucket(Threshold::LessEqual(25.0), 20.0),
    bucket(Threshold::Otherwise, 10.0),
];

/// Implied valuation divided by revenue, or `None` when equity or revenue is
/// zero and the ratio is undefined.
pub fn valuation_ratio(funding_needed: f64, equity_offered: f64, revenue: f64) -> Option<f64> {
    if equity_offered <= 0.0 || revenue <= 0.0 {
        return None;
    }
    let implied_valuation = (funding_needed / equity_offered) * 100.0;
    Some(implied_valuation / revenue)
}

/// Financial health from the funding ask, equity offered and current revenue.
///
/// A zero equity offer or zero revenue leaves the implied-valuation ratio
/// undefined; the efficiency component then falls into its worst bucket.
pub fn score_financial(funding_needed: f64, equity_offered: f64, revenue: f64) -> DimensionScore {
    let mut tally = Tally::new(Dimension::Financial, 0.0);
    tally.add_bucket("Revenue", &REVENUE, revenue);

    match valuation_ratio(funding_needed, equity_offered, revenue) {
        Some(ratio) => tally.add_bucket("Valuation/revenue", &VALUATION_RATIO, ratio),
        None => {
            debug!(
                equity_offered,
                revenue, "valuation ratio undefined, using worst efficiency bucket"
            );
            tally.add(
                "Valuation/revenue",
                format!(
                    "undefined (equity {}, revenue {}) -> {:+}",
                    equity_offered, revenue, DEGENERATE_RATIO_POINTS
                ),
                DEGENERATE_RATIO_POINTS,
            );
        }
    }

    tally.add_bucket("Equity offered", &EQUITY, equity_offered);
    tally.finish()
}

const BUSINESS_BASE: f64 = 50.0;

const BUSINESS_KEYWORDS: [Keyword; 14] = [
    keyword("recurring revenue", 10.0),
    keyword("subscription", 10.0),
    keyword("saas", 10.0),
    keyword("patent", 10.0),
    keyword("proprietary", 10.0),
    keyword("competitive advantage", 10.0),
    keyword("barrier to entry", 10.0),
    keyword("network effect", 10.0),
    keyword("scalable", 10.0),
    keyword("unproven", -10.0),
    keyword("risky", -10.0),
    keyword("uncertain", -10.0),
    keyword("competitive market", -10.0),
    keyword("no advantage", -10.0),
];

/// Business model strength from the model and competition descriptions.
pub fn score_business_model(business_model: &str, competition: &str) -> DimensionScore {
    let text = format!("{} {}", business_model, competition);
    let mut tally = Tally::new(Dimension::BusinessModel, BUSINESS_BASE);
    tally.add_keywords(&BUSINESS_KEYWORDS, &text);
    tally.finish()
}

const TRACTION_BASE: f64 = 50.0;

const TRACTION_KEYWORDS: [Keyword; 8] = [
    keyword("growing", 6.25),
    keyword("growth", 6.25),
    keyword("increase", 6.25),
    keyword("expanding", 6.25),
    keyword("users", 6.25),
    keyword("customers", 6.25),
    keyword("revenue", 6.25),
    keyword("sales", 6.25),
];

/// Traction from a free-text description of growth metrics.
pub fn score_traction(traction_metrics: &str) -> DimensionScore {
    let mut tally = Tally::new(Dimension::Traction, TRACTION_BASE);
    tally.add_keywords(&TRACTION_KEYWORDS, traction_metrics);
    tally.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Market
    #[test]
    fn test_market_buckets() {
        assert_eq!(score_market(5e9).score, 90.0);
        assert_eq!(score_market(1_000_000_000.0).score, 90.0);
        assert_eq!(score_market(999_999_999.0).score, 75.0);
        assert_eq!(score_market(100_000_000.0).score, 75.0);
        assert_eq!(score_market(10_000_000.0).score, 60.0);
        assert_eq!(score_market(9_999_999.0).score, 40.0);
        assert_eq!(score_market(0.0).score, 40.0);
    }

    #[test]
    fn test_market_monotonic() {
        let sizes = [0.0, 5e6, 1e7, 5e7, 1e8, 5e8, 1e9, 1e12];
        let scores: Vec<f64> = sizes.iter().map(|s| score_market(*s).score).collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_market_records_factor() {
        let result = score_market(250_000_000.0);
        assert_eq!(result.factors.len(), 1);
        assert_eq!(result.factors[0].label, "Market size");
        assert_eq!(
            result.factors[0].description,
            "250000000 matched '>=100000000' -> +75"
        );
    }

    // Team
    #[test]
    fn test_team_size_buckets() {
        assert_eq!(score_team(1, "").score, 10.0);
        assert_eq!(score_team(2, "").score, 15.0);
        assert_eq!(score_team(4, "").score, 15.0);
        assert_eq!(score_team(5, "").score, 20.0);
        assert_eq!(score_team(9, "").score, 20.0);
        assert_eq!(score_team(10, "").score, 25.0);
        assert_eq!(score_team(500, "").score, 25.0);
    }

    #[test]
    fn test_team_experience_keywords() {
        let result = score_team(10, "10 years of industry experience, founded two companies");
        // 25 + 4 keywords (years, experience, founded, industry) * 12.5
        assert_eq!(result.score, 75.0);
        let keywords = result.factors.iter().filter(|f| f.label == "Keyword").count();
        assert_eq!(keywords, 4);
    }

    #[test]
    fn test_team_experience_case_insensitive() {
        assert_eq!(score_team(1, "Successful EXIT").score, 35.0);
    }

    #[test]
    fn test_team_all_keywords_reaches_cap() {
        let text = "years of industry experience, founded and had a successful exit";
        let result = score_team(10, text);
        assert_eq!(result.score, 100.0);
        // 25 + 75 = 100 exactly, clamp is a no-op
        assert!(result.factors.iter().all(|f| f.label != "Clamp"));
    }

    // Financial
    #[test]
    fn test_financial_best_case() {
        // revenue >1M: 40, ratio (1M/10*100)/2M = 5: 30, equity 10: 30
        let result = score_financial(1_000_000.0, 10.0, 2_000_000.0);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_financial_revenue_boundaries() {
        // Keep ratio and equity at worst buckets to isolate revenue
        assert_eq!(score_financial(1e12, 50.0, 1_000_000.0).score, 30.0 + 10.0 + 10.0);
        assert_eq!(score_financial(1e12, 50.0, 100_000.0).score, 20.0 + 10.0 + 10.0);
        assert_eq!(score_financial(1e12, 50.0, 10_000.0).score, 10.0 + 10.0 + 10.0);
    }

    #[test]
    fn test_financial_ratio_buckets() {
        // implied valuation = 100k / 20 * 100 = 500k
        // revenue 100k -> ratio 5 -> +30
        assert_eq!(score_financial(100_000.0, 20.0, 100_000.0).score, 20.0 + 30.0 + 20.0);
        // revenue 40k -> ratio 12.5 -> +20
        assert_eq!(score_financial(100_000.0, 20.0, 40_000.0).score, 20.0 + 20.0 + 20.0);
        // revenue 20k -> ratio 25 -> +10
        assert_eq!(score_financial(100_000.0, 20.0, 20_000.0).score, 20.0 + 10.0 + 20.0);
    }

    #[test]
    fn test_financial_equity_buckets() {
        assert_eq!(score_financial(0.0, 15.0, 1.0).score, 10.0 + 30.0 + 30.0);
        assert_eq!(score_financial(0.0, 25.0, 1.0).score, 10.0 + 30.0 + 20.0);
        assert_eq!(score_financial(0.0, 25.5, 1.0).score, 10.0 + 30.0 + 10.0);
    }

    #[test]
    fn test_financial_zero_revenue_uses_worst_ratio_bucket() {
        let result = score_financial(500_000.0, 10.0, 0.0);
        // revenue 10, ratio fallback 10, equity 30
        assert_eq!(result.score, 50.0);
        let ratio = result
            .factors
            .iter()
            .find(|f| f.label == "Valuation/revenue")
            .unwrap();
        assert!(ratio.description.starts_with("undefined"));
    }

    #[test]
    fn test_financial_zero_equity_uses_worst_ratio_bucket() {
        let result = score_financial(500_000.0, 0.0, 2_000_000.0);
        // revenue 40, ratio fallback 10, equity 0 <= 15 -> 30
        assert_eq!(result.score, 80.0);
    }

    #[test]
    fn test_valuation_ratio() {
        assert_eq!(valuation_ratio(100_000.0, 20.0, 100_000.0), Some(5.0));
        assert_eq!(valuation_ratio(100_000.0, 0.0, 100_000.0), None);
        assert_eq!(valuation_ratio(100_000.0, 20.0, 0.0), None);
    }

    // Business model
    #[test]
    fn test_business_model_baseline() {
        assert_eq!(score_business_model("", "").score, 50.0);
    }

    #[test]
    fn test_business_model_positive_keywords() {
        let result = score_business_model("A subscription product", "highly scalable");
        assert_eq!(result.score, 70.0);
    }

    #[test]
    fn test_business_model_negative_keywords() {
        let result = score_business_model("Unproven and risky", "uncertain demand");
        assert_eq!(result.score, 20.0);
    }

    #[test]
    fn test_business_model_keywords_span_both_texts() {
        // "saas" only in the model, "patent" only in the competition text
        let result = score_business_model("B2B SaaS", "Patent pending");
        assert_eq!(result.score, 70.0);
    }

    #[test]
    fn test_business_model_overlapping_keywords_count_independently() {
        // "competitive advantage" (+10), "no advantage" is absent
        assert_eq!(
            score_business_model("", "a clear competitive advantage").score,
            60.0
        );
        // "no advantage" (-10) and "competitive market" (-10)
        assert_eq!(
            score_business_model("", "no advantage in a competitive market").score,
            30.0
        );
    }

    #[test]
    fn test_business_model_clamps_high() {
        let text = "recurring revenue subscription saas patent proprietary \
                    competitive advantage barrier to entry network effect scalable";
        let result = score_business_model(text, "");
        assert_eq!(result.score, 100.0);
        let clamp = result.factors.last().unwrap();
        assert_eq!(clamp.label, "Clamp");
        assert_eq!(clamp.before, 140.0);
        assert_eq!(clamp.after, 100.0);
    }

    #[test]
    fn test_business_model_all_negative_reaches_floor() {
        let text = "unproven risky uncertain competitive market no advantage";
        assert_eq!(score_business_model(text, "").score, 0.0);
    }

    // Traction
    #[test]
    fn test_traction_baseline() {
        assert_eq!(score_traction("").score, 50.0);
    }

    #[test]
    fn test_traction_exact_substrings() {
        // growing, customers, revenue match; "increasing" does not contain "increase"
        let result = score_traction("growing revenue and increasing customers");
        assert_eq!(result.score, 50.0 + 3.0 * 6.25);
    }

    #[test]
    fn test_traction_all_keywords() {
        let text = "growing growth increase expanding users customers revenue sales";
        assert_eq!(score_traction(text).score, 100.0);
    }

    #[test]
    fn test_dimension_order_and_keys() {
        let keys: Vec<_> = Dimension::ALL.iter().map(|d| d.metric_key()).collect();
        assert_eq!(
            keys,
            vec![
                "market_potential",
                "team_capability",
                "financial_health",
                "business_model",
                "traction"
            ]
        );
    }
}
