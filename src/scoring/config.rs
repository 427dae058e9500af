use serde::{Deserialize, Serialize};

pub const DEFAULT_INSIGHT_THRESHOLD: f64 = 75.0;
pub const DEFAULT_MAX_INSIGHTS: usize = 3;

/// Scoring configuration.
///
/// Every field is optional; omitted fields fall back to the standard
/// evaluation (weights 25/20/20/20/15, insight threshold 75, three insights
/// per list).
///
/// Example YAML:
/// ```yaml
/// scoring:
///   weights:
///     market: 30
///     team: 20
///     financial: 20
///     business_model: 15
///     traction: 15
///   insight_threshold: 70
///   max_insights: 3
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Per-dimension weights as integer percentages (must sum to 100)
    #[serde(default)]
    pub weights: Option<Weights>,

    /// Sub-scores at or above this produce a strength, below it a weakness
    /// and a recommendation
    #[serde(default)]
    pub insight_threshold: Option<f64>,

    /// Maximum entries kept in each insight list
    #[serde(default)]
    pub max_insights: Option<usize>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: Some(Weights::default()),
            insight_threshold: Some(DEFAULT_INSIGHT_THRESHOLD),
            max_insights: Some(DEFAULT_MAX_INSIGHTS),
        }
    }
}

impl ScoringConfig {
    pub fn weights(&self) -> Weights {
        self.weights.clone().unwrap_or_default()
    }

    pub fn insight_threshold(&self) -> f64 {
        self.insight_threshold.unwrap_or(DEFAULT_INSIGHT_THRESHOLD)
    }

    pub fn max_insights(&self) -> usize {
        self.max_insights.unwrap_or(DEFAULT_MAX_INSIGHTS)
    }
}

/// Aggregation weights, in percent.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Weights {
    pub market: u32,
    pub team: u32,
    pub financial: u32,
    pub business_model: u32,
    pub traction: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            market: 25,
            team: 20,
            financial: 20,
            business_model: 20,
            traction: 15,
        }
    }
}

impl Weights {
    /// Weights in dimension evaluation order
    pub fn as_array(&self) -> [u32; 5] {
        [
            self.market,
            self.team,
            self.financial,
            self.business_model,
            self.traction,
        ]
    }

    /// Sum of all weights, widened so user-supplied values cannot overflow
    pub fn total(&self) -> u64 {
        self.as_array().iter().map(|w| u64::from(*w)).sum()
    }
}
