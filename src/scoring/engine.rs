use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::{ScoringConfig, Weights};
use super::dimensions::{
    score_business_model, score_financial, score_market, score_team, score_traction, Dimension,
    DimensionScore,
};
use super::insights::{generate_insights, Insights};
use super::validation::validate_scoring;
use crate::error::{EvalError, Result};
use crate::profile::{validate_profile, StartupProfile};

/// The five sub-scores, each in 0-100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub market: f64,
    pub team: f64,
    pub financial: f64,
    pub business_model: f64,
    pub traction: f64,
}

impl SubScores {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Market => self.market,
            Dimension::Team => self.team,
            Dimension::Financial => self.financial,
            Dimension::BusinessModel => self.business_model,
            Dimension::Traction => self.traction,
        }
    }

    /// Scores in dimension evaluation order
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.market,
            self.team,
            self.financial,
            self.business_model,
            self.traction,
        ]
    }
}

/// Sub-scores under their reported names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub market_potential: f64,
    pub team_capability: f64,
    pub financial_health: f64,
    pub business_model: f64,
    pub traction: f64,
}

impl From<SubScores> for Metrics {
    fn from(scores: SubScores) -> Self {
        Self {
            market_potential: scores.market,
            team_capability: scores.team,
            financial_health: scores.financial,
            business_model: scores.business_model,
            traction: scores.traction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub overall_score: u8,
    pub metrics: Metrics,
    pub insights: Insights,
}

/// How each sub-score was reached, one entry per dimension in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub dimensions: Vec<DimensionScore>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub result: EvaluationResult,
    pub breakdown: ScoreBreakdown,
}

/// Run the five sub-scorers. They read disjoint parts of the profile and
/// share no state.
pub fn score_dimensions(profile: &StartupProfile) -> [DimensionScore; 5] {
    [
        score_market(profile.market_size),
        score_team(profile.team_size, &profile.team_experience),
        score_financial(
            profile.funding_needed,
            profile.equity_offered,
            profile.current_revenue,
        ),
        score_business_model(&profile.business_model, &profile.competition_analysis),
        score_traction(&profile.traction_metrics),
    ]
}

/// Weighted overall score with the standard weights.
pub fn aggregate(scores: &SubScores) -> u8 {
    aggregate_weighted(scores, &Weights::default())
}

/// Weighted overall score, rounded half-up to an integer.
///
/// Sub-scores are multiples of 0.25 and weights are integer percentages, so
/// the weighted sum in hundredths is exact and rounding never depends on
/// floating point noise.
pub fn aggregate_weighted(scores: &SubScores, weights: &Weights) -> u8 {
    let hundredths: f64 = scores
        .as_array()
        .iter()
        .zip(weights.as_array())
        .map(|(score, weight)| score * f64::from(weight))
        .sum();
    let rounded = ((hundredths + 50.0) / 100.0).floor();
    rounded.clamp(0.0, 100.0) as u8
}

/// Evaluate a profile with the standard configuration.
pub fn evaluate(profile: &StartupProfile) -> Result<EvaluationResult> {
    evaluate_detailed(profile, &ScoringConfig::default()).map(|e| e.result)
}

/// Evaluate a profile and keep the per-factor breakdown.
///
/// Fails with [`EvalError::InvalidInput`] for a profile that does not pass
/// validation and [`EvalError::InvalidConfig`] for an invalid configuration.
pub fn evaluate_detailed(profile: &StartupProfile, config: &ScoringConfig) -> Result<Evaluation> {
    validate_scoring(config).map_err(EvalError::InvalidConfig)?;
    validate_profile(profile).map_err(EvalError::InvalidInput)?;

    let dimensions = score_dimensions(profile);
    let scores = SubScores {
        market: dimensions[0].score,
        team: dimensions[1].score,
        financial: dimensions[2].score,
        business_model: dimensions[3].score,
        traction: dimensions[4].score,
    };

    let overall_score = aggregate_weighted(&scores, &config.weights());
    let insights = generate_insights(&scores, config.insight_threshold(), config.max_insights());

    debug!(
        company = %profile.company_name,
        overall_score,
        "evaluated startup"
    );

    Ok(Evaluation {
        result: EvaluationResult {
            overall_score,
            metrics: scores.into(),
            insights,
        },
        breakdown: ScoreBreakdown {
            dimensions: dimensions.to_vec(),
        },
    })
}
