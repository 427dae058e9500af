pub mod config;
pub mod dimensions;
pub mod engine;
pub mod factors;
pub mod insights;
pub mod validation;

pub use config::*;
pub use dimensions::{Dimension, DimensionScore, FactorContribution};
pub use engine::{
    aggregate, aggregate_weighted, evaluate, evaluate_detailed, score_dimensions, Evaluation,
    EvaluationResult, Metrics, ScoreBreakdown, SubScores,
};
pub use factors::{Bucket, Keyword, Threshold};
pub use insights::{generate_insights, Insights};
pub use validation::validate_scoring;
