//! Startup investability scoring.
//!
//! [`scoring::evaluate`] turns a [`profile::StartupProfile`] into an overall
//! score, five sub-scores and a short list of strengths, weaknesses and
//! recommendations. The remaining modules load profiles and configuration,
//! rank many startups at once and render the results.

pub mod batch;
pub mod config;
pub mod error;
pub mod output;
pub mod profile;
pub mod scoring;
pub mod telemetry;

pub use error::{EvalError, Result};
pub use profile::{Industry, StartupProfile};
pub use scoring::{evaluate, evaluate_detailed, EvaluationResult};
