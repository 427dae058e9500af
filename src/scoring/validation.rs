use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Weights must describe a full 100% split
    if let Some(ref weights) = config.weights {
        let names = ["market", "team", "financial", "business_model", "traction"];
        for (name, weight) in names.iter().zip(weights.as_array()) {
            if weight > 100 {
                errors.push(format!(
                    "scoring.weights.{}: must be at most 100, got {}",
                    name, weight
                ));
            }
        }

        let total = weights.total();
        if total != 100 {
            errors.push(format!("scoring.weights: must sum to 100, got {}", total));
        }
    }

    if let Some(threshold) = config.insight_threshold {
        if !threshold.is_finite() || !(0.0..=100.0).contains(&threshold) {
            errors.push(format!(
                "scoring.insight_threshold: must be between 0 and 100, got {}",
                threshold
            ));
        }
    }

    if let Some(max) = config.max_insights {
        if max == 0 {
            errors.push("scoring.max_insights: must be at least 1".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
