use super::types::StartupProfile;

/// Validate a profile before it is scored.
/// Returns all violations at once (not just the first).
pub fn validate_profile(profile: &StartupProfile) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if profile.company_name.trim().is_empty() {
        errors.push("company_name: must not be empty".to_string());
    }

    let amounts = [
        ("funding_needed", profile.funding_needed),
        ("equity_offered", profile.equity_offered),
        ("current_revenue", profile.current_revenue),
        ("market_size", profile.market_size),
    ];
    for (field, value) in amounts {
        if !value.is_finite() {
            errors.push(format!("{}: must be a finite number, got {}", field, value));
        } else if value < 0.0 {
            errors.push(format!("{}: must be non-negative, got {}", field, value));
        }
    }

    if profile.equity_offered.is_finite() && profile.equity_offered > 100.0 {
        errors.push(format!(
            "equity_offered: must be at most 100, got {}",
            profile.equity_offered
        ));
    }

    if profile.team_size < 1 {
        errors.push("team_size: must be at least 1".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
