use super::config::ScoringConfig;

/// Upper bound for `top_n`; the built-in catalog has fewer fields than this.
const MAX_TOP_N: usize = 50;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(top_n) = config.top_n {
        if top_n == 0 {
            errors.push("scoring.top_n: must be at least 1".to_string());
        } else if top_n > MAX_TOP_N {
            errors.push(format!("scoring.top_n: must be at most {}", MAX_TOP_N));
        }
    }

    if let Some(fields) = config.suggestion_fields {
        if fields == 0 {
            errors.push("scoring.suggestion_fields: must be at least 1".to_string());
        } else if fields > config.effective_top_n() {
            errors.push(format!(
                "scoring.suggestion_fields: {} exceeds top_n ({})",
                fields,
                config.effective_top_n()
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
