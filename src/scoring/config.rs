use serde::{Deserialize, Serialize};

/// Number of ranked fields kept when none is configured
pub const DEFAULT_TOP_N: usize = 5;

/// Number of top fields that feed skill/qualification suggestions
pub const DEFAULT_SUGGESTION_FIELDS: usize = 4;

/// Scoring configuration.
///
/// Both settings are optional; missing values fall back to the defaults.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   top_n: 5
///   suggestion_fields: 3
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// How many career fields to keep in the ranked result (default: 5)
    #[serde(default)]
    pub top_n: Option<usize>,

    /// How many of the top fields are used to derive skills and
    /// qualifications (default: 4)
    #[serde(default)]
    pub suggestion_fields: Option<usize>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            top_n: Some(DEFAULT_TOP_N),
            suggestion_fields: Some(DEFAULT_SUGGESTION_FIELDS),
        }
    }
}

impl ScoringConfig {
    pub fn effective_top_n(&self) -> usize {
        self.top_n.unwrap_or(DEFAULT_TOP_N)
    }

    pub fn effective_suggestion_fields(&self) -> usize {
        self.suggestion_fields.unwrap_or(DEFAULT_SUGGESTION_FIELDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config() {
        let config = ScoringConfig::default();
        assert_eq!(config.top_n, Some(5));
        assert_eq!(config.suggestion_fields, Some(4));
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = ScoringConfig::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_scoring_config_parse() {
        let yaml = "top_n: 3\n";
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.effective_top_n(), 3);
        assert!(config.suggestion_fields.is_none());
        assert_eq!(config.effective_suggestion_fields(), DEFAULT_SUGGESTION_FIELDS);
    }

    #[test]
    fn test_empty_scoring_config_parse() {
        let config: ScoringConfig = serde_saphyr::from_str("{}").unwrap();
        assert!(config.top_n.is_none());
        assert_eq!(config.effective_top_n(), DEFAULT_TOP_N);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<ScoringConfig, _> = serde_saphyr::from_str("top: 3\n");
        assert!(result.is_err());
    }
}
