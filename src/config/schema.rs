use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

fn default_true() -> bool {
    true
}

/// Default job search used by `open`; `{query}` is replaced with the field title
pub const DEFAULT_JOB_SEARCH_URL: &str = "https://www.linkedin.com/jobs/search/?keywords={query}";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    /// Extra question bank files (glob patterns, `~/` allowed), merged after
    /// the built-in banks
    #[serde(default)]
    pub banks: Vec<String>,

    /// Whether the compiled-in question banks are loaded (default: true)
    #[serde(default = "default_true")]
    pub builtin_bank: bool,

    /// Where saved assessments are kept (default: ~/.config/career-compass/profile.json)
    #[serde(default)]
    pub profile_path: Option<String>,

    /// Job search URL template for `open`
    #[serde(default)]
    pub job_search_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: None,
            banks: Vec::new(),
            builtin_bank: true,
            profile_path: None,
            job_search_url: None,
        }
    }
}

impl Config {
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }

    pub fn effective_job_search_url(&self) -> &str {
        self.job_search_url
            .as_deref()
            .unwrap_or(DEFAULT_JOB_SEARCH_URL)
    }
}
