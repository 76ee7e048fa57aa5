use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::AnswerSet;
use crate::session::AssessmentReport;

pub const PROFILE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileState {
    pub version: u32,
    #[serde(default)]
    pub assessments: Vec<SavedAssessment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedAssessment {
    pub taken_at: DateTime<Utc>,
    pub answers: AnswerSet,
    pub report: AssessmentReport,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileState {
    /// Create a new empty profile with the current version
    pub fn new() -> Self {
        Self {
            version: PROFILE_VERSION,
            assessments: Vec::new(),
        }
    }

    /// Append a completed assessment stamped with the current time
    pub fn record(&mut self, answers: AnswerSet, report: AssessmentReport) -> &SavedAssessment {
        self.record_at(Utc::now(), answers, report)
    }

    pub fn record_at(
        &mut self,
        taken_at: DateTime<Utc>,
        answers: AnswerSet,
        report: AssessmentReport,
    ) -> &SavedAssessment {
        self.assessments.push(SavedAssessment {
            taken_at,
            answers,
            report,
        });
        &self.assessments[self.assessments.len() - 1]
    }

    /// Most recently taken assessment
    pub fn latest(&self) -> Option<&SavedAssessment> {
        self.assessments.iter().max_by_key(|a| a.taken_at)
    }

    /// Assessments taken at or after `cutoff`, oldest first
    pub fn since(&self, cutoff: DateTime<Utc>) -> Vec<&SavedAssessment> {
        let mut selected: Vec<_> = self
            .assessments
            .iter()
            .filter(|a| a.taken_at >= cutoff)
            .collect();
        selected.sort_by_key(|a| a.taken_at);
        selected
    }
}

/// The cutoff for `history --since`: `now` minus a humantime window like "30d".
///
/// Fails on an unparsable window or one that reaches past the earliest
/// representable date.
pub fn since_cutoff(now: DateTime<Utc>, window: &str) -> Result<DateTime<Utc>> {
    let duration = humantime::parse_duration(window)
        .ok()
        .and_then(|d| chrono::Duration::from_std(d).ok())
        .ok_or_else(|| anyhow!("Invalid duration '{}'", window))?;
    now.checked_sub_signed(duration)
        .ok_or_else(|| anyhow!("Duration '{}' is too long", window))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn report(field: &str) -> AssessmentReport {
        AssessmentReport {
            ranked: vec![crate::scoring::RankedField {
                field: field.to_string(),
                score: 3,
                title: field.to_string(),
                path_category: "Other".to_string(),
            }],
            skills: vec!["Communication".to_string()],
            qualifications: vec!["Professional Certification".to_string()],
            ignored_answers: vec![],
        }
    }

    #[test]
    fn test_new_profile_empty() {
        let state = ProfileState::new();
        assert_eq!(state.version, PROFILE_VERSION);
        assert!(state.assessments.is_empty());
        assert!(state.latest().is_none());
    }

    #[test]
    fn test_latest_is_newest_by_time() {
        let mut state = ProfileState::new();
        let now = Utc::now();
        state.record_at(now, AnswerSet::new(), report("law"));
        state.record_at(now - Duration::days(3), AnswerSet::new(), report("design"));
        assert_eq!(state.latest().unwrap().report.ranked[0].field, "law");
    }

    #[test]
    fn test_since_filters_and_orders() {
        let mut state = ProfileState::new();
        let now = Utc::now();
        state.record_at(now - Duration::days(1), AnswerSet::new(), report("b"));
        state.record_at(now - Duration::days(40), AnswerSet::new(), report("old"));
        state.record_at(now - Duration::days(2), AnswerSet::new(), report("a"));

        let recent = state.since(now - Duration::days(30));
        let fields: Vec<_> = recent
            .iter()
            .map(|a| a.report.ranked[0].field.as_str())
            .collect();
        assert_eq!(fields, vec!["a", "b"]);
    }

    #[test]
    fn test_record_returns_saved_entry() {
        let mut state = ProfileState::new();
        let mut answers = AnswerSet::new();
        answers.insert("core-1", "a").unwrap();
        let saved = state.record(answers.clone(), report("software"));
        assert_eq!(saved.answers, answers);
        assert_eq!(state.assessments.len(), 1);
    }

    #[test]
    fn test_since_cutoff() {
        let now = Utc::now();
        assert_eq!(since_cutoff(now, "2d").unwrap(), now - Duration::days(2));
        assert_eq!(
            since_cutoff(now, "soon").unwrap_err().to_string(),
            "Invalid duration 'soon'"
        );
    }

    #[test]
    fn test_since_cutoff_out_of_range_is_error() {
        let err = since_cutoff(Utc::now(), "300000y").unwrap_err();
        assert_eq!(err.to_string(), "Duration '300000y' is too long");
    }
}
