use serde::{Deserialize, Serialize};

use crate::bank::QuestionBank;
use crate::scoring::{
    derive_qualifications, derive_skills, rank, tally, AnswerSet, Catalog, RankedField,
    ScoreSheet, ScoringConfig,
};

/// Everything an assessment produces; also the shape saved to the profile
/// and printed with `--format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub ranked: Vec<RankedField>,
    pub skills: Vec<String>,
    pub qualifications: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignored_answers: Vec<String>,
}

/// Score an answer set and derive suggestions, returning the report along
/// with the full score sheet (used for `--explain`).
pub fn assess_with_sheet(
    answers: &AnswerSet,
    bank: &QuestionBank,
    catalog: &Catalog,
    scoring: &ScoringConfig,
) -> (AssessmentReport, ScoreSheet) {
    let sheet = tally(answers, bank);
    let ranked = rank(&sheet, catalog, scoring.effective_top_n());
    let fields = scoring.effective_suggestion_fields();

    let report = AssessmentReport {
        skills: derive_skills(&ranked, catalog, fields),
        qualifications: derive_qualifications(&ranked, catalog, fields),
        ignored_answers: sheet.ignored.clone(),
        ranked,
    };

    tracing::debug!(
        answered = answers.len(),
        ranked = report.ranked.len(),
        ignored = report.ignored_answers.len(),
        "assessment scored"
    );

    (report, sheet)
}

/// Score an answer set and derive suggestions.
pub fn assess(
    answers: &AnswerSet,
    bank: &QuestionBank,
    catalog: &Catalog,
    scoring: &ScoringConfig,
) -> AssessmentReport {
    assess_with_sheet(answers, bank, catalog, scoring).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::load_builtin;

    #[test]
    fn test_empty_assessment() {
        let bank = load_builtin().unwrap();
        let report = assess(
            &AnswerSet::new(),
            &bank,
            &Catalog::builtin(),
            &ScoringConfig::default(),
        );
        assert!(report.ranked.is_empty());
        assert_eq!(
            report.skills,
            vec!["Communication", "Problem Solving", "Critical Thinking"]
        );
        assert_eq!(report.qualifications, vec!["Professional Certification"]);
        assert!(report.ignored_answers.is_empty());
    }

    #[test]
    fn test_finance_leaning_answers() {
        let bank = load_builtin().unwrap();
        let answers = AnswerSet::from_json(
            r#"{"core-1": "c", "core-4": "e", "core-12": "b", "interest-1": "c"}"#,
        )
        .unwrap();
        let report = assess(&answers, &bank, &Catalog::builtin(), &ScoringConfig::default());

        // finance: 3 + 2 + 2 + 3 = 10
        assert_eq!(report.ranked[0].field, "finance");
        assert_eq!(report.ranked[0].score, 10);
        assert_eq!(report.skills[0], "Financial Modeling");
        assert_eq!(report.qualifications[0], "Chartered Financial Analyst (CFA)");
    }

    #[test]
    fn test_top_n_setting_respected() {
        let bank = load_builtin().unwrap();
        let mut answers = AnswerSet::new();
        for question in bank.questions() {
            answers.insert(&question.id, "a").unwrap();
        }
        let scoring = ScoringConfig {
            top_n: Some(3),
            suggestion_fields: Some(1),
        };
        let report = assess(&answers, &bank, &Catalog::builtin(), &scoring);
        assert_eq!(report.ranked.len(), 3);
        assert!(report.skills.len() >= 3 && report.skills.len() <= 6);
        assert_eq!(report.qualifications.len(), 1);
    }

    #[test]
    fn test_ignored_answers_reported() {
        let bank = load_builtin().unwrap();
        let answers = AnswerSet::from_json(r#"{"core-1": "a", "retired-7": "b"}"#).unwrap();
        let report = assess(&answers, &bank, &Catalog::builtin(), &ScoringConfig::default());
        assert_eq!(report.ignored_answers, vec!["retired-7".to_string()]);
        assert_eq!(report.ranked[0].field, "software");
    }

    #[test]
    fn test_report_json_shape() {
        let bank = load_builtin().unwrap();
        let answers = AnswerSet::from_json(r#"{"core-7": "b"}"#).unwrap();
        let report = assess(&answers, &bank, &Catalog::builtin(), &ScoringConfig::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["ranked"][0]["field"], "law");
        assert_eq!(json["ranked"][0]["score"], 3);
        assert_eq!(json["ranked"][0]["title"], "Law & Legal Services");
        assert!(json.get("ignored_answers").is_none());
    }
}
