use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::answers::AnswerSet;
use super::catalog::Catalog;
use crate::bank::QuestionBank;

/// One weight added to the accumulator by an answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    pub question_id: String,
    pub choice: String,
    pub field: String,
    pub weight: u32,
}

/// Total for a single field, before ranking metadata is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTotal {
    pub field: String,
    pub score: u32,
}

/// Full, untruncated result of adding up an answer set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSheet {
    /// Sorted by score descending; equal scores keep first-encountered order
    pub totals: Vec<FieldTotal>,
    /// Every weight applied, in the order it was applied
    pub contributions: Vec<Contribution>,
    /// Answered question ids that are not in the bank
    pub ignored: Vec<String>,
}

/// A career field in the ranked result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedField {
    pub field: String,
    pub score: u32,
    pub title: String,
    pub path_category: String,
}

/// Add up the weights of every answered question.
///
/// The bank is walked in question order and, within a choice, fields are
/// applied in ascending name order. That walk defines "first encountered"
/// for tie-breaking. Answers to unknown questions are collected in
/// `ignored`; choices without weights contribute nothing.
pub fn tally(answers: &AnswerSet, bank: &QuestionBank) -> ScoreSheet {
    let mut totals: Vec<FieldTotal> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut contributions = Vec::new();

    for question in bank.questions() {
        let Some(choice) = answers.get(&question.id) else {
            continue;
        };
        let Some(weights) = question.weights_for(choice) else {
            if !question.has_option(choice) {
                tracing::debug!(question = %question.id, choice, "choice is not an option, scoring nothing");
            }
            continue;
        };

        for (field, &weight) in weights {
            let slot = *positions.entry(field.clone()).or_insert_with(|| {
                totals.push(FieldTotal {
                    field: field.clone(),
                    score: 0,
                });
                totals.len() - 1
            });
            totals[slot].score = totals[slot].score.saturating_add(weight);
            contributions.push(Contribution {
                question_id: question.id.clone(),
                choice: choice.to_string(),
                field: field.clone(),
                weight,
            });
        }
    }

    let ignored: Vec<String> = answers
        .iter()
        .filter(|(id, _)| bank.get(id).is_none())
        .map(|(id, _)| id.to_string())
        .collect();
    for id in &ignored {
        tracing::debug!(question = %id, "answer for unknown question ignored");
    }

    // Stable sort keeps encounter order for ties
    totals.sort_by(|a, b| b.score.cmp(&a.score));

    ScoreSheet {
        totals,
        contributions,
        ignored,
    }
}

/// Keep the top `top_n` totals and attach titles and path categories.
pub fn rank(sheet: &ScoreSheet, catalog: &Catalog, top_n: usize) -> Vec<RankedField> {
    sheet
        .totals
        .iter()
        .take(top_n)
        .map(|total| RankedField {
            field: total.field.clone(),
            score: total.score,
            title: catalog.title_for(&total.field),
            path_category: catalog.path_category_for(&total.field).to_string(),
        })
        .collect()
}

/// Rank career fields for an answer set.
///
/// Returns at most `top_n` entries sorted by score descending. An answer set
/// that touches no weights gives an empty list.
pub fn score(
    answers: &AnswerSet,
    bank: &QuestionBank,
    catalog: &Catalog,
    top_n: usize,
) -> Vec<RankedField> {
    rank(&tally(answers, bank), catalog, top_n)
}
