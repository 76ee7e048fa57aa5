use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Field name -> weight contributed when a choice is selected.
pub type FieldWeights = BTreeMap<String, u32>;

/// One assessment item as written in a bank file.
///
/// Example YAML:
/// ```yaml
/// - id: core-1
///   prompt: "Which activity sounds most rewarding?"
///   options:
///     a: "Building software"
///     b: "Balancing a budget"
///   weights:
///     a: { software: 3, engineering: 1 }
///     b: { finance: 3, accounting: 2 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Question {
    /// Stable identifier; answers refer to questions by this id only
    pub id: String,

    /// Display text, not used for scoring
    pub prompt: String,

    /// Choice key ("a", "b", ...) -> display text
    pub options: BTreeMap<String, String>,

    /// Choice key -> field weights. A missing entry means the choice scores nothing.
    #[serde(default)]
    pub weights: BTreeMap<String, FieldWeights>,
}

impl Question {
    /// Weights for a choice, if the choice has any.
    pub fn weights_for(&self, choice: &str) -> Option<&FieldWeights> {
        self.weights.get(choice)
    }

    /// Whether `choice` is one of the option keys
    pub fn has_option(&self, choice: &str) -> bool {
        self.options.contains_key(choice)
    }
}

/// A question bank file as it appears on disk.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BankFile {
    /// Semver of the bank format (only major version 1 is understood)
    pub version: String,

    /// Optional label used in diagnostics
    #[serde(default)]
    pub name: Option<String>,

    pub questions: Vec<Question>,
}

impl BankFile {
    /// Label for error messages: the name when present, otherwise the position.
    pub fn label(&self, position: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("bank[{}]", position),
        }
    }
}

/// The validated, merged set of questions used for scoring.
///
/// Immutable once built. Lookups go through the explicit `id` of each
/// question; positional indices are never used.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
    index: HashMap<String, usize>,
}

impl QuestionBank {
    /// Build a bank from questions that have already been validated.
    pub(crate) fn from_validated(questions: Vec<Question>) -> Self {
        let index = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.clone(), i))
            .collect();
        Self { questions, index }
    }

    /// Look up a question by its explicit id
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.index.get(id).map(|&i| &self.questions[i])
    }

    /// Questions in declared order (merge order across files)
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
