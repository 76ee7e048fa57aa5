use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AnswerError {
    #[error("Invalid answers JSON: {0}")]
    Json(String),

    #[error("Answers must be a JSON object mapping question ids to choice keys, got {0}")]
    NotAnObject(&'static str),

    #[error("Question id must not be empty")]
    EmptyQuestionId,

    #[error("Answer for '{question}' must be a string choice key, got {found}")]
    NotAString { question: String, found: &'static str },

    #[error("Answer for '{0}' must not be empty")]
    EmptyChoice(String),

    #[error("Question '{0}' answered more than once")]
    Duplicate(String),

    #[error("Invalid answer '{0}': expected QUESTION_ID=CHOICE")]
    MalformedPair(String),
}

/// The user's selections: question id -> choice key.
///
/// At most one answer per question. Choice keys are stored trimmed and
/// lowercased, matching the form bank option keys are validated to.
/// Deserializing goes through [`AnswerSet::insert`], so saved answers obey
/// the same rules as fresh ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, String>,
}

/// Object entries in document order, repeated keys included.
struct Entries(Vec<(String, Value)>);

struct EntriesVisitor;

impl<'de> Visitor<'de> for EntriesVisitor {
    type Value = Entries;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of question ids to choice keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Entries, A::Error> {
        let mut entries = Vec::new();
        while let Some(entry) = map.next_entry::<String, Value>()? {
            entries.push(entry);
        }
        Ok(Entries(entries))
    }
}

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl<'de> Deserialize<'de> for AnswerSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Entries(entries) = Entries::deserialize(deserializer)?;
        AnswerSet::from_entries(entries).map_err(de::Error::custom)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, rejecting blank input and repeated questions.
    pub fn insert(&mut self, question: &str, choice: &str) -> Result<(), AnswerError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AnswerError::EmptyQuestionId);
        }
        let choice = choice.trim().to_lowercase();
        if choice.is_empty() {
            return Err(AnswerError::EmptyChoice(question.to_string()));
        }
        if self.answers.contains_key(question) {
            return Err(AnswerError::Duplicate(question.to_string()));
        }
        self.answers.insert(question.to_string(), choice);
        Ok(())
    }

    /// Parse a JSON object such as `{"core-1": "a", "core-2": "c"}`.
    ///
    /// Anything other than an object of non-empty strings fails fast, and so
    /// does a question id that appears twice.
    pub fn from_json(json: &str) -> Result<Self, AnswerError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| AnswerError::Json(e.to_string()))?;
        if !value.is_object() {
            return Err(AnswerError::NotAnObject(json_kind(&value)));
        }
        // Value keeps only the last of repeated keys, so read the entries again
        let Entries(entries) =
            serde_json::from_str(json).map_err(|e| AnswerError::Json(e.to_string()))?;
        Self::from_entries(entries)
    }

    fn from_entries(entries: Vec<(String, Value)>) -> Result<Self, AnswerError> {
        let mut set = AnswerSet::new();
        for (question, choice) in entries {
            let choice = choice.as_str().ok_or_else(|| AnswerError::NotAString {
                question: question.clone(),
                found: json_kind(&choice),
            })?;
            set.insert(&question, choice)?;
        }
        Ok(set)
    }

    /// Parse a `QUESTION_ID=CHOICE` pair (as given on the command line)
    /// and add it to the set.
    pub fn insert_pair(&mut self, pair: &str) -> Result<(), AnswerError> {
        let (question, choice) = pair
            .split_once('=')
            .ok_or_else(|| AnswerError::MalformedPair(pair.to_string()))?;
        self.insert(question, choice)
    }

    pub fn get(&self, question: &str) -> Option<&str> {
        self.answers.get(question).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers.iter().map(|(q, c)| (q.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
