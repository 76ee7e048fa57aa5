pub mod answers;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod suggestions;
pub mod validation;

pub use answers::{AnswerError, AnswerSet};
pub use catalog::{Catalog, PathCategory, SuggestionEntry};
pub use config::*;
pub use engine::{rank, score, tally, Contribution, FieldTotal, RankedField, ScoreSheet};
pub use suggestions::{derive_qualifications, derive_skills};
pub use validation::validate_scoring;
