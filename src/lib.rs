//! Career assessment scoring.
//!
//! Answers to a weighted multiple-choice questionnaire are added up per
//! career field, ranked, and turned into skill and qualification suggestions.

pub mod bank;
pub mod browser;
pub mod config;
pub mod output;
pub mod profile;
pub mod scoring;
pub mod session;
pub mod wizard;
