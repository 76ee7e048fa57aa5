use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::{BankFile, QuestionBank};
use super::validation::validate_banks;

const BUILTIN_CORE: &str = include_str!("data/core.yaml");
const BUILTIN_INTERESTS: &str = include_str!("data/interests.yaml");

/// Error carrying every problem found while validating banks.
#[derive(Debug, thiserror::Error)]
#[error("question bank is invalid:{}", list_errors(.errors))]
pub struct BankValidationError {
    pub errors: Vec<String>,
}

fn list_errors(errors: &[String]) -> String {
    errors.iter().map(|e| format!("\n  - {}", e)).collect()
}

impl QuestionBank {
    /// Validate and merge bank files in order.
    ///
    /// Ids must be unique across all files. Fails with every validation
    /// error collected, not just the first.
    pub fn from_files(files: Vec<BankFile>) -> Result<Self, BankValidationError> {
        validate_banks(&files).map_err(|errors| BankValidationError { errors })?;

        let mut questions = Vec::new();
        for (i, file) in files.into_iter().enumerate() {
            tracing::debug!(
                bank = %file.label(i),
                questions = file.questions.len(),
                "merging question bank"
            );
            questions.extend(file.questions);
        }
        Ok(QuestionBank::from_validated(questions))
    }
}

/// Parse a bank from YAML text. `source` names the origin in error messages.
pub fn parse_bank_str(yaml: &str, source: &str) -> Result<BankFile> {
    serde_saphyr::from_str(yaml)
        .with_context(|| format!("Failed to parse question bank: invalid YAML in {}", source))
}

/// The compiled-in banks, unvalidated, in merge order
pub fn builtin_bank_files() -> Result<Vec<BankFile>> {
    Ok(vec![
        parse_bank_str(BUILTIN_CORE, "built-in core bank")?,
        parse_bank_str(BUILTIN_INTERESTS, "built-in interests bank")?,
    ])
}

/// Load and merge the compiled-in banks.
pub fn load_builtin() -> Result<QuestionBank> {
    let bank = QuestionBank::from_files(builtin_bank_files()?)?;
    Ok(bank)
}

/// Read one bank file from disk.
pub fn load_bank_file(path: &Path) -> Result<BankFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read question bank at {}", path.display()))?;
    let mut file = parse_bank_str(&content, &path.display().to_string())?;
    if file.name.is_none() {
        file.name = Some(path.display().to_string());
    }
    Ok(file)
}

fn expand_home(pattern: &str) -> String {
    if let Some(rest) = pattern.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest).display().to_string();
        }
    }
    pattern.to_string()
}

/// Expand glob patterns into a sorted, deduplicated list of bank files.
///
/// Each pattern must match at least one file.
pub fn resolve_bank_paths(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let expanded = expand_home(pattern);
        let mut matched = Vec::new();
        for entry in glob::glob(&expanded)
            .with_context(|| format!("Invalid bank pattern '{}'", pattern))?
        {
            let path = entry.with_context(|| format!("Failed to read match for '{}'", pattern))?;
            if path.is_file() {
                matched.push(path);
            }
        }
        if matched.is_empty() {
            anyhow::bail!("Bank pattern '{}' matched no files", pattern);
        }
        matched.sort();
        paths.extend(matched);
    }

    let mut seen = std::collections::HashSet::new();
    paths.retain(|p| seen.insert(p.clone()));
    Ok(paths)
}

/// Load the question bank used by the CLI: built-in banks (unless disabled)
/// followed by every file matched by `patterns`.
pub fn load_question_bank(include_builtin: bool, patterns: &[String]) -> Result<QuestionBank> {
    let mut files = if include_builtin {
        builtin_bank_files()?
    } else {
        Vec::new()
    };

    for path in resolve_bank_paths(patterns)? {
        files.push(load_bank_file(&path)?);
    }

    if files.is_empty() {
        anyhow::bail!("No question banks configured (built-in bank disabled and no bank files given)");
    }

    let bank = QuestionBank::from_files(files)?;
    tracing::info!(questions = bank.len(), "question bank loaded");
    Ok(bank)
}
