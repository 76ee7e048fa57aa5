use super::types::BankFile;
use semver::{Version, VersionReq};
use std::collections::HashMap;

/// Bank format versions this build understands.
pub const SUPPORTED_BANK_VERSION: &str = "^1";

/// Check a bank's declared version against `SUPPORTED_BANK_VERSION`.
pub fn check_bank_version(version: &str) -> Result<(), String> {
    let parsed = Version::parse(version.trim())
        .map_err(|e| format!("invalid version '{}' - {}", version, e))?;
    let req = VersionReq::parse(SUPPORTED_BANK_VERSION)
        .map_err(|e| format!("invalid version requirement - {}", e))?;
    if req.matches(&parsed) {
        Ok(())
    } else {
        Err(format!(
            "unsupported version {} (expected {})",
            parsed, SUPPORTED_BANK_VERSION
        ))
    }
}

fn is_choice_key(key: &str) -> bool {
    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_lowercase())
}

/// Validate a set of bank files that are about to be merged.
/// Returns all validation errors at once (not just the first).
pub fn validate_banks(files: &[BankFile]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    // id -> label of the bank that declared it first
    let mut seen_ids: HashMap<&str, String> = HashMap::new();

    for (file_idx, file) in files.iter().enumerate() {
        let label = file.label(file_idx);

        if let Err(e) = check_bank_version(&file.version) {
            errors.push(format!("{}.version: {}", label, e));
        }

        for (i, question) in file.questions.iter().enumerate() {
            let at = format!("{}.questions[{}]", label, i);
            let id = question.id.as_str();

            if id.trim().is_empty() {
                errors.push(format!("{}.id: must not be empty", at));
            } else if id.trim() != id {
                errors.push(format!(
                    "{}.id: '{}' has leading or trailing whitespace",
                    at, id
                ));
            } else if let Some(first) = seen_ids.get(id) {
                errors.push(format!(
                    "{}.id: duplicate id '{}' (first declared in {})",
                    at, id, first
                ));
            } else {
                seen_ids.insert(id, label.clone());
            }

            if question.prompt.trim().is_empty() {
                errors.push(format!("{}.prompt: must not be empty", at));
            }

            if question.options.is_empty() {
                errors.push(format!("{}.options: at least one option is required", at));
            }

            for key in question.options.keys() {
                if !is_choice_key(key) {
                    errors.push(format!(
                        "{}.options.{}: choice key must be a single lowercase letter",
                        at, key
                    ));
                }
            }

            for (choice, fields) in &question.weights {
                if !question.has_option(choice) {
                    errors.push(format!(
                        "{}.weights.{}: no option with this key",
                        at, choice
                    ));
                }
                for (field, weight) in fields {
                    if field.trim().is_empty() {
                        errors.push(format!(
                            "{}.weights.{}: field name must not be empty",
                            at, choice
                        ));
                    }
                    if *weight == 0 {
                        errors.push(format!(
                            "{}.weights.{}.{}: weight must be positive",
                            at, choice, field
                        ));
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
