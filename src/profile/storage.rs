use super::types::{ProfileState, PROFILE_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Get the default profile file path (~/.config/career-compass/profile.json)
pub fn get_profile_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("profile.json"))
}

/// Load the profile from a JSON file
///
/// If the file doesn't exist, returns a new empty profile.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_profile(path: &Path) -> Result<ProfileState> {
    if !path.exists() {
        return Ok(ProfileState::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open profile at {}", path.display()))?;

    let state: ProfileState = serde_json::from_reader(file)
        .with_context(|| format!("Failed to load profile from {}", path.display()))?;

    if state.version != PROFILE_VERSION {
        anyhow::bail!("Unsupported profile version: {}", state.version);
    }

    Ok(state)
}

/// Save the profile to a JSON file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_profile(path: &Path, state: &ProfileState) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, state).context("Failed to serialize profile")?;

    file.commit().context("Failed to save profile")?;

    tracing::info!(path = %path.display(), assessments = state.assessments.len(), "profile saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::load_builtin;
    use crate::scoring::{AnswerSet, Catalog, ScoringConfig};
    use std::env;

    #[test]
    fn test_load_missing_file_returns_empty() {
        let temp_path = env::temp_dir().join("career_compass_test_missing_profile.json");
        let _ = std::fs::remove_file(&temp_path);

        let state = load_profile(&temp_path).unwrap();
        assert_eq!(state.version, PROFILE_VERSION);
        assert!(state.assessments.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = env::temp_dir().join("career_compass_test_profile_roundtrip");
        let _ = std::fs::remove_dir_all(&dir);
        let temp_path = dir.join("nested").join("profile.json");

        let bank = load_builtin().unwrap();
        let answers = AnswerSet::from_json(r#"{"core-1": "b", "core-3": "b"}"#).unwrap();
        let report = crate::session::assess(
            &answers,
            &bank,
            &Catalog::builtin(),
            &ScoringConfig::default(),
        );

        let mut state = ProfileState::new();
        state.record(answers.clone(), report.clone());
        save_profile(&temp_path, &state).unwrap();

        let loaded = load_profile(&temp_path).unwrap();
        assert_eq!(loaded.assessments.len(), 1);
        assert_eq!(loaded.assessments[0].answers, answers);
        assert_eq!(loaded.assessments[0].report, report);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let temp_path = env::temp_dir().join("career_compass_test_profile_v9.json");
        std::fs::write(&temp_path, r#"{"version": 9, "assessments": []}"#).unwrap();

        let err = load_profile(&temp_path).unwrap_err();
        assert!(err.to_string().contains("Unsupported profile version: 9"));

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_corrupt_file_reports_path() {
        let temp_path = env::temp_dir().join("career_compass_test_profile_corrupt.json");
        std::fs::write(&temp_path, "not json").unwrap();

        let err = load_profile(&temp_path).unwrap_err();
        assert!(err.to_string().contains("Failed to load profile"));

        let _ = std::fs::remove_file(&temp_path);
    }
}
