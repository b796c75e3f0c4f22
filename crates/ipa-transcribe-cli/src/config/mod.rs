//! Settings file loading and resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use ipa_transcribe::{CompositionOptions, FailureStrategy, Language};

/// Environment variable naming the settings file.
pub const CONFIG_ENV: &str = "IPA_TRANSCRIBE_CONFIG";

const CONFIG_DIR: &str = ".ipa-transcribe";
const CONFIG_FILE: &str = "config.json";

/// Persistent defaults for every invocation. All fields are optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Language,
    pub strip_syllable_separator: bool,
    pub all_transcriptions: bool,
    pub failure_strategy: FailureStrategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let options = CompositionOptions::default();
        Self {
            language: Language::British,
            strip_syllable_separator: options.strip_syllable_separator,
            all_transcriptions: options.all_transcriptions,
            failure_strategy: options.failure_strategy,
            user_agent: None,
        }
    }
}

impl Settings {
    /// Read settings from `path`; a missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid settings file {}", path.display()))
    }

    pub fn composition(&self) -> CompositionOptions {
        CompositionOptions {
            strip_syllable_separator: self.strip_syllable_separator,
            all_transcriptions: self.all_transcriptions,
            failure_strategy: self.failure_strategy,
        }
    }
}

/// Resolve the settings file path.
pub fn resolve_config_path(explicit: Option<&str>) -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    resolve_from(
        explicit,
        std::env::var(CONFIG_ENV).ok().as_deref(),
        Path::new("."),
        Path::new(&home),
    )
}

fn resolve_from(explicit: Option<&str>, env_path: Option<&str>, cwd: &Path, home: &Path) -> PathBuf {
    if let Some(path) = explicit {
        return PathBuf::from(path);
    }

    if let Some(path) = env_path.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    let local = cwd.join(CONFIG_DIR).join(CONFIG_FILE);
    if local.exists() {
        return local;
    }

    home.join(CONFIG_DIR).join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_order() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let home_file = home.path().join(".ipa-transcribe/config.json");

        assert_eq!(
            resolve_from(Some("given.json"), Some("env.json"), cwd.path(), home.path()),
            PathBuf::from("given.json")
        );
        assert_eq!(
            resolve_from(None, Some("env.json"), cwd.path(), home.path()),
            PathBuf::from("env.json")
        );
        assert_eq!(resolve_from(None, Some(""), cwd.path(), home.path()), home_file);
        assert_eq!(resolve_from(None, None, cwd.path(), home.path()), home_file);

        let local_dir = cwd.path().join(".ipa-transcribe");
        std::fs::create_dir_all(&local_dir).unwrap();
        std::fs::write(local_dir.join("config.json"), "{}").unwrap();
        assert_eq!(
            resolve_from(None, None, cwd.path(), home.path()),
            local_dir.join("config.json")
        );
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.composition(), CompositionOptions::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"language": "french", "failure_strategy": "show"}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.language, Language::French);
        assert_eq!(settings.failure_strategy, FailureStrategy::Show);
        assert!(settings.strip_syllable_separator);
        assert!(!settings.all_transcriptions);
        assert_eq!(settings.user_agent, None);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"language": "klingon"}"#).unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(err.to_string().contains("invalid settings file"));
    }
}
