//! Project-level configuration support
//!
//! Loads configuration from `gender-decoder.toml` or `.gender-decoderrc.json`
//! next to the advert being analysed (falling back to the working directory).
//!
//! # Configuration Format
//!
//! ```toml
//! # gender-decoder.toml
//!
//! [analysis]
//! hyphens = "leading"   # or "anywhere"
//!
//! [word_lists]
//! masculine_coded_words = ["lead", "compet", "rockstar"]
//! # lists left out use the built-in stems
//!
//! [defaults]
//! format = "text"
//! ```

use crate::analysis::{AnalysisConfig, HyphenPolicy};
use crate::config::WordLists;
use crate::error::{DecoderError, DecoderResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// TOML config file name
pub const CONFIG_FILE_NAME: &str = "gender-decoder.toml";
/// JSON config file name
pub const JSON_CONFIG_FILE_NAME: &str = ".gender-decoderrc.json";

/// Configuration loaded from gender-decoder.toml or similar
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Pipeline options
    #[serde(default)]
    pub analysis: AnalysisSection,

    /// Coded stem lists
    #[serde(default)]
    pub word_lists: WordLists,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// `[analysis]` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSection {
    /// Which hyphenated tokens get split apart
    #[serde(default)]
    pub hyphens: HyphenPolicy,
}

/// Default CLI flags that can be set in the config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliDefaults {
    /// Default output format (text, json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl ProjectConfig {
    /// Build the analysis configuration, normalizing the word lists
    pub fn analysis_config(&self) -> DecoderResult<AnalysisConfig> {
        Ok(AnalysisConfig {
            word_lists: self.word_lists.clone().normalized()?,
            hyphen_policy: self.analysis.hyphens,
        })
    }

    /// Render as TOML, used by `init`
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Load an explicitly requested config file. Missing or malformed files are errors.
pub fn load_config_file(path: &Path) -> DecoderResult<ProjectConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| DecoderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str::<ProjectConfig>(&content).map_err(|e| e.to_string())
    } else {
        toml::from_str::<ProjectConfig>(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| DecoderError::Config {
        path: path.to_path_buf(),
        message,
    })
}

/// Search `dirs` in order for a config file.
///
/// Returns defaults when nothing is found. A config that fails to load is
/// skipped with a warning.
pub fn discover_config(dirs: &[PathBuf]) -> ProjectConfig {
    for dir in dirs {
        for name in [CONFIG_FILE_NAME, JSON_CONFIG_FILE_NAME] {
            let candidate = dir.join(name);
            if !candidate.is_file() {
                continue;
            }
            match load_config_file(&candidate) {
                Ok(config) => {
                    debug!("Loaded config from {}", candidate.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load {}: {}", candidate.display(), e);
                }
            }
        }
    }

    debug!("No config found, using defaults");
    ProjectConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProjectConfig::default();
        assert_eq!(config.analysis.hyphens, HyphenPolicy::LeadingOnly);
        assert_eq!(config.word_lists, WordLists::default());
        assert!(config.defaults.format.is_none());
    }

    #[test]
    fn test_parse_toml_config() {
        let toml_content = r#"
[analysis]
hyphens = "anywhere"

[word_lists]
masculine_coded_words = ["Rockstar", "ninja"]

[defaults]
format = "json"
"#;
        let config: ProjectConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.analysis.hyphens, HyphenPolicy::Anywhere);
        assert_eq!(config.defaults.format.as_deref(), Some("json"));

        let analysis = config.analysis_config().unwrap();
        assert_eq!(
            analysis.word_lists.masculine_coded_words,
            vec!["rockstar", "ninja"]
        );
        assert_eq!(
            analysis.word_lists.feminine_coded_words,
            WordLists::default().feminine_coded_words
        );
    }

    #[test]
    fn test_toml_roundtrips_through_init_output() {
        let config = ProjectConfig::default();
        let rendered = config.to_toml().unwrap();
        let parsed: ProjectConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_json_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(JSON_CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"{"analysis": {"hyphens": "anywhere"}, "word_lists": {"feminine_coded_words": ["kind"]}}"#,
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.analysis.hyphens, HyphenPolicy::Anywhere);
        assert_eq!(config.word_lists.feminine_coded_words, vec!["kind"]);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, DecoderError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[analysis]\nhyphens = \"sometimes\"\n").unwrap();
        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, DecoderError::Config { .. }));
    }

    #[test]
    fn test_discover_prefers_first_dir() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(
            second.path().join(CONFIG_FILE_NAME),
            "[analysis]\nhyphens = \"anywhere\"\n",
        )
        .unwrap();

        let config = discover_config(&[first.path().to_path_buf(), second.path().to_path_buf()]);
        assert_eq!(config.analysis.hyphens, HyphenPolicy::Anywhere);

        std::fs::write(
            first.path().join(CONFIG_FILE_NAME),
            "[defaults]\nformat = \"json\"\n",
        )
        .unwrap();
        let config = discover_config(&[first.path().to_path_buf(), second.path().to_path_buf()]);
        assert_eq!(config.analysis.hyphens, HyphenPolicy::LeadingOnly);
        assert_eq!(config.defaults.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_discover_skips_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();
        let config = discover_config(&[dir.path().to_path_buf()]);
        assert_eq!(config, ProjectConfig::default());
    }
}
