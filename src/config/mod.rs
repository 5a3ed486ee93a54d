// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, LanguageConfig};
use crate::error::{Result, ScanMergeError};
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `scanmerge.toml` from the current directory, or defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but is unreadable or malformed.
    pub fn load() -> Result<Self> {
        Self::load_optional(Path::new(CONFIG_FILE))
    }

    /// Loads config from `path` when it exists, otherwise the defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but is unreadable or malformed.
    pub fn load_optional(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Loads config from an explicit path, which must exist.
    ///
    /// # Errors
    /// Returns error if the file is missing, unreadable or malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = io::load_toml_config(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses config from toml text.
    ///
    /// # Errors
    /// Returns error on malformed toml or failed validation.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config = io::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `ScanMergeError::Config` if a required key is blank.
    pub fn validate(&self) -> Result<()> {
        if self.primary_configuration.trim().is_empty() {
            return Err(ScanMergeError::Config(
                "primary_configuration must not be empty".into(),
            ));
        }
        if self.telemetry_key.trim().is_empty() {
            return Err(ScanMergeError::Config("telemetry_key must not be empty".into()));
        }
        for (name, lang) in &self.languages {
            if lang.analyzer_output_key.trim().is_empty() {
                return Err(ScanMergeError::Config(format!(
                    "languages.{name}.analyzer_output_key must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Language settings for a record's language tag, ignoring case.
    #[must_use]
    pub fn language(&self, tag: &str) -> Option<&LanguageConfig> {
        self.language_entry(tag).map(|(_, lang)| lang)
    }

    fn language_entry(&self, tag: &str) -> Option<(&str, &LanguageConfig)> {
        self.languages
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(tag.trim()))
            .map(|(name, lang)| (name.as_str(), lang))
    }

    /// Languages whose analyzer keys apply to a project, with their names.
    ///
    /// A known tag selects its own entry; an absent or unknown tag selects
    /// every configured language.
    #[must_use]
    pub fn languages_for(&self, tag: Option<&str>) -> Vec<(&str, &LanguageConfig)> {
        match tag.and_then(|t| self.language_entry(t)) {
            Some(entry) => vec![entry],
            None => self
                .languages
                .iter()
                .map(|(name, lang)| (name.as_str(), lang))
                .collect(),
        }
    }

    /// Whether the current run analyzes `tag`.
    #[must_use]
    pub fn supports_language(&self, tag: &str) -> bool {
        self.supported_languages.is_empty()
            || self
                .supported_languages
                .iter()
                .any(|l| l.eq_ignore_ascii_case(tag))
    }
}
