use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Settings keys and output prefix for one analyzed language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Record setting that declares the analyzer output path of a build.
    pub analyzer_output_key: String,
    /// Record setting that declares the Roslyn report path of a build.
    pub roslyn_report_key: String,
    /// Prefix of the keys written to the properties file, e.g. `sonar.cs`.
    pub properties_prefix: String,
}

impl LanguageConfig {
    fn for_prefix(prefix: &str) -> Self {
        Self {
            analyzer_output_key: format!("{prefix}.analyzer.projectOutPath"),
            roslyn_report_key: format!("{prefix}.roslyn.reportFilePath"),
            properties_prefix: prefix.to_string(),
        }
    }
}

/// Contents of `scanmerge.toml`. Every field falls back to a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Build configuration whose analyzer output is merged last.
    #[serde(default = "default_primary_configuration")]
    pub primary_configuration: String,
    /// Languages the current run analyzes. Empty accepts every language.
    #[serde(default)]
    pub supported_languages: Vec<String>,
    #[serde(default = "default_telemetry_key")]
    pub telemetry_key: String,
    #[serde(default = "default_languages")]
    pub languages: BTreeMap<String, LanguageConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            primary_configuration: default_primary_configuration(),
            supported_languages: Vec::new(),
            telemetry_key: default_telemetry_key(),
            languages: default_languages(),
        }
    }
}

fn default_primary_configuration() -> String { "Release".to_string() }
fn default_telemetry_key() -> String { "sonar.scanner.telemetry".to_string() }

fn default_languages() -> BTreeMap<String, LanguageConfig> {
    ["cs", "vbnet"]
        .into_iter()
        .map(|lang| (lang.to_string(), LanguageConfig::for_prefix(&format!("sonar.{lang}"))))
        .collect()
}
