//! Project configuration loading and defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_include() -> Vec<String> {
    vec!["**/*.classes.json".to_string()]
}

fn default_exclude() -> Vec<String> {
    vec![
        "**/bin/**".to_string(),
        "**/obj/**".to_string(),
        "**/node_modules/**".to_string(),
        "**/target/**".to_string(),
    ]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated")
}

fn default_artifact_suffix() -> String {
    ".cs".to_string()
}

fn default_marker() -> String {
    "GenerateAutomaticInterface".to_string()
}

fn default_marker_import() -> String {
    "AutomaticInterfaceAttribute".to_string()
}

fn default_generator_name() -> String {
    "AutomaticInterface".to_string()
}

/// Main configuration structure, loaded from `.autointerface.json`.
///
/// The marker/import/generator defaults reproduce the text contract of the
/// attribute-driven toolchain this replaces, so generated artifacts stay
/// byte-compatible across a migration. All of them are overridable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Config format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Manifest patterns to include (glob syntax)
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    /// Patterns to exclude (glob syntax)
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Directory artifacts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Suffix appended to `I<ClassName>` for artifact file names
    #[serde(default = "default_artifact_suffix")]
    pub artifact_suffix: String,

    /// Marker a class must carry to qualify for generation
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Import that defines the marker, emitted into every artifact
    #[serde(default = "default_marker_import")]
    pub marker_import: String,

    /// Identifying name placed in the generated-code tag
    #[serde(default = "default_generator_name")]
    pub generator_name: String,

    /// Version string placed in the generated-code tag
    #[serde(default)]
    pub generator_version: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            include: default_include(),
            exclude: default_exclude(),
            output_dir: default_output_dir(),
            artifact_suffix: default_artifact_suffix(),
            marker: default_marker(),
            marker_import: default_marker_import(),
            generator_name: default_generator_name(),
            generator_version: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Write configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
