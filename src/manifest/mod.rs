//! Manifest loading and discovery.
//!
//! A manifest is the input boundary of the pipeline: a JSON file carrying
//! the class models some collaborator has already flagged for interface
//! derivation. Which classes qualify is that collaborator's job; this
//! module only loads, discovers, and checks preconditions.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{AutoInterfaceError, Result};
use crate::model::ClassModel;

/// C#-shaped identifier: letter or underscore, then word characters.
static IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// One manifest file: an ordered list of class model snapshots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub classes: Vec<ClassModel>,
}

impl Manifest {
    /// Load a manifest from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AutoInterfaceError::ManifestNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let manifest: Manifest =
            serde_json::from_str(&content).map_err(|e| AutoInterfaceError::Manifest {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(manifest)
    }

    /// Load several manifests and concatenate their classes in file order.
    pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<ClassModel>> {
        let mut classes = Vec::new();
        for path in paths {
            classes.extend(Manifest::load(path)?.classes);
        }
        Ok(classes)
    }

    /// Find one class by name.
    pub fn find_class(&self, name: &str) -> Result<&ClassModel> {
        self.classes
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| AutoInterfaceError::UnknownClass(name.to_string()))
    }

    /// Check identifier well-formedness for every class: class name,
    /// namespace segments, generic parameter names, and member names.
    pub fn validate_identifiers(&self) -> Result<()> {
        for class in &self.classes {
            check_identifier(&class.name)?;
            for segment in &class.namespace {
                check_identifier(segment)?;
            }
            for generic in &class.generics {
                check_identifier(&generic.name)?;
            }
            for member in &class.members {
                if let Some(name) = member.name() {
                    check_identifier(name)?;
                }
            }
        }
        Ok(())
    }
}

fn check_identifier(name: &str) -> Result<()> {
    if IDENTIFIER_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(AutoInterfaceError::InvalidIdentifier(name.to_string()))
    }
}

/// Discover manifest files under `root` using the config's include and
/// exclude glob patterns, in a stable (path-sorted) order.
pub fn discover<P: AsRef<Path>>(root: P, config: &Config) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let include = compile_patterns(&config.include)?;
    let exclude = compile_patterns(&config.exclude)?;

    let mut found = Vec::new();
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");

        if include.iter().any(|p| p.matches(&relative))
            && !exclude.iter().any(|p| p.matches(&relative))
        {
            found.push(entry.path().to_path_buf());
        }
    }

    found.sort();
    Ok(found)
}

pub(crate) fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).map_err(Into::into))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST_JSON: &str = r#"{
        "version": "1.0.0",
        "classes": [
            {
                "namespace": ["AutomaticInterfaceExample"],
                "name": "DemoClass",
                "markers": ["GenerateAutomaticInterface"],
                "members": [
                    {
                        "kind": "property",
                        "name": "Hello",
                        "accessibility": "public",
                        "ty": { "name": "string" },
                        "getter": "public",
                        "setter": "public"
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_load_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.classes.json");
        std::fs::write(&path, MANIFEST_JSON).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.classes.len(), 1);
        assert_eq!(manifest.classes[0].name, "DemoClass");
        assert!(manifest.find_class("DemoClass").is_ok());
        assert!(manifest.find_class("Missing").is_err());
    }

    #[test]
    fn test_missing_manifest_is_typed_error() {
        let err = Manifest::load("does-not-exist.classes.json").unwrap_err();
        assert!(matches!(err, AutoInterfaceError::ManifestNotFound(_)));
    }

    #[test]
    fn test_validate_identifiers_rejects_bad_name() {
        let mut manifest: Manifest = serde_json::from_str(MANIFEST_JSON).unwrap();
        manifest.classes[0].name = "123Bad".to_string();
        let err = manifest.validate_identifiers().unwrap_err();
        assert!(matches!(
            err,
            AutoInterfaceError::InvalidIdentifier(name) if name == "123Bad"
        ));
    }

    #[test]
    fn test_discover_respects_patterns() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::create_dir_all(dir.path().join("obj")).unwrap();
        std::fs::write(dir.path().join("src/app.classes.json"), "{}").unwrap();
        std::fs::write(dir.path().join("obj/skip.classes.json"), "{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();

        let found = discover(dir.path(), &Config::default()).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("src/app.classes.json"));
    }
}
