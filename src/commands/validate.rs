//! Validate command: check manifest preconditions.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::generator::Generator;
use crate::manifest::Manifest;

/// Options for the validate command
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// Manifest file to validate
    pub file: PathBuf,
}

/// Execute the validate command
pub fn execute_validate(options: ValidateOptions, config: Config) -> Result<()> {
    let manifest = Manifest::load(&options.file)?;

    manifest.validate_identifiers()?;

    let generator = Generator::new(config);
    generator.check_artifact_collisions(&manifest.classes)?;

    let marked = manifest
        .classes
        .iter()
        .filter(|c| !c.markers.is_empty())
        .count();
    println!(
        "{} {} is valid ({} class(es), {} marked)",
        style("✓").green(),
        options.file.display(),
        manifest.classes.len(),
        marked
    );

    Ok(())
}
