//! Generate command: derive interface artifacts from manifests.

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Config;
use crate::generator::{Generator, Notice};
use crate::manifest::{self, Manifest};

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Root directory to search for manifests
    pub root: PathBuf,
    /// Output directory override
    pub output: Option<PathBuf>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: None,
        }
    }
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions, config: Config) -> Result<()> {
    println!("{} Discovering manifests...", style("→").cyan());

    let paths = manifest::discover(&options.root, &config)?;
    if paths.is_empty() {
        eprintln!(
            "{} No manifests found matching include patterns",
            style("✗").red()
        );
        eprintln!("  Check your .autointerface.json include/exclude patterns");
        for pattern in &config.include {
            eprintln!("    include: {}", pattern);
        }
        std::process::exit(1);
    }

    let classes = Manifest::load_all(&paths)?;
    println!(
        "  {} manifest(s), {} class(es)",
        paths.len(),
        classes.len()
    );

    let output_dir = options
        .output
        .clone()
        .unwrap_or_else(|| options.root.join(&config.output_dir));

    let generator = Generator::new(config);

    let progress = ProgressBar::new(classes.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let outcomes = generator.generate_all_with(&classes, |outcome| {
        match &outcome.notice {
            Notice::Completed { class, artifact } => {
                progress.set_message(format!("{} → {}", class, artifact));
            }
            Notice::MarkerMissing { class } => {
                progress.set_message(format!("{} skipped (no marker)", class));
            }
        }
        progress.inc(1);
    })?;
    progress.finish_and_clear();

    let mut written = 0usize;
    let mut skipped = 0usize;
    for outcome in &outcomes {
        match &outcome.artifact {
            Some(artifact) => {
                artifact.write(&output_dir)?;
                written += 1;
            }
            None => skipped += 1,
        }
    }

    println!(
        "{} {} artifact(s) written to {}",
        style("✓").green(),
        written,
        output_dir.display()
    );
    if skipped > 0 {
        println!("  {} class(es) skipped without a qualifying marker", skipped);
    }

    Ok(())
}
