//! Init command: write a default configuration file.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::Config;

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Config file path to write
    pub path: PathBuf,
    /// Overwrite an existing config
    pub force: bool,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.path.exists() && !options.force {
        eprintln!(
            "{} {} already exists (use --force to overwrite)",
            style("✗").red(),
            options.path.display()
        );
        std::process::exit(1);
    }

    Config::default().save(&options.path)?;
    println!(
        "{} Wrote default config to {}",
        style("✓").green(),
        options.path.display()
    );

    Ok(())
}
