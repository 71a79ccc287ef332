//! Render command: print one class's generated interface to stdout.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::generator::Generator;
use crate::manifest::Manifest;

/// Options for the render command
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Manifest file to read
    pub manifest: PathBuf,
    /// Class name to render
    pub class: String,
}

/// Execute the render command
pub fn execute_render(options: RenderOptions, config: Config) -> Result<()> {
    let manifest = Manifest::load(&options.manifest)?;
    let model = manifest.find_class(&options.class)?;

    let generator = Generator::new(config);
    let outcome = generator.generate(model);

    match outcome.artifact {
        Some(artifact) => {
            print!("{}", artifact.text);
            Ok(())
        }
        None => {
            eprintln!(
                "{} Class '{}' does not carry a qualifying marker",
                style("✗").red(),
                options.class
            );
            std::process::exit(1);
        }
    }
}
