//! Manifest watching.
//!
//! Watches a directory tree for manifest changes and re-runs the full
//! pipeline on every relevant change. There is no incremental state: each
//! pass recomputes all artifacts from the manifests on disk.

use std::path::Path;
use std::sync::mpsc;

use glob::Pattern;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::generator::Generator;
use crate::manifest::{self, compile_patterns, Manifest};

/// Regenerates artifacts whenever a manifest under the watched root
/// changes.
pub struct FileWatcher {
    config: Config,
}

impl FileWatcher {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run an initial pass, then block and regenerate on every manifest
    /// change until the process is interrupted.
    pub fn watch<P: AsRef<Path>>(&self, root: P) -> Result<()> {
        let root = root.as_ref();
        self.regenerate(root);

        let include = compile_patterns(&self.config.include)?;
        let exclude = compile_patterns(&self.config.exclude)?;

        let (tx, rx) = mpsc::channel();
        let mut watcher: RecommendedWatcher = notify::recommended_watcher(tx)?;
        watcher.watch(root, RecursiveMode::Recursive)?;
        info!(root = %root.display(), "watching for manifest changes");

        for result in rx {
            match result {
                Ok(event) => {
                    if touches_manifest(&event, root, &include, &exclude) {
                        self.regenerate(root);
                    }
                }
                Err(e) => warn!("watch event error: {}", e),
            }
        }

        Ok(())
    }

    /// One full pass: discover, load, generate, write. Failures are logged
    /// and the watcher keeps running; a half-saved manifest should not
    /// kill the loop.
    fn regenerate(&self, root: &Path) {
        match self.run_pass(root) {
            Ok(written) => info!(artifacts = written, "regenerated"),
            Err(e) => warn!("regeneration failed: {}", e),
        }
    }

    fn run_pass(&self, root: &Path) -> Result<usize> {
        let paths = manifest::discover(root, &self.config)?;
        let classes = Manifest::load_all(&paths)?;
        let generator = Generator::new(self.config.clone());
        let outcomes = generator.generate_all(&classes)?;

        let output_dir = root.join(&self.config.output_dir);
        let mut written = 0;
        for outcome in &outcomes {
            if let Some(artifact) = &outcome.artifact {
                artifact.write(&output_dir)?;
                written += 1;
            }
        }
        Ok(written)
    }
}

/// Whether an event touches a path that discovery would pick up: matching
/// an include pattern and no exclude pattern.
fn touches_manifest(event: &Event, root: &Path, include: &[Pattern], exclude: &[Pattern]) -> bool {
    event.paths.iter().any(|path| {
        let relative = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        include.iter().any(|p| p.matches(&relative))
            && !exclude.iter().any(|p| p.matches(&relative))
    })
}
