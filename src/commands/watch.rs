//! Watch command: regenerate artifacts on manifest changes.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::watch::FileWatcher;

/// Options for the watch command
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Root directory to watch
    pub root: PathBuf,
}

/// Execute the watch command
pub fn execute_watch(options: WatchOptions, config: Config) -> Result<()> {
    println!(
        "{} Watching {} (ctrl-c to stop)",
        style("→").cyan(),
        options.root.display()
    );
    let watcher = FileWatcher::new(config);
    watcher.watch(&options.root)?;
    Ok(())
}
