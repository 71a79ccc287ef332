#![forbid(unsafe_code)]
//! autointerface command line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use autointerface::commands::{
    execute_generate, execute_init, execute_render, execute_validate, execute_watch,
    GenerateOptions, InitOptions, RenderOptions, ValidateOptions, WatchOptions,
};
use autointerface::Config;

#[derive(Parser)]
#[command(name = "autointerface")]
#[command(about = "Derives C# interface declarations from class manifests")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = ".autointerface.json")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default .autointerface.json
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Discover manifests and write interface artifacts
    Generate {
        /// Root directory to search for manifests
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Output directory (default: <root>/<config outputDir>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print one class's generated interface to stdout
    Render {
        /// Class name
        class: String,

        /// Manifest file to read
        #[arg(short, long, default_value = "app.classes.json")]
        manifest: PathBuf,
    },

    /// Validate a manifest file
    Validate {
        /// Manifest file to validate
        file: PathBuf,
    },

    /// Watch for manifest changes and regenerate
    Watch {
        /// Root directory to watch
        #[arg(default_value = ".")]
        root: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load config
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Init { force } => {
            let options = InitOptions {
                path: cli.config,
                force,
            };
            execute_init(options)?;
        }

        Commands::Generate { root, output } => {
            let options = GenerateOptions { root, output };
            execute_generate(options, config)?;
        }

        Commands::Render { class, manifest } => {
            let options = RenderOptions { manifest, class };
            execute_render(options, config)?;
        }

        Commands::Validate { file } => {
            let options = ValidateOptions { file };
            execute_validate(options, config)?;
        }

        Commands::Watch { root } => {
            let options = WatchOptions { root };
            execute_watch(options, config)?;
        }
    }

    Ok(())
}
