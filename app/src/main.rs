#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use prostruct_config::Config;
use prostruct_core::OutputFormat;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    BatchInput, BatchStrategy, CommandStrategy, ConvertInput, ConvertStrategy, InfoStrategy,
    InitStrategy, PatternsStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "prostruct")]
#[command(about = "Structure prostate cancer clinical narratives", long_about = None)]
struct Cli {
    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of ~/prostruct/config.json
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one narrative into structured artifacts
    Convert {
        /// Narrative file; stdin is read when neither this nor --text is given
        input: Option<PathBuf>,

        /// Narrative passed inline
        #[arg(short, long, conflicts_with = "input")]
        text: Option<String>,

        /// Output format (json, csv, text); repeatable
        #[arg(short, long = "format")]
        formats: Vec<OutputFormat>,

        /// Directory to write artifacts to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print artifacts instead of writing files
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Convert many narrative files in parallel
    Batch {
        /// Narrative files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Directory receiving one subdirectory per input
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (json, csv, text); repeatable
        #[arg(short, long = "format")]
        formats: Vec<OutputFormat>,
    },
    /// List the extraction pattern catalog
    Patterns,
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

fn init_tracing(level: &str, verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Runs once tracing is up, so the config source shows under `--verbose`.
fn log_config_source(explicit: Option<&Path>) {
    match loaded_config_path(explicit, Config::default_path()) {
        Some(path) => debug!("Loaded config from {}", path.display()),
        None => debug!("No config file found, using defaults"),
    }
}

/// The file the configuration was read from, if any.
fn loaded_config_path(explicit: Option<&Path>, default: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| default.filter(|path| path.exists()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = cli
        .config
        .as_deref()
        .map_or_else(Config::load, Config::load_from)?;
    init_tracing(&config.logging.level, cli.verbose)?;
    log_config_source(cli.config.as_deref());

    match cli.command {
        Commands::Convert {
            input,
            text,
            formats,
            output,
            stdout,
        } => ConvertStrategy.execute(ConvertInput {
            input,
            text,
            formats,
            output,
            stdout,
            config,
        }),
        Commands::Batch {
            inputs,
            output,
            formats,
        } => BatchStrategy.execute(BatchInput {
            inputs,
            output,
            formats,
            config,
        }),
        Commands::Patterns => PatternsStrategy.execute(()),
        Commands::Init => InitStrategy.execute(()),
        Commands::Info => InfoStrategy.execute((config, cli.config)),
        Commands::Version => VersionStrategy.execute(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn config_source_prefers_explicit_then_existing_default() {
        let dir = tempfile::tempdir().expect("temp dir");
        let default = dir.path().join("config.json");

        assert_eq!(loaded_config_path(None, None), None);
        assert_eq!(loaded_config_path(None, Some(default.clone())), None);

        std::fs::write(&default, "{}").expect("write config");
        assert_eq!(
            loaded_config_path(None, Some(default.clone())),
            Some(default.clone())
        );

        let explicit = dir.path().join("other.json");
        assert_eq!(
            loaded_config_path(Some(&explicit), Some(default)),
            Some(explicit)
        );
    }
}
