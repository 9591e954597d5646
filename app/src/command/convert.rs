use anyhow::Context;
use prostruct_config::Config;
use prostruct_core::{OutputFormat, short_fingerprint};
use prostruct_export::export_all;
use prostruct_extract::{assemble, is_blank_input};
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::resolve_formats;

pub const NO_INPUT_MESSAGE: &str = "Please provide input data.";

/// Input for the convert strategy.
#[derive(Debug)]
pub struct ConvertInput {
    /// Narrative file.
    pub input: Option<PathBuf>,
    /// Inline narrative, preferred over `input`.
    pub text: Option<String>,
    /// Requested formats; empty means the configured ones.
    pub formats: Vec<OutputFormat>,
    /// Output directory; `None` means the configured one.
    pub output: Option<PathBuf>,
    /// Print artifacts to stdout instead of writing files.
    pub stdout: bool,
    pub config: Config,
}

/// Strategy converting a single narrative.
///
/// Reads the narrative, assembles the record and emits one artifact per
/// requested format.
///
/// # Design
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: No internal state
#[derive(Debug, Clone, Copy)]
pub struct ConvertStrategy;

impl super::CommandStrategy for ConvertStrategy {
    type Input = ConvertInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let text = read_input(input.input.as_deref(), input.text)?;

        if is_blank_input(&text) {
            warn!("No input provided");
            eprintln!("{NO_INPUT_MESSAGE}");
            return Ok(());
        }

        info!("Converting narrative {}", short_fingerprint(&text));
        let record = assemble(&text);
        let formats = resolve_formats(&input.formats, &input.config.output.formats);
        let artifacts = export_all(&record, &formats)?;

        if input.stdout {
            for artifact in &artifacts {
                print!("{}", artifact.content);
                if !artifact.content.ends_with('\n') {
                    println!();
                }
            }
            return Ok(());
        }

        let dir = input.output.unwrap_or(input.config.output.directory);
        for artifact in &artifacts {
            let path = artifact
                .write_to(&dir)
                .with_context(|| format!("Failed to write {}", artifact.file_name()))?;
            println!("{}", path.display());
        }

        Ok(())
    }
}

/// Inline text first, then the file, then stdin when it is piped.
/// An interactive stdin yields an empty narrative instead of blocking.
pub fn read_input(path: Option<&Path>, text: Option<String>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = path {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }

    let mut buffer = String::new();
    stdin
        .read_to_string(&mut buffer)
        .context("Failed to read narrative from stdin")?;
    Ok(buffer)
}
