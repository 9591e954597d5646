use anyhow::Context;
use prostruct_config::Config;
use prostruct_core::OutputFormat;
use prostruct_export::export_all;
use prostruct_extract::{assemble, is_blank_input};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use super::resolve_formats;

/// Input for the batch strategy.
#[derive(Debug)]
pub struct BatchInput {
    pub inputs: Vec<PathBuf>,
    /// Root directory; each input gets `<root>/<file stem>/`.
    pub output: Option<PathBuf>,
    pub formats: Vec<OutputFormat>,
    pub config: Config,
}

/// Strategy converting many narrative files.
///
/// Files are independent, so each one is read, assembled and exported on the
/// rayon pool. Failures are reported per file and fail the command as a whole.
///
/// # Design
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: No internal state
#[derive(Debug, Clone, Copy)]
pub struct BatchStrategy;

impl super::CommandStrategy for BatchStrategy {
    type Input = BatchInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let formats = resolve_formats(&input.formats, &input.config.output.formats);
        let root = input.output.unwrap_or(input.config.output.directory);

        info!(
            "Converting {} files into {}",
            input.inputs.len(),
            root.display()
        );

        let results: Vec<(&PathBuf, anyhow::Result<Vec<PathBuf>>)> = input
            .inputs
            .par_iter()
            .map(|path| (path, convert_file(path, &root, &formats)))
            .collect();

        let mut failed = 0usize;
        for (path, result) in &results {
            match result {
                Ok(written) => println!("{} -> {} artifacts", path.display(), written.len()),
                Err(err) => {
                    failed += 1;
                    error!("{}: {err:#}", path.display());
                    eprintln!("{}: {err:#}", path.display());
                }
            }
        }

        if failed > 0 {
            anyhow::bail!("{failed} of {} inputs failed", results.len());
        }
        Ok(())
    }
}

/// Convert one file into `<root>/<file stem>/structured_data.*`.
/// A blank file produces no artifacts.
fn convert_file(path: &Path, root: &Path, formats: &[OutputFormat]) -> anyhow::Result<Vec<PathBuf>> {
    let stem = path
        .file_stem()
        .ok_or_else(|| anyhow::anyhow!("Input has no file name"))?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if is_blank_input(&text) {
        warn!("No input provided in {}", path.display());
        return Ok(Vec::new());
    }

    let dir = root.join(stem);
    export_all(&assemble(&text), formats)?
        .iter()
        .map(|artifact| artifact.write_to(&dir).map_err(anyhow::Error::from))
        .collect()
}
