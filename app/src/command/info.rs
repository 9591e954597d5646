use prostruct_config::Config;
use prostruct_core::OutputFormat;
use prostruct_extract::CATALOG;
use std::path::PathBuf;

/// Strategy for displaying configuration information.
///
/// This strategy outputs the effective configuration:
/// - Where it was loaded from
/// - Output directory and formats
/// - Logging level
///
/// # Design
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: No internal state
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    /// Loaded configuration and the explicit path it came from, if any.
    type Input = (Config, Option<PathBuf>);

    fn execute(&self, (config, explicit): Self::Input) -> anyhow::Result<()> {
        println!("=== prostruct Configuration ===\n");

        println!("Source:");
        match explicit {
            Some(path) => println!("  File: {}", path.display()),
            None => match Config::default_path() {
                Some(path) if path.exists() => println!("  File: {}", path.display()),
                Some(path) => {
                    println!("  File: (none, using defaults)");
                    println!("  Expected at: {}", path.display());
                }
                None => println!("  File: (no home directory, using defaults)"),
            },
        }
        println!();

        println!("Output:");
        println!("  Directory: {}", config.output.directory.display());
        let formats: Vec<&str> = config.output.formats.iter().map(OutputFormat::as_str).collect();
        if formats.is_empty() {
            println!("  Formats: (empty - all formats)");
        } else {
            println!("  Formats: {}", formats.join(", "));
        }
        println!();

        println!("Logging:");
        println!("  Level: {}", config.logging.level);
        println!();

        println!("Extraction:");
        println!("  Patterns: {}", CATALOG.len());

        Ok(())
    }
}
