//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main`.

use prostruct_core::OutputFormat;

mod batch;
mod convert;
mod info;
mod init;
mod patterns;
mod version;

pub use batch::{BatchInput, BatchStrategy};
pub use convert::{ConvertInput, ConvertStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use patterns::PatternsStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Design Principles
/// - **Static dispatch**: All calls are monomorphized at compile time
/// - **Type safety**: Each strategy defines its own input type via associated type
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Formats requested on the command line, else the configured ones, else all.
/// Duplicates are dropped, first occurrence wins.
fn resolve_formats(requested: &[OutputFormat], configured: &[OutputFormat]) -> Vec<OutputFormat> {
    let source = if !requested.is_empty() {
        requested
    } else if !configured.is_empty() {
        configured
    } else {
        &OutputFormat::ALL
    };

    let mut formats = Vec::with_capacity(source.len());
    for format in source {
        if !formats.contains(format) {
            formats.push(*format);
        }
    }
    formats
}
