use prostruct_core::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

const CONFIG_DIR: &str = "prostruct";
const CONFIG_FILE: &str = "config.json";

const CONFIG_TEMPLATE: &str = r#"{
  "output": {
    "directory": ".",
    "formats": ["json", "csv", "text"]
  },
  "logging": {
    "level": "info"
  }
}
"#;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory artifacts are written to when no `--output` is given.
    #[serde(default = "OutputConfig::default_directory")]
    pub directory: PathBuf,
    /// Formats produced when no `--format` is given.
    #[serde(default = "OutputConfig::default_formats")]
    pub formats: Vec<OutputFormat>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: Self::default_directory(),
            formats: Self::default_formats(),
        }
    }
}

impl OutputConfig {
    fn default_directory() -> PathBuf {
        PathBuf::from(".")
    }

    fn default_formats() -> Vec<OutputFormat> {
        OutputFormat::ALL.to_vec()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Config {
    fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR))
    }

    /// `~/prostruct/config.json`.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// `~/prostruct/config.json`, or `None` without a home directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        Self::config_path().ok()
    }

    /// Load the configuration from its default location.
    ///
    /// A missing file, or a missing home directory, is not an error: the
    /// converter runs on defaults until `prostruct init` has been run.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_default(Self::default_path().as_deref())
    }

    /// Load `path` when it exists, defaults otherwise.
    fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load_from(path),
            _ => Ok(Self::default()),
        }
    }

    /// Load the configuration from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file not found at: {}", path.display());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|err| anyhow::anyhow!("Invalid config file {}: {err}", path.display()))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Write the default template to `~/prostruct/config.json`.
    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = Self::create_config_at(&config_dir.join(CONFIG_FILE))?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!("   1. Edit output.directory to choose where artifacts are written");
        println!("   2. Run 'prostruct convert <FILE>' to structure a narrative");
        println!();
        println!("Configuration options:");
        println!("   - output.formats: any of \"json\", \"csv\", \"text\"");
        println!("   - logging.level: tracing filter, e.g. \"info\" or \"prostruct=debug\"");
        println!();
        Ok(())
    }

    /// Write the default template to `path`. Refuses to overwrite.
    pub fn create_config_at(path: &Path) -> anyhow::Result<PathBuf> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, CONFIG_TEMPLATE)?;

        info!("Wrote config template to {}", path.display());
        Ok(path.to_path_buf())
    }
}
