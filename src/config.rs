//! Tool configuration, read once from `.swift2activity.toml` in the working
//! directory. Every field has a default so the file is optional.

use crate::emit::{DiagramFormat, Direction};
use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

pub const CONFIG_FILE: &str = ".swift2activity.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Swift2ActivityConfig {
    pub diagram: DiagramConfig,
    pub output: OutputConfig,
}

/// Diagram rendering options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Flow direction of the emitted diagram
    pub direction: Direction,

    /// Hard limit for node label length; longer labels are shortened
    #[serde(default = "default_max_label_length")]
    pub max_label_length: usize,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            max_label_length: default_max_label_length(),
        }
    }
}

fn default_max_label_length() -> usize {
    60
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when the CLI does not specify one
    pub default_format: DiagramFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: DiagramFormat::Mermaid,
        }
    }
}

impl Swift2ActivityConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.diagram.max_label_length == 0 {
            return Err(Error::Configuration(
                "diagram.max_label_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load configuration from `path`, falling back to defaults when the file
/// does not exist.
pub fn load_config(path: &Path) -> Result<Swift2ActivityConfig, Error> {
    if !path.exists() {
        return Ok(Swift2ActivityConfig::default());
    }
    let content = fs::read_to_string(path).map_err(|e| Error::FileSystem {
        message: format!("Failed to read configuration: {e}"),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;
    let config: Swift2ActivityConfig =
        toml::from_str(&content).map_err(|e| Error::Configuration(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

static CONFIG: OnceLock<Swift2ActivityConfig> = OnceLock::new();

/// Process-wide configuration, loaded on first access.
pub fn get_config() -> &'static Swift2ActivityConfig {
    CONFIG.get_or_init(|| {
        load_config(Path::new(CONFIG_FILE)).unwrap_or_else(|e| {
            log::warn!("ignoring invalid {CONFIG_FILE}: {e}");
            Swift2ActivityConfig::default()
        })
    })
}
