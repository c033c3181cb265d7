//! Settings file handling
//!
//! The settings file is optional. It can point the driver at a specific
//! comparison tool and replace the reference lists of framework assemblies and
//! test directories that get probed on every run.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths::config_path;
use super::{Error, Result};

/// Main settings structure
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Comparison tool settings
    #[serde(default)]
    pub tool: ToolSettings,

    /// Reference list overrides
    #[serde(default)]
    pub reference: ReferenceSettings,
}

/// Which comparison tool to launch
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ToolSettings {
    /// Executable name looked up on PATH
    #[serde(default = "default_tool_name")]
    pub name: String,

    /// Explicit executable path; skips the PATH lookup
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            name: default_tool_name(),
            path: None,
        }
    }
}

fn default_tool_name() -> String {
    "mcgdiff".to_string()
}

/// Overrides for the built-in reference lists
///
/// An absent key keeps the built-in list; an empty list disables probing.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReferenceSettings {
    #[serde(default)]
    pub framework_assemblies: Option<Vec<String>>,

    #[serde(default)]
    pub test_directories: Option<Vec<String>>,
}

impl Settings {
    /// Load settings from `explicit`, or from the default settings file
    ///
    /// Returns default settings if no path was given and the default file
    /// doesn't exist. A path given explicitly must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        tracing::debug!(path = %path.display(), "Loading settings");
        let content = std::fs::read_to_string(&path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }
}
