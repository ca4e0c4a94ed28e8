//! Run configuration for the evaluation binary.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use env::GridConfig;

/// Which bundled agent to evaluate.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Random,
    #[default]
    Greedy,
}

/// Top-level run configuration, read from a JSON document.
///
/// Every field is optional; an empty document evaluates the greedy agent on
/// the default grid without rendering.
#[derive(Debug, Default, Deserialize)]
pub struct RunConfig {
    #[serde(flatten)]
    pub grid: GridConfig,
    #[serde(default)]
    pub agent: AgentKind,
    #[serde(default)]
    pub render: bool,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RunConfig {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is not valid JSON or names an
    /// unknown agent.
    pub fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading run configuration from {}", path.display()))?;
        Self::from_str(&json)
    }
}
