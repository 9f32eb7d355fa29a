use anyhow::{Context, Result};
use jsonhash_types::Algorithm;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the `jsonhash` binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Digest algorithm used when no `--algorithm` flag is given
    pub algorithm: Algorithm,

    /// Default tracing filter, overridden by `JSONHASH_LOG`
    pub log_filter: String,

    /// Print `digest  path` instead of the bare digest.
    /// Unset means: label only when hashing more than one input.
    pub label_output: Option<bool>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Sha256,
            log_filter: "warn".to_string(),
            label_output: None,
        }
    }
}

impl CliConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn with_algorithm(mut self, algorithm: Option<Algorithm>) -> Self {
        if let Some(algorithm) = algorithm {
            self.algorithm = algorithm;
        }
        self
    }

    pub fn labels_for(&self, inputs: usize) -> bool {
        self.label_output.unwrap_or(inputs > 1)
    }
}
