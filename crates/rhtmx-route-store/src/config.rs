// File: src/config.rs
// Purpose: Store configuration parsing from a `[store]` TOML table

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Matching options applied to every pattern of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Require a trailing `/` on the path to match the pattern exactly.
    /// When `false` (default), one trailing `/` is accepted on lookups.
    #[serde(default = "default_false")]
    pub strict: bool,

    /// Percent-decode captured parameter values (default: true)
    #[serde(default = "default_true")]
    pub decode_params: bool,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    store: StoreConfig,
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            strict: false,
            decode_params: true,
        }
    }
}

impl StoreConfig {
    /// Reads the `[store]` table of a TOML file
    ///
    /// A missing or empty file, or a file without a `[store]` table, yields
    /// the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parses the `[store]` table from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.store)
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_decode_params(mut self, decode_params: bool) -> Self {
        self.decode_params = decode_params;
        self
    }
}
