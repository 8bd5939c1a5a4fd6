//! Optional TOML configuration for the command-line front-end.
//!
//! Every key is optional; anything left out keeps the form defaults.
//!
//! ```toml
//! log_level = "debug"
//!
//! [defaults]
//! folios = 12
//! simple_copies = 2
//! authorized_copies = 1
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use notary_core::QuoteQuantities;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,

    /// Quantities used when a quote does not specify them.
    pub defaults: QuantityDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            defaults: QuantityDefaults::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantityDefaults {
    pub folios: u32,
    pub simple_copies: u32,
    pub authorized_copies: u32,
}

impl Default for QuantityDefaults {
    fn default() -> Self {
        Self {
            folios: 10,
            simple_copies: 1,
            authorized_copies: 1,
        }
    }
}

impl QuantityDefaults {
    /// Fills any missing quantity from these defaults.
    pub fn resolve(
        &self,
        folios: Option<u32>,
        simple_copies: Option<u32>,
        authorized_copies: Option<u32>,
    ) -> QuoteQuantities {
        QuoteQuantities {
            folios: folios.unwrap_or(self.folios),
            simple_copies: simple_copies.unwrap_or(self.simple_copies),
            authorized_copies: authorized_copies.unwrap_or(self.authorized_copies),
        }
    }
}

impl Config {
    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
