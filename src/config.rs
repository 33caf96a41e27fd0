//! Configuration for the block parse benchmark
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables prefixed with `BLOCK_BENCH_`
//! (e.g. `BLOCK_BENCH_ITERATIONS=500`).

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::constants::PROTOCOL_VERSION;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "block-bench.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Benchmark configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Hex dump of the block to parse
    pub block_path: PathBuf,

    /// Number of timed parse iterations
    pub iterations: usize,

    /// Protocol version handed to the decoder
    pub protocol_version: u32,

    /// Fail when bytes remain after the last transaction
    pub require_exact_length: bool,

    /// `getblock` JSON of the same block, timed alongside the hex dump when set
    pub json_path: Option<PathBuf>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            block_path: PathBuf::from("./blocks/623200.hex"),
            iterations: 100,
            protocol_version: PROTOCOL_VERSION,
            require_exact_length: true,
            json_path: None,
        }
    }
}

impl BenchConfig {
    fn validate(self) -> Result<Self, ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::Invalid(
                "iterations must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Load configuration from defaults, `file_path` (if it exists) and the environment.
pub fn load_config(file_path: &Path) -> Result<BenchConfig, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(BenchConfig::default()))
        .merge(Toml::file(file_path))
        .merge(Env::prefixed("BLOCK_BENCH_"));

    let config: BenchConfig = figment.extract().map_err(Box::new)?;
    debug!(?config, "loaded configuration");
    config.validate()
}
