// src/config/app.rs
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, warn};

use super::defaults::*;
use crate::consts::{CHUNK_SIZE_ENV, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, MAX_CHUNK_SIZE};
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default = "default_stream")]
    pub stream: StreamConfig,
}

/// Tuning for the streaming file cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StreamConfig {
    /// Plaintext bytes read per cycle; decryption reads one extra block
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        default_stream()
    }
}

impl StreamConfig {
    pub fn with_chunk_size(chunk_size: usize) -> Result<Self> {
        let config = Self { chunk_size };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 || self.chunk_size > MAX_CHUNK_SIZE {
            return Err(CoreError::Config(format!(
                "stream.chunk_size must be between 1 and {MAX_CHUNK_SIZE}, got {}",
                self.chunk_size
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let conf: Config = toml::from_str(content).map_err(|e| CoreError::Config(e.to_string()))?;
        conf.stream.validate()?;
        Ok(conf)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Apply an `AES256CBC_CHUNK_SIZE` value; out-of-range or non-numeric
    /// values are logged and ignored
    pub fn with_env_override(mut self, raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return self;
        };
        let candidate = raw
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|size| StreamConfig::with_chunk_size(size).ok());
        match candidate {
            Some(stream) => self.stream = stream,
            None => warn!("{CHUNK_SIZE_ENV}={raw:?} is not a valid chunk size, ignored"),
        }
        self
    }

    /// Read `path` if it exists, falling back to defaults when it is missing
    /// or invalid, then apply the chunk-size override
    pub fn resolve<P: AsRef<Path>>(path: P, chunk_size_override: Option<&str>) -> Self {
        let path = path.as_ref();
        let conf = if path.exists() {
            Config::from_file(path).unwrap_or_else(|e| {
                warn!("{}: {e}; using built-in defaults", path.display());
                Config::default()
            })
        } else {
            debug!("{} not found, using built-in defaults", path.display());
            Config::default()
        };
        conf.with_env_override(chunk_size_override)
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Process-wide config, resolved on first use from `AES256CBC_CONFIG`
/// and `AES256CBC_CHUNK_SIZE`
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let chunk_size = std::env::var(CHUNK_SIZE_ENV).ok();
        Config::resolve(&config_path, chunk_size.as_deref())
    })
}
