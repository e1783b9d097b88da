// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{HygieneError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/hygiene.toml";
pub const ENV_PREFIX: &str = "REPO_HYGIENE";

/// Upper bound on the generator history window, roughly a century.
const MAX_HISTORY_DAYS: u32 = 36_500;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub scanner: ScannerConfig,
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScannerConfig {
    pub repo_root: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorConfig {
    pub days: u32,
    pub rows: usize,
    pub output_dir: PathBuf,
    pub file_name: String,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

impl Config {
    /// Layers built-in defaults, an optional TOML file and `REPO_HYGIENE__*`
    /// environment variables, in that order.
    ///
    /// An explicit `path` must exist; the default path is skipped when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| HygieneError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        builder = match path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false)),
        };

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| HygieneError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| HygieneError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            scanner: ScannerConfig {
                repo_root: PathBuf::from("."),
            },
            generator: GeneratorConfig {
                days: 60,
                rows: 200,
                output_dir: PathBuf::from("samples"),
                file_name: "transactions_sample.csv".to_string(),
                seed: None,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.generator.days > MAX_HISTORY_DAYS {
            return Err(HygieneError::Config(format!(
                "generator.days must be at most {}",
                MAX_HISTORY_DAYS
            )));
        }

        if self.generator.file_name.trim().is_empty() {
            return Err(HygieneError::Config(
                "generator.file_name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
