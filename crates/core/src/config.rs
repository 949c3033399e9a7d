//! Configuration management for the FAQ Bot.
//!
//! Configuration is layered, later sources winning:
//! - Built-in defaults
//! - Config file (`--config`, `FAQBOT_CONFIG`, or `.faqbot/config.yaml`)
//! - Environment variables
//! - Command-line flags

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Minimum cosine similarity for a FAQ match to be accepted.
pub const DEFAULT_THRESHOLD: f64 = 0.22;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Config file that was merged, if any
    pub config_file: Option<PathBuf>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,

    /// Confidence threshold for FAQ retrieval
    pub threshold: f64,

    /// Extra seed Q&A pairs loaded at startup
    pub seed_file: Option<PathBuf>,

    /// Whether the built-in seed pairs are loaded
    pub builtin_seed: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    logging: Option<LoggingConfig>,
    retrieval: Option<RetrievalConfig>,
    seed: Option<SeedConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RetrievalConfig {
    threshold: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SeedConfig {
    file: Option<PathBuf>,
    builtin: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            log_level: None,
            verbose: false,
            no_color: false,
            threshold: DEFAULT_THRESHOLD,
            seed_file: None,
            builtin_seed: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a config file and environment variables.
    ///
    /// An explicit `config_file` (or `FAQBOT_CONFIG`) must exist. Without one,
    /// `.faqbot/config.yaml` in the current directory is merged when present.
    ///
    /// Environment variables:
    /// - `FAQBOT_CONFIG`: Path to config file
    /// - `FAQBOT_THRESHOLD`: Confidence threshold
    /// - `FAQBOT_SEED_FILE`: Extra seed Q&A file
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use faqbot_core::config::AppConfig;
    ///
    /// let config = AppConfig::load(None).expect("Failed to load config");
    /// println!("Threshold: {}", config.threshold);
    /// ```
    pub fn load(config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        let explicit = config_file.or_else(|| std::env::var_os("FAQBOT_CONFIG").map(PathBuf::from));

        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file does not exist: {:?}",
                        path
                    )));
                }
                config = config.merge_yaml(&path)?;
            }
            None => {
                let default_path = PathBuf::from(".faqbot").join("config.yaml");
                if default_path.exists() {
                    config = config.merge_yaml(&default_path)?;
                }
            }
        }

        // Environment variables override YAML config
        if let Ok(raw) = std::env::var("FAQBOT_THRESHOLD") {
            config.threshold = raw.trim().parse().map_err(|_| {
                AppError::Config(format!("FAQBOT_THRESHOLD is not a number: {:?}", raw))
            })?;
        }

        if let Some(seed) = std::env::var_os("FAQBOT_SEED_FILE") {
            config.seed_file = Some(PathBuf::from(seed));
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var_os("NO_COLOR").is_some() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let mut merged = self.merge_yaml_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        // Relative seed paths are resolved against the config file's directory
        if let Some(seed) = merged.seed_file.take() {
            let resolved = match path.parent() {
                Some(dir) if seed.is_relative() => dir.join(seed),
                _ => seed,
            };
            merged.seed_file = Some(resolved);
        }

        merged.config_file = Some(path.to_path_buf());
        tracing::debug!("Merged config file {:?}", path);
        Ok(merged)
    }

    fn merge_yaml_str(&self, contents: &str) -> AppResult<Self> {
        // An empty document deserializes to `None`
        let config_file: ConfigFile = serde_yaml::from_str::<Option<ConfigFile>>(contents)?
            .unwrap_or_default();

        let mut result = self.clone();

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        if let Some(threshold) = config_file.retrieval.and_then(|r| r.threshold) {
            result.threshold = threshold;
        }

        if let Some(seed) = config_file.seed {
            if let Some(file) = seed.file {
                result.seed_file = Some(file);
            }
            if let Some(builtin) = seed.builtin {
                result.builtin_seed = builtin;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Command-line flags take precedence over the file and environment.
    pub fn with_overrides(
        mut self,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
        threshold: Option<f64>,
        seed_file: Option<PathBuf>,
    ) -> Self {
        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        if let Some(threshold) = threshold {
            self.threshold = threshold;
        }

        if let Some(seed_file) = seed_file {
            self.seed_file = Some(seed_file);
        }

        self
    }

    /// Validate the final configuration.
    pub fn validate(&self) -> AppResult<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(AppError::Config(format!(
                "Retrieval threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }

        if let Some(ref seed) = self.seed_file {
            if !seed.is_file() {
                return Err(AppError::Config(format!(
                    "Seed file not found: {:?}",
                    seed
                )));
            }
        }

        Ok(())
    }
}
