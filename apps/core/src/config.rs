//! Runtime configuration.
//!
//! Defaults suit the interactive tools; every field can be overridden with a
//! `STUDIO_*` environment variable (a `.env` file is loaded by the binary).

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;
use crate::studio::scoring::DEFAULT_TARGET_SECONDS;
use crate::studio::shorts_extractor::DEFAULT_MAX_CONCEPTS;
use crate::studio::title_generator::DEFAULT_METRICS_BATCH;

pub const ENV_TARGET_SECONDS: &str = "STUDIO_TARGET_SECONDS";
pub const ENV_MAX_CONCEPTS: &str = "STUDIO_MAX_CONCEPTS";
pub const ENV_TITLE_BATCH: &str = "STUDIO_TITLE_BATCH";
pub const ENV_SEED: &str = "STUDIO_SEED";
pub const ENV_LOG_FORMAT: &str = "STUDIO_LOG_FORMAT";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Settings shared by the analyzers and the binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct StudioConfig {
    /// Spoken length the hook scorer targets, in seconds.
    #[validate(range(min = 1, max = 3600))]
    pub target_duration_seconds: u32,
    /// How many clip concepts the shorts extractor keeps.
    #[validate(range(min = 1, max = 50))]
    pub max_concepts: usize,
    /// How many titles `generate_with_metrics` produces.
    #[validate(range(min = 1, max = 100))]
    pub title_batch: usize,
    /// Seed for the title random source; `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            target_duration_seconds: DEFAULT_TARGET_SECONDS,
            max_concepts: DEFAULT_MAX_CONCEPTS,
            title_batch: DEFAULT_METRICS_BATCH,
            seed: None,
            log_format: LogFormat::Text,
        }
    }
}

fn env_value<T>(name: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{}: {}", name, e))),
        _ => Ok(None),
    }
}

impl StudioConfig {
    /// Defaults overridden by any `STUDIO_*` variables that are set.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(seconds) = env_value(ENV_TARGET_SECONDS)? {
            config.target_duration_seconds = seconds;
        }
        if let Some(max) = env_value(ENV_MAX_CONCEPTS)? {
            config.max_concepts = max;
        }
        if let Some(batch) = env_value(ENV_TITLE_BATCH)? {
            config.title_batch = batch;
        }
        if let Some(seed) = env_value(ENV_SEED)? {
            config.seed = Some(seed);
        }
        if let Some(format) = env_value::<LogFormat>(ENV_LOG_FORMAT)? {
            config.log_format = format;
        }

        config.validate()?;
        Ok(config)
    }
}
