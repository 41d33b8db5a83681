// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::evaluator::normalize::NormalizeMode;
use crate::infra::errors::HackJudgeError;
use crate::infra::paths;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "qwen3:8b";
pub const DEFAULT_TIMEOUT_MS: u64 = 120_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub inference: InferenceConfig,

    #[serde(default)]
    pub evaluation: EvaluationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the text-generation server. `/api/generate` is appended.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Per-request timeout. 0 disables it.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl InferenceConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}

fn default_model() -> String {
    DEFAULT_MODEL.into()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationConfig {
    #[serde(default)]
    pub mode: NormalizeMode,
}

impl Config {
    /// Load config from the default location, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        match paths::config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the inference client cannot use.
    pub fn validate(&self) -> Result<(), HackJudgeError> {
        let endpoint = url::Url::parse(&self.inference.endpoint).map_err(|e| {
            HackJudgeError::Config(format!(
                "invalid endpoint '{}': {}",
                self.inference.endpoint, e
            ))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(HackJudgeError::Config(format!(
                "endpoint must be http or https, got '{}'",
                endpoint.scheme()
            )));
        }
        if self.inference.model.trim().is_empty() {
            return Err(HackJudgeError::Config("model must not be empty".into()));
        }
        Ok(())
    }
}
