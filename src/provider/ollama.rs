// src/provider/ollama.rs — Ollama /api/generate client

use async_trait::async_trait;
use std::time::Duration;

use super::{GenerateRequest, TextGenerator};
use crate::infra::config::{InferenceConfig, DEFAULT_ENDPOINT};
use crate::infra::errors::HackJudgeError;

const PROBE_TIMEOUT: Duration = Duration::from_secs(3);
const MAX_ERROR_BODY_CHARS: usize = 500;

pub struct OllamaGenerator {
    base_url: String,
    model: String,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl OllamaGenerator {
    pub fn new(base_url: Option<String>, model: impl Into<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_ENDPOINT.into());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            timeout: None,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &InferenceConfig) -> Self {
        Self::new(Some(config.endpoint.clone()), config.model.clone())
            .with_timeout(config.timeout())
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List installed model names via `GET /api/tags`.
    pub async fn probe(&self) -> Result<Vec<String>, HackJudgeError> {
        let resp = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
            .map_err(|e| HackJudgeError::Network {
                message: format!("Cannot reach {}: {}", self.base_url, e),
                retriable: e.is_timeout() || e.is_connect(),
            })?;

        if !resp.status().is_success() {
            return Err(HackJudgeError::Network {
                message: format!("HTTP {} from /api/tags", resp.status()),
                retriable: false,
            });
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| HackJudgeError::Protocol(format!("Invalid /api/tags response: {}", e)))?;

        let models = body["models"]
            .as_array()
            .map(|models| {
                models
                    .iter()
                    .filter_map(|m| m["name"].as_str().map(|s| s.to_string()))
                    .collect()
            })
            .unwrap_or_default();
        Ok(models)
    }

    /// True when `model` is among `installed`, treating a missing tag as `:latest`.
    pub fn has_model(installed: &[String], model: &str) -> bool {
        let wanted = with_default_tag(model);
        installed.iter().any(|m| with_default_tag(m) == wanted)
    }
}

fn with_default_tag(name: &str) -> String {
    if name.contains(':') {
        name.to_string()
    } else {
        format!("{}:latest", name)
    }
}

impl Default for OllamaGenerator {
    fn default() -> Self {
        Self::from_config(&InferenceConfig::default())
    }
}

#[async_trait]
impl TextGenerator for OllamaGenerator {
    fn id(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, HackJudgeError> {
        let body = GenerateRequest::new(self.model.clone(), prompt);

        let mut request = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&body);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| HackJudgeError::Network {
            message: e.to_string(),
            retriable: e.is_timeout() || e.is_connect(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let error_body: String = error_body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            return Err(HackJudgeError::Network {
                message: format!("HTTP {}: {}", status, error_body),
                retriable: status.is_server_error(),
            });
        }

        let resp: serde_json::Value = response
            .json()
            .await
            .map_err(|e| HackJudgeError::Protocol(format!("Failed to parse response: {}", e)))?;

        let text = resp["response"]
            .as_str()
            .ok_or_else(|| HackJudgeError::Protocol("missing string field 'response'".into()))?;

        tracing::debug!(
            model = %self.model,
            chars = text.len(),
            "Received completion"
        );
        Ok(text.to_string())
    }
}
