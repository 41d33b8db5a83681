// src/provider/mod.rs — Text-generation provider layer

pub mod ollama;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::infra::errors::HackJudgeError;

/// A completion service: prompt in, full reply text out.
///
/// Implementations must never disguise a failure as an empty reply.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn id(&self) -> &str;
    fn model(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String, HackJudgeError>;
}

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}
