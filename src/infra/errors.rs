// src/infra/errors.rs — Error types for HackJudge

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HackJudgeError {
    // Inference endpoint
    #[error("Inference endpoint error: {message}")]
    Network { message: String, retriable: bool },

    #[error("Unexpected inference response: {0}")]
    Protocol(String),

    // Model output
    #[error("No JSON object in model output: {0}")]
    Extraction(String),

    #[error("Model output failed validation: {0}")]
    Validation(String),

    // Infra
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HackJudgeError {
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            HackJudgeError::Network {
                retriable: true,
                ..
            }
        )
    }

    /// Collapse the error into the failure taxonomy reported by the pipeline.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HackJudgeError::Network { .. } => ErrorKind::Network,
            HackJudgeError::Protocol(_) => ErrorKind::Protocol,
            HackJudgeError::Extraction(_) => ErrorKind::Extraction,
            HackJudgeError::Validation(_) => ErrorKind::Validation,
            HackJudgeError::Config(_) | HackJudgeError::Io(_) | HackJudgeError::Other(_) => {
                ErrorKind::Internal
            }
        }
    }
}

impl From<serde_json::Error> for HackJudgeError {
    fn from(e: serde_json::Error) -> Self {
        HackJudgeError::Validation(e.to_string())
    }
}

/// Failure category carried by `PipelineState::Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Network,
    Protocol,
    Extraction,
    Validation,
    Internal,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::Network => "network",
            ErrorKind::Protocol => "protocol",
            ErrorKind::Extraction => "extraction",
            ErrorKind::Validation => "validation",
            ErrorKind::Internal => "internal",
        };
        write!(f, "{}", s)
    }
}
