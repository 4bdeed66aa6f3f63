use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, MoodTraceError>;

#[derive(Debug, Error)]
pub enum MoodTraceError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("points are not time-ordered: point {index} precedes its predecessor")]
    UnorderedPoints { index: usize },

    #[error("validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub operation: String,
    pub trace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl MoodTraceError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::UnorderedPoints { .. } => "UNORDERED_POINTS",
            Self::Validation(_) => "VALIDATION_FAILED",
        }
    }

    pub fn to_payload(&self, operation: impl Into<String>) -> ErrorPayload {
        let details = match self {
            Self::UnorderedPoints { index } => Some(serde_json::json!({ "index": index })),
            _ => None,
        };
        ErrorPayload {
            code: self.code().to_string(),
            message: self.to_string(),
            operation: operation.into(),
            trace_id: Uuid::new_v4().to_string(),
            details,
        }
    }
}
