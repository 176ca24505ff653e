use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Message shown when the backend gave no usable `detail`.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Maximum length for error response bodies in log output
const MAX_ERROR_BODY_LENGTH: usize = 500;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rejected by server ({status}): {}", .detail.as_deref().unwrap_or(UNKNOWN_ERROR_MESSAGE))]
    Rejected {
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("Invalid backend URL: {0}")]
    InvalidBaseUrl(String),
}

/// Failure body shape. `detail` is kept loose because validation errors
/// carry a list there instead of a string.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    pub(crate) fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
        }
    }

    /// Build a rejection from a non-2xx status and its raw body.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .and_then(|d| match d {
                serde_json::Value::String(s) if !s.is_empty() => Some(s),
                _ => None,
            });
        ApiError::Rejected { status, detail }
    }

    /// The single message surfaced to the user for any failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => UNKNOWN_ERROR_MESSAGE.to_string(),
        }
    }

    /// HTTP status of a rejection, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Network(e) => e.status(),
            ApiError::InvalidBaseUrl(_) => None,
        }
    }
}
