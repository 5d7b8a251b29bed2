//! Error type shared by services, repositories and the backend client.
//!
//! Every variant carries a human-readable `message` plus free-form JSON
//! `details` so the presentation layer can render an alert without
//! knowing which layer failed.

use serde::Serialize;
use serde_json::{Value, json};

/// Serializable error summary handed to the presentation layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Unauthorized { message: String, details: Value },

    #[error("{message} (backend status {status})")]
    Upstream {
        status: u16,
        message: String,
        details: Value,
    },

    #[error("{message}")]
    Decode { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn upstream(status: u16, message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
            details,
        }
    }
    pub fn decode(message: impl Into<String>, details: Value) -> Self {
        Self::Decode {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for the variant.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Unauthorized { .. } => "unauthorized",
            AppError::Upstream { .. } => "upstream_error",
            AppError::Decode { .. } => "decode_error",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Converts the error into the payload shown by alert widgets.
    pub fn info(&self) -> ErrorInfo {
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Unauthorized { message, details }
            | AppError::Upstream {
                message, details, ..
            }
            | AppError::Decode { message, details }
            | AppError::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }

    /// Returns true for failures worth retrying on an idempotent request.
    pub fn is_transient(&self) -> bool {
        match self {
            AppError::Upstream { status, .. } => *status >= 500,
            AppError::Internal { .. } => true,
            _ => false,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

/// Maps a transport-level `reqwest` failure onto [`AppError`].
pub fn map_reqwest_error(e: reqwest::Error) -> AppError {
    let url = e.url().map(|u| u.path().to_string());

    if e.is_timeout() {
        return AppError::internal("Backend request timed out", json!({ "path": url }));
    }

    if e.is_decode() {
        return AppError::decode(
            "Backend returned an unreadable body",
            json!({ "path": url, "reason": e.to_string() }),
        );
    }

    if let Some(status) = e.status() {
        return AppError::upstream(status.as_u16(), "Backend request failed", json!({ "path": url }));
    }

    AppError::internal("Backend unreachable", json!({ "path": url }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(AppError::bad_request("x", json!({})).code(), "validation_error");
        assert_eq!(AppError::not_found("x", json!({})).code(), "not_found");
        assert_eq!(AppError::unauthorized("x", json!({})).code(), "unauthorized");
        assert_eq!(AppError::upstream(502, "x", json!({})).code(), "upstream_error");
        assert_eq!(AppError::decode("x", json!({})).code(), "decode_error");
        assert_eq!(AppError::internal("x", json!({})).code(), "internal_error");
    }

    #[test]
    fn test_info_carries_message_and_details() {
        let err = AppError::not_found("Plan not found", json!({ "plan": "GOLD" }));
        let info = err.info();

        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "Plan not found");
        assert_eq!(info.details["plan"], "GOLD");
    }

    #[test]
    fn test_display_includes_upstream_status() {
        let err = AppError::upstream(503, "Backend request failed", json!({}));
        assert_eq!(err.to_string(), "Backend request failed (backend status 503)");
    }

    #[test]
    fn test_transient_classification() {
        assert!(AppError::upstream(500, "x", json!({})).is_transient());
        assert!(AppError::internal("x", json!({})).is_transient());
        assert!(!AppError::upstream(404, "x", json!({})).is_transient());
        assert!(!AppError::unauthorized("x", json!({})).is_transient());
        assert!(!AppError::decode("x", json!({})).is_transient());
    }
}
