//! Notes API type definitions

use serde::{Deserialize, Serialize};

use super::service::Note;

// === Error Response ===

/// API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

impl ErrorResponse {
    /// Create new error response
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                error_type: error_type.into(),
                message: message.into(),
            },
        }
    }

    /// Create authentication error response
    pub fn authentication_error() -> Self {
        Self::new("authentication_error", "Invalid API key")
    }

    /// Create invalid request error response
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new("invalid_request_error", message)
    }

    /// Create not found error response
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("not_found_error", message)
    }
}

// === Health Endpoint Types ===

/// Health probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

// === Notes Endpoint Types ===

/// Create note request body
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    /// Note text
    pub note: String,
}

/// Notes list response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesResponse {
    /// Total number of notes
    pub total: usize,
    /// Notes, newest first
    pub notes: Vec<Note>,
}
