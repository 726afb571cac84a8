//! Notes API error type definitions

use std::fmt;

use axum::http::StatusCode;
use uuid::Uuid;

use super::types::ErrorResponse;

/// Note service error types
#[derive(Debug)]
pub enum NoteServiceError {
    /// Note not found
    NotFound(Uuid),

    /// Note rejected by validation
    InvalidNote(String),
}

impl fmt::Display for NoteServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteServiceError::NotFound(id) => write!(f, "Note not found: {}", id),
            NoteServiceError::InvalidNote(msg) => write!(f, "Invalid note: {}", msg),
        }
    }
}

impl std::error::Error for NoteServiceError {}

impl NoteServiceError {
    /// Get corresponding HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            NoteServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            NoteServiceError::InvalidNote(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Convert to API error response
    pub fn into_response(self) -> ErrorResponse {
        match &self {
            NoteServiceError::NotFound(_) => ErrorResponse::not_found(self.to_string()),
            NoteServiceError::InvalidNote(_) => ErrorResponse::invalid_request(self.to_string()),
        }
    }
}
