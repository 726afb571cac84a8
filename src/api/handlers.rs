//! Notes API handler functions

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use super::middleware::AppState;
use super::types::{CreateNoteRequest, HealthResponse, NotesResponse};

/// GET /v1/healthz
///
/// Liveness probe, no authentication
pub async fn healthz() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

/// GET /v1/notes
///
/// Returns all notes, newest first
pub async fn list_notes(State(state): State<AppState>) -> impl IntoResponse {
    let notes = state.service.list();
    tracing::info!(count = notes.len(), "Received GET /v1/notes request");

    Json(NotesResponse {
        total: notes.len(),
        notes,
    })
}

/// POST /v1/notes
///
/// Creates a note from the request body
pub async fn create_note(
    State(state): State<AppState>,
    Json(payload): Json<CreateNoteRequest>,
) -> impl IntoResponse {
    tracing::info!(
        note_bytes = payload.note.len(),
        "Received POST /v1/notes request"
    );

    match state.service.create(payload.note) {
        Ok(note) => (StatusCode::CREATED, Json(note)).into_response(),
        Err(err) => {
            let status = err.status_code();
            (status, Json(err.into_response())).into_response()
        }
    }
}

/// GET /v1/notes/{id}
///
/// Returns a single note
pub async fn get_note(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    tracing::info!(id = %id, "Received GET /v1/notes/{{id}} request");

    match state.service.get(id) {
        Ok(note) => Json(note).into_response(),
        Err(err) => {
            let status = err.status_code();
            (status, Json(err.into_response())).into_response()
        }
    }
}

/// DELETE /v1/notes/{id}
///
/// Deletes a single note
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    tracing::info!(id = %id, "Received DELETE /v1/notes/{{id}} request");

    match state.service.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            let status = err.status_code();
            (status, Json(err.into_response())).into_response()
        }
    }
}
