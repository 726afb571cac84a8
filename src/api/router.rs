//! Notes API routing configuration

use axum::{Router, middleware, routing::get};

use super::{
    handlers::{create_note, delete_note, get_note, healthz, list_notes},
    middleware::{AppState, auth_middleware, cors_layer},
    service::NoteService,
};

/// Create Notes API router
///
/// # Endpoints
/// - `GET /v1/healthz` - Liveness probe (no authentication)
/// - `GET /v1/notes` - List notes
/// - `POST /v1/notes` - Create a note
/// - `GET /v1/notes/{id}` - Get a single note
/// - `DELETE /v1/notes/{id}` - Delete a note
///
/// # Authentication
/// All notes routes require `Authorization: ApiKey <key>`. The health
/// probe stays public.
pub fn create_router(api_key: impl Into<String>, service: NoteService) -> Router {
    let state = AppState::new(api_key, service);

    // The health probe is added after the auth layer so it is not
    // wrapped by it.
    let v1_routes = Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}", get(get_note).delete(delete_note))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .route("/healthz", get(healthz));

    Router::new()
        .nest("/v1", v1_routes)
        .layer(cors_layer())
        .with_state(state)
}
