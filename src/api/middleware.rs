//! Notes API middleware

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};

use crate::common::auth::{self, AuthError};

use super::service::NoteService;
use super::types::ErrorResponse;

/// Application shared state
#[derive(Clone)]
pub struct AppState {
    /// API key
    pub api_key: String,
    /// Note store shared by all handlers
    pub service: Arc<NoteService>,
}

impl AppState {
    /// Create new application state
    pub fn new(api_key: impl Into<String>, service: NoteService) -> Self {
        Self {
            api_key: api_key.into(),
            service: Arc::new(service),
        }
    }
}

/// API Key authentication middleware
///
/// An absent or wrong credential gets `401`; a present but malformed
/// `Authorization` header is a client bug and gets `400`.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    match auth::get_api_key(request.headers()) {
        Ok(key) if auth::constant_time_eq(&key, &state.api_key) => next.run(request).await,
        Ok(_) | Err(AuthError::NoAuthHeaderIncluded) => {
            let error = ErrorResponse::authentication_error();
            (StatusCode::UNAUTHORIZED, Json(error)).into_response()
        }
        Err(err @ AuthError::MalformedAuthHeader(_)) => {
            let error = ErrorResponse::invalid_request(err.to_string());
            (StatusCode::BAD_REQUEST, Json(error)).into_response()
        }
    }
}

/// CORS middleware layer
///
/// Current configuration allows all origins to keep the API usable from
/// any frontend. Tighten the allowed origins, methods and headers here
/// if the deployment requires it.
pub fn cors_layer() -> tower_http::cors::CorsLayer {
    use tower_http::cors::{Any, CorsLayer};

    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
