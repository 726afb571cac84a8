//! Notes API service module
//!
//! Provides the HTTP surface for the note store.
//!
//! # Supported endpoints
//! - `GET /v1/healthz` - Liveness probe (public)
//! - `GET /v1/notes` - List notes
//! - `POST /v1/notes` - Create a note
//! - `GET /v1/notes/{id}` - Fetch a single note
//! - `DELETE /v1/notes/{id}` - Delete a note
//!
//! # Usage example
//! ```rust,ignore
//! use notely_rs::api::{self, NoteService};
//!
//! let app = api::create_router("your-api-key", NoteService::new(10_000));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

mod error;
mod handlers;
mod middleware;
mod router;
pub mod service;
pub mod types;

pub use router::create_router;
pub use service::NoteService;
