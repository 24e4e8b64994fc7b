//! HTTP API Module
//!
//! The request-facing layer: axum handlers wired over the query, search and
//! store components, plus the pure pagination and envelope helpers they
//! share.
//!
//! ## Routes
//! - **`GET /api/health`**: liveness probe.
//! - **`GET /api/:kind`**: filterable, searchable, sorted, paginated listing
//!   of one resource kind with per-item match annotations.
//! - **`GET /api/:kind/:id`**: a single resource with its cross-kind
//!   `in_state_resources` summaries.
//! - **`GET /api/search_all`**: relevance-ranked search across all kinds.
//!
//! ## Submodules
//! - **`handlers`**: the axum request handlers.
//! - **`pagination`**: page math and navigation-link building.
//! - **`response`**: resource serialization and envelope assembly.
//! - **`error`**: the per-request error type and its HTTP mapping.

pub mod error;
pub mod handlers;
pub mod pagination;
pub mod response;

pub use error::ApiError;

use crate::config::Vocabulary;
use crate::store::memory::MemoryStore;
use axum::extract::Extension;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Builds the application router. Store and vocabulary are read-only after
/// startup and shared with every handler through `Extension` layers.
pub fn router(store: Arc<MemoryStore>, vocab: Arc<Vocabulary>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::handle_health))
        .route("/api/search_all", get(handlers::handle_search_all))
        .route("/api/:kind", get(handlers::handle_list_resources))
        .route("/api/:kind/:id", get(handlers::handle_get_resource))
        .layer(Extension(store))
        .layer(Extension(vocab))
}
