mod error;
mod handlers;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::db::Database;
use crate::templates::Templates;

pub use error::ApiError;
pub use handlers::WISHLIST_PATH;

/// Shared handles injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(db: Database, templates: Templates) -> Self {
        Self {
            db,
            templates: Arc::new(templates),
        }
    }

    /// State using the templates compiled into the binary.
    pub fn with_embedded_templates(db: Database) -> Result<Self> {
        Ok(Self::new(db, Templates::embedded()?))
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::place_list).post(handlers::add_place))
        .route("/visited", get(handlers::places_visited))
        .route("/place/{id}/was_visited", post(handlers::place_was_visited))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
