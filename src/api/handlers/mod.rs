use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect},
    Form, Json,
};

use super::{error::ApiError, AppState};
use crate::models::*;
use crate::templates::{PlaceList, PlaceListView};

/// Where every mutating request sends the browser afterwards.
pub const WISHLIST_PATH: &str = "/";

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Wishlist
// ============================================================

pub async fn place_list(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render_list(&state, PlaceList::Wishlist)
}

/// Add a place, then redirect back to the wishlist so a refresh does not
/// submit the form again.
pub async fn add_place(
    State(state): State<AppState>,
    Form(input): Form<CreatePlaceInput>,
) -> Result<Redirect, ApiError> {
    let place = state.db.create_place(input)?;
    tracing::debug!("Created place {} ({:?})", place.id, place.name);
    Ok(Redirect::to(WISHLIST_PATH))
}

// ============================================================
// Visited
// ============================================================

pub async fn places_visited(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render_list(&state, PlaceList::Visited)
}

pub async fn place_was_visited(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, ApiError> {
    let place = state
        .db
        .set_visited(id, true)?
        .ok_or(ApiError::PlaceNotFound(id))?;
    tracing::debug!("Marked place {} ({:?}) as visited", place.id, place.name);
    Ok(Redirect::to(WISHLIST_PATH))
}

fn render_list(state: &AppState, page: PlaceList) -> Result<Html<String>, ApiError> {
    let places = state.db.list_places(page.visited())?;
    let view = PlaceListView::new(page, places);
    let html = state.templates.render_place_list(&view)?;
    Ok(Html(html))
}
