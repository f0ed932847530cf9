//! Route definitions for movies and their comments.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{comment, movie};
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// POST   /{id}/comments             -> comment::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list).post(movie::create))
        .route("/{id}", get(movie::get_by_id))
        .route("/{id}/comments", post(comment::create))
}
