pub mod health;
pub mod movies;
pub mod test_data;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                                          list (paged), create
/// /movies/{id}                                     get with comments
/// /movies/{id}/comments                            add comment (POST)
///
/// /test-data                                       generate 1000 movies (POST)
/// /clear-data                                      delete everything (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Movies and their nested comments.
        .nest("/movies", movies::router())
        // Synthetic data seeding and clearing.
        .merge(test_data::router())
}
