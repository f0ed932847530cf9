//! Route definitions for synthetic data management.

use axum::routing::post;
use axum::Router;

use crate::handlers::test_data;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// POST   /test-data                 -> generate
/// POST   /clear-data                -> clear
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/test-data", post(test_data::generate))
        .route("/clear-data", post(test_data::clear))
}
