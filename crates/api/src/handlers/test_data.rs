//! Handlers for seeding and clearing synthetic data.

use axum::extract::State;
use axum::http::StatusCode;
use movie_rating_core::test_data::{generate_movies, TEST_MOVIE_COUNT};
use movie_rating_db::models::movie::MovieWithComments;
use movie_rating_db::repositories::TestDataRepo;

use crate::error::AppResult;
use crate::response::{created, Created};
use crate::state::AppState;

/// POST /test-data
///
/// Generates [`TEST_MOVIE_COUNT`] movies with 1-10 comments each and
/// persists them in one transaction.
pub async fn generate(State(state): State<AppState>) -> AppResult<Created<Vec<MovieWithComments>>> {
    // The thread-local RNG is not `Send`; it must be dropped before awaiting.
    let seed = generate_movies(&mut rand::rng(), TEST_MOVIE_COUNT);

    let movies = TestDataRepo::insert_seed(&state.pool, &seed).await?;
    tracing::info!(count = movies.len(), "Generated test data");

    Ok(created("/movies".to_string(), movies))
}

/// POST /clear-data
///
/// Deletes all comments, then all movies.
pub async fn clear(State(state): State<AppState>) -> AppResult<StatusCode> {
    let cleared = TestDataRepo::clear(&state.pool).await?;
    tracing::info!(
        comments = cleared.comments,
        movies = cleared.movies,
        "Cleared test data"
    );
    Ok(StatusCode::NO_CONTENT)
}
