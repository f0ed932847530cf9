//! Handlers for comments, nested under movies:
//! `/movies/{movie_id}/comments`

use axum::extract::{Path, State};
use axum::Json;
use movie_rating_core::comment::validate_new_comment;
use movie_rating_core::error::CoreError;
use movie_rating_core::types::DbId;
use movie_rating_db::models::comment::{Comment, CreateComment};
use movie_rating_db::repositories::CommentRepo;

use crate::error::{AppError, AppResult};
use crate::response::{created, Created};
use crate::state::AppState;

/// POST /movies/{movie_id}/comments
///
/// Returns 404 without writing anything when the movie does not exist.
pub async fn create(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<Created<Comment>> {
    tracing::info!(movie_id = %movie_id, "Adding comment to movie");

    validate_new_comment(
        &input.username,
        input.title.as_deref(),
        input.content.as_deref(),
        input.rating,
    )?;

    let comment = CommentRepo::add_to_movie(&state.pool, movie_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }))?;

    let location = format!("/movies/{movie_id}/comments/{}", comment.id);
    Ok(created(location, comment))
}
