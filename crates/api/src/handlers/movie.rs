//! Handlers for the `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use movie_rating_core::error::CoreError;
use movie_rating_core::movie::validate_new_movie;
use movie_rating_core::pagination::PageWindow;
use movie_rating_core::types::DbId;
use movie_rating_db::models::movie::{CreateMovie, MovieWithComments};
use movie_rating_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::{created, Created};
use crate::state::AppState;

/// GET /movies?page=&pageSize=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<MovieWithComments>>> {
    let window = PageWindow::resolve(params.page, params.page_size);
    tracing::info!(
        page = ?params.page,
        page_size = ?params.page_size,
        limit = window.limit,
        offset = window.offset,
        "Listing movies"
    );

    let movies = MovieRepo::list_page(&state.pool, window).await?;
    Ok(Json(movies))
}

/// POST /movies
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<Created<MovieWithComments>> {
    validate_new_movie(&input.title, &input.genre, input.director.as_deref())?;

    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = %movie.id, title = %movie.title, "Created movie");

    let location = format!("/movies/{}", movie.id);
    Ok(created(location, MovieWithComments::new(movie, vec![])))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MovieWithComments>> {
    tracing::info!(movie_id = %id, "Fetching movie");

    let movie = MovieRepo::find_with_comments(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;
    Ok(Json(movie))
}
