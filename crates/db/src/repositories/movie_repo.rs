//! Repository for the `movies` table.

use std::collections::HashMap;

use movie_rating_core::pagination::PageWindow;
use movie_rating_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::Comment;
use crate::models::movie::{CreateMovie, Movie, MovieWithComments};
use crate::repositories::CommentRepo;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str =
    "id, title, genre, description, director, actors, created_at";

/// Provides create and read operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, genre, description, director, actors)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(&input.description)
            .bind(&input.director)
            .bind(&input.actors)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its ID, without comments.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a movie by its ID together with its comments.
    pub async fn find_with_comments(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieWithComments>, sqlx::Error> {
        let Some(movie) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let comments = CommentRepo::list_by_movie(pool, id).await?;
        Ok(Some(MovieWithComments::new(movie, comments)))
    }

    /// List one page of movies with their comments.
    ///
    /// Movies are ordered by insertion (`seq`) so consecutive pages neither
    /// overlap nor skip rows. A zero-sized window returns without querying.
    pub async fn list_page(
        pool: &PgPool,
        window: PageWindow,
    ) -> Result<Vec<MovieWithComments>, sqlx::Error> {
        if window.is_empty() {
            return Ok(vec![]);
        }

        let query = format!(
            "SELECT {COLUMNS} FROM movies ORDER BY seq LIMIT $1 OFFSET $2"
        );
        let movies = sqlx::query_as::<_, Movie>(&query)
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = movies.iter().map(|m| m.id).collect();
        let comments = CommentRepo::list_by_movies(pool, &ids).await?;

        Ok(attach_comments(movies, comments))
    }

    /// Count all movies.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}

/// Group `comments` under their movies, preserving the order of both lists.
pub(crate) fn attach_comments(
    movies: Vec<Movie>,
    comments: Vec<Comment>,
) -> Vec<MovieWithComments> {
    let mut by_movie: HashMap<DbId, Vec<Comment>> = HashMap::with_capacity(movies.len());
    for comment in comments {
        by_movie.entry(comment.movie_id).or_default().push(comment);
    }

    movies
        .into_iter()
        .map(|movie| {
            let comments = by_movie.remove(&movie.id).unwrap_or_default();
            MovieWithComments::new(movie, comments)
        })
        .collect()
}
