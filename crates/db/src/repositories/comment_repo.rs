//! Repository for the `comments` table.

use movie_rating_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, movie_id, username, title, content, rating, created_at";

/// Provides insert and lookup operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Attach a new comment to a movie, returning the created row.
    ///
    /// The insert selects from `movies`, so nothing is written when the movie
    /// does not exist and `None` is returned.
    pub async fn add_to_movie(
        pool: &PgPool,
        movie_id: DbId,
        input: &CreateComment,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (movie_id, username, title, content, rating)
             SELECT id, $2, $3, $4, $5 FROM movies WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(movie_id)
            .bind(&input.username)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.rating)
            .fetch_optional(pool)
            .await
    }

    /// List a movie's comments, in insertion order.
    pub async fn list_by_movie(pool: &PgPool, movie_id: DbId) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments WHERE movie_id = $1 ORDER BY seq"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// List the comments of several movies in one round trip, in insertion order.
    pub async fn list_by_movies(
        pool: &PgPool,
        movie_ids: &[DbId],
    ) -> Result<Vec<Comment>, sqlx::Error> {
        if movie_ids.is_empty() {
            return Ok(vec![]);
        }

        let query = format!(
            "SELECT {COLUMNS} FROM comments WHERE movie_id = ANY($1) ORDER BY seq"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(movie_ids)
            .fetch_all(pool)
            .await
    }

    /// Count all comment rows, attached or not.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
