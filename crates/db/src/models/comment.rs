//! Comment entity model and DTOs.

use movie_rating_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A comment row from the `comments` table.
///
/// `movie_id` is nullable in the schema but every comment is inserted through
/// [`crate::repositories::CommentRepo::add_to_movie`], so it is always set
/// on rows read back through the repositories.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub movie_id: DbId,
    pub username: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub rating: i32,
    pub created_at: Timestamp,
}

/// DTO for adding a comment to a movie. The owning movie comes from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub username: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub rating: i32,
}
