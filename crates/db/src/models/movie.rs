//! Movie entity model and DTOs.

use movie_rating_core::movie::average_rating;
use movie_rating_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;

use crate::models::comment::Comment;

/// A movie row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub genre: String,
    pub description: Option<String>,
    pub director: Option<String>,
    pub actors: Vec<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new movie.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateMovie {
    pub title: String,
    pub genre: String,
    pub description: Option<String>,
    pub director: Option<String>,
    /// Defaults to an empty cast if omitted.
    #[serde(default)]
    pub actors: Vec<String>,
}

/// A movie together with its comments.
///
/// Serializes as the movie's fields plus `comments` and a derived `rating`.
/// The rating is computed from `comments` at serialization time and is
/// `null` when there are no comments.
#[derive(Debug, Clone)]
pub struct MovieWithComments {
    pub movie: Movie,
    pub comments: Vec<Comment>,
}

impl MovieWithComments {
    pub fn new(movie: Movie, comments: Vec<Comment>) -> Self {
        Self { movie, comments }
    }

    /// Mean of the current comment ratings, or `None` without comments.
    pub fn rating(&self) -> Option<f64> {
        average_rating(self.comments.iter().map(|c| c.rating))
    }
}

impl Serialize for MovieWithComments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire<'a> {
            #[serde(flatten)]
            movie: &'a Movie,
            comments: &'a [Comment],
            rating: Option<f64>,
        }

        Wire {
            movie: &self.movie,
            comments: &self.comments,
            rating: self.rating(),
        }
        .serialize(serializer)
    }
}
