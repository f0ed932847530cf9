//! Movie field limits, input validation, and the derived rating.

use crate::error::CoreError;
use crate::validation::{validate_optional, validate_required};

/// Maximum length of a movie title.
pub const MAX_TITLE_LEN: usize = 255;

/// Maximum length of a movie genre.
pub const MAX_GENRE_LEN: usize = 255;

/// Maximum length of a director name.
pub const MAX_DIRECTOR_LEN: usize = 255;

/// Validate the caller-supplied fields of a new movie.
///
/// `description` is unbounded and `actors` may be empty, so neither is
/// checked here.
pub fn validate_new_movie(
    title: &str,
    genre: &str,
    director: Option<&str>,
) -> Result<(), CoreError> {
    validate_required("title", title, MAX_TITLE_LEN)?;
    validate_required("genre", genre, MAX_GENRE_LEN)?;
    validate_optional("director", director, MAX_DIRECTOR_LEN)?;
    Ok(())
}

/// Arithmetic mean of comment ratings.
///
/// Returns `None` when there are no ratings; a movie without comments has
/// no rating rather than a zero rating.
pub fn average_rating<I>(ratings: I) -> Option<f64>
where
    I: IntoIterator<Item = i32>,
{
    let (sum, count) = ratings
        .into_iter()
        .fold((0i64, 0u32), |(sum, count), r| (sum + i64::from(r), count + 1));

    if count == 0 {
        None
    } else {
        Some(sum as f64 / f64::from(count))
    }
}
