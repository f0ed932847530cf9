//! Comment field limits and input validation.

use crate::error::CoreError;
use crate::validation::{validate_optional, validate_required};

/// Maximum length of a commenter's username.
pub const MAX_USERNAME_LEN: usize = 100;

/// Maximum length of a comment title.
pub const MAX_COMMENT_TITLE_LEN: usize = 100;

/// Maximum length of a comment body.
pub const MAX_CONTENT_LEN: usize = 255;

/// Lowest accepted rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating.
pub const MAX_RATING: i32 = 5;

/// Validate that a rating lies within `MIN_RATING..=MAX_RATING`.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

/// Validate the caller-supplied fields of a new comment.
pub fn validate_new_comment(
    username: &str,
    title: Option<&str>,
    content: Option<&str>,
    rating: i32,
) -> Result<(), CoreError> {
    validate_required("username", username, MAX_USERNAME_LEN)?;
    validate_optional("title", title, MAX_COMMENT_TITLE_LEN)?;
    validate_optional("content", content, MAX_CONTENT_LEN)?;
    validate_rating(rating)
}
