//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input through `movie_rating_core`, delegate to the
//! corresponding repository in `movie_rating_db`, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod comment;
pub mod movie;
pub mod test_data;
