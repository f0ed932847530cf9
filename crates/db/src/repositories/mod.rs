//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod comment_repo;
pub mod movie_repo;
pub mod test_data_repo;

pub use comment_repo::CommentRepo;
pub use movie_repo::MovieRepo;
pub use test_data_repo::TestDataRepo;
