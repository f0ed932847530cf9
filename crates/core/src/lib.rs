//! Domain layer for the movie rating service.
//!
//! Pure types and rules with no I/O: identifiers, the shared error type,
//! field limits and validation, the derived rating, the pagination policy,
//! and the synthetic test-data generator.

pub mod comment;
pub mod error;
pub mod movie;
pub mod pagination;
pub mod test_data;
pub mod types;
pub mod validation;
