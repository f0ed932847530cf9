//! Shared response shapes for API handlers.

use axum::http::header::LOCATION;
use axum::http::{HeaderName, StatusCode};
use axum::Json;
use serde::Serialize;

/// A `201 Created` response carrying a `Location` header and a JSON body.
pub type Created<T> = (StatusCode, [(HeaderName, String); 1], Json<T>);

/// Build a [`Created`] response for a resource at `location`.
pub fn created<T: Serialize>(location: String, body: T) -> Created<T> {
    (StatusCode::CREATED, [(LOCATION, location)], Json(body))
}
