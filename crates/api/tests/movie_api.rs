//! HTTP-level integration tests for the movie and comment endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use common::{body_json, create_movie, get, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_movie_returns_201_with_location(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/movies",
        json!({"title": "Dune", "genre": "Sci-Fi", "actors": ["A", "B"]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(LOCATION)
        .expect("Missing Location header")
        .to_str()
        .unwrap()
        .to_string();

    let json = body_json(response).await;
    let id = json["id"].as_str().unwrap();
    assert_eq!(location, format!("/movies/{id}"));
    assert_eq!(json["title"], "Dune");
    assert_eq!(json["genre"], "Sci-Fi");
    assert_eq!(json["actors"], json!(["A", "B"]));
    assert_eq!(json["comments"], json!([]));
    assert!(json["rating"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_movie_echoes_optional_fields(pool: PgPool) {
    let json = create_movie(
        &pool,
        json!({
            "title": "Heat",
            "genre": "Crime",
            "description": "Cops and robbers",
            "director": "Michael Mann",
            "actors": []
        }),
    )
    .await;

    assert_eq!(json["description"], "Cops and robbers");
    assert_eq!(json["director"], "Michael Mann");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_movie_generates_unique_ids(pool: PgPool) {
    let body = json!({"title": "Twin", "genre": "Drama"});
    let a = create_movie(&pool, body.clone()).await;
    let b = create_movie(&pool, body).await;
    assert_ne!(a["id"], b["id"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_movie_empty_title_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/movies", json!({"title": "", "genre": "Drama"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_movie_title_too_long_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let title = "x".repeat(256);
    let response = post_json(app, "/movies", json!({"title": title, "genre": "Drama"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_movie_missing_genre_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/movies", json!({"title": "No Genre"})).await;

    assert!(response.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Get by id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_movie_by_id(pool: PgPool) {
    let created = create_movie(&pool, json!({"title": "Get Me", "genre": "Drama"})).await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Get Me");
    assert_eq!(json["id"], id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_movie_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/movies/00000000-0000-0000-0000-000000000000").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_movie_with_malformed_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/movies/not-a-uuid").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_comment_updates_rating(pool: PgPool) {
    let created = create_movie(&pool, json!({"title": "Dune", "genre": "Sci-Fi"})).await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/movies/{id}/comments"),
        json!({"username": "alice", "rating": 5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(LOCATION)
        .expect("Missing Location header")
        .to_str()
        .unwrap()
        .to_string();
    let comment = body_json(response).await;
    let comment_id = comment["id"].as_str().unwrap();
    assert_eq!(location, format!("/movies/{id}/comments/{comment_id}"));
    assert_eq!(comment["username"], "alice");
    assert_eq!(comment["rating"], 5);
    assert_eq!(comment["movie_id"], id);

    let app = common::build_test_app(pool);
    let movie = body_json(get(app, &format!("/movies/{id}")).await).await;
    assert_eq!(movie["rating"], 5.0);
    assert_eq!(movie["comments"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rating_is_mean_of_comments(pool: PgPool) {
    let created = create_movie(&pool, json!({"title": "Mixed", "genre": "Drama"})).await;
    let id = created["id"].as_str().unwrap();

    for (user, rating) in [("a", 1), ("b", 2), ("c", 4)] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            &format!("/movies/{id}/comments"),
            json!({"username": user, "rating": rating, "title": "t", "content": "c"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let movie = body_json(get(app, &format!("/movies/{id}")).await).await;
    let rating = movie["rating"].as_f64().unwrap();
    assert!((rating - 7.0 / 3.0).abs() < 1e-9);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comment_on_missing_movie_returns_404_and_writes_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/movies/00000000-0000-0000-0000-000000000000/comments",
        json!({"username": "ghost", "rating": 3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comment_rating_out_of_range_returns_400(pool: PgPool) {
    let created = create_movie(&pool, json!({"title": "Strict", "genre": "Drama"})).await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/movies/{id}/comments"),
        json!({"username": "eve", "rating": 6}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_movies_pages(pool: PgPool) {
    for i in 0..25 {
        create_movie(&pool, json!({"title": format!("Movie {i}"), "genre": "Drama"})).await;
    }

    let app = common::build_test_app(pool.clone());
    let default_page = body_json(get(app, "/movies").await).await;
    assert_eq!(default_page.as_array().unwrap().len(), 10);

    let app = common::build_test_app(pool.clone());
    let first = body_json(get(app, "/movies?page=1&pageSize=10").await).await;
    let app = common::build_test_app(pool.clone());
    let second = body_json(get(app, "/movies?page=2&pageSize=10").await).await;
    let app = common::build_test_app(pool);
    let third = body_json(get(app, "/movies?page=3&pageSize=10").await).await;

    let first = first.as_array().unwrap();
    let second = second.as_array().unwrap();
    let third = third.as_array().unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(second.len(), 10);
    assert_eq!(third.len(), 5);
    assert!(first.iter().all(|m| !second.contains(m)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_movies_zero_page_size_is_empty(pool: PgPool) {
    create_movie(&pool, json!({"title": "Only", "genre": "Drama"})).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/movies?pageSize=0").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_movies_negative_page_clamps_to_first(pool: PgPool) {
    create_movie(&pool, json!({"title": "Only", "genre": "Drama"})).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/movies?page=-3&pageSize=5").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_movies_bad_query_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/movies?page=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
