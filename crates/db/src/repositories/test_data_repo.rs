//! Bulk seeding and clearing of movies and comments.

use movie_rating_core::test_data::SeedMovie;
use movie_rating_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::Comment;
use crate::models::movie::{Movie, MovieWithComments};
use crate::repositories::{comment_repo, movie_repo};

/// Row counts removed by [`TestDataRepo::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearedCounts {
    pub comments: u64,
    pub movies: u64,
}

/// Bulk operations used by the test-data endpoints.
pub struct TestDataRepo;

impl TestDataRepo {
    /// Persist generated movies and their comments in one transaction.
    ///
    /// Movies are inserted row by row (each has its own `actors` array);
    /// comments go in a single `UNNEST` batch once all movie IDs are known.
    /// Both keep the order of `seed` in their `seq` columns.
    pub async fn insert_seed(
        pool: &PgPool,
        seed: &[SeedMovie],
    ) -> Result<Vec<MovieWithComments>, sqlx::Error> {
        if seed.is_empty() {
            return Ok(vec![]);
        }

        let mut tx = pool.begin().await?;
        let mut movies = Vec::with_capacity(seed.len());

        let movie_query = format!(
            "INSERT INTO movies (title, genre, description, director, actors)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            movie_repo::COLUMNS
        );

        for entry in seed {
            let movie = sqlx::query_as::<_, Movie>(&movie_query)
                .bind(&entry.title)
                .bind(&entry.genre)
                .bind(&entry.description)
                .bind(&entry.director)
                .bind(&entry.actors)
                .fetch_one(&mut *tx)
                .await?;
            movies.push(movie);
        }

        let total_comments: usize = seed.iter().map(|m| m.comments.len()).sum();
        let mut movie_ids: Vec<DbId> = Vec::with_capacity(total_comments);
        let mut usernames: Vec<String> = Vec::with_capacity(total_comments);
        let mut titles: Vec<String> = Vec::with_capacity(total_comments);
        let mut contents: Vec<String> = Vec::with_capacity(total_comments);
        let mut ratings: Vec<i32> = Vec::with_capacity(total_comments);

        for (movie, entry) in movies.iter().zip(seed) {
            for comment in &entry.comments {
                movie_ids.push(movie.id);
                usernames.push(comment.username.clone());
                titles.push(comment.title.clone());
                contents.push(comment.content.clone());
                ratings.push(comment.rating);
            }
        }

        let comment_query = format!(
            "INSERT INTO comments (movie_id, username, title, content, rating) \
             SELECT movie_id, username, title, content, rating \
             FROM UNNEST($1::uuid[], $2::text[], $3::text[], $4::text[], $5::int4[]) \
             WITH ORDINALITY AS c(movie_id, username, title, content, rating, ord) \
             ORDER BY ord \
             RETURNING {}",
            comment_repo::COLUMNS
        );
        let comments = sqlx::query_as::<_, Comment>(&comment_query)
            .bind(&movie_ids)
            .bind(&usernames)
            .bind(&titles)
            .bind(&contents)
            .bind(&ratings)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            movies = movies.len(),
            comments = comments.len(),
            "Inserted seed data"
        );

        Ok(movie_repo::attach_comments(movies, comments))
    }

    /// Delete every comment, then every movie, in one transaction.
    pub async fn clear(pool: &PgPool) -> Result<ClearedCounts, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let comments = sqlx::query("DELETE FROM comments")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let movies = sqlx::query("DELETE FROM movies")
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        tracing::info!(comments, movies, "Cleared all movie data");

        Ok(ClearedCounts { comments, movies })
    }
}
