//! Synthetic movie and comment generation for load testing and demo seeding.
//!
//! Generation is pure: every function takes a caller-supplied [`Rng`], so
//! tests can use a seeded generator and handlers can use `rand::rng()`.
//! Generated text always fits the column limits in [`crate::movie`] and
//! [`crate::comment`].

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::comment::{MAX_COMMENT_TITLE_LEN, MAX_CONTENT_LEN, MAX_RATING, MIN_RATING};

/// Number of movies produced by one seeding run.
pub const TEST_MOVIE_COUNT: usize = 1000;

/// Minimum comments attached to each generated movie.
pub const MIN_TEST_COMMENTS: usize = 1;

/// Maximum comments attached to each generated movie.
pub const MAX_TEST_COMMENTS: usize = 10;

/// Number of lorem words used for a movie's cast.
const ACTORS_PER_MOVIE: usize = 4;

/// Number of lorem sentences in a movie description.
const DESCRIPTION_SENTENCES: usize = 3;

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "voluptate",
    "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint", "occaecat",
    "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt", "mollit",
    "anim", "id", "est", "laborum",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Bianca", "Carlos", "Chen", "Dana", "Elena", "Farah", "Gustav", "Hana",
    "Ivan", "Jamal", "Keiko", "Liam", "Maya", "Nadia", "Omar", "Priya", "Quinn", "Rosa", "Sven",
    "Tariq", "Uma", "Victor", "Wanda", "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Anders", "Barros", "Costa", "Dubois", "Eriksen", "Fischer", "Garcia", "Haddad", "Ito",
    "Jensen", "Kowalski", "Larsen", "Moreau", "Novak", "Okafor", "Petrov", "Quispe", "Rossi",
    "Sato", "Tanaka", "Ueda", "Varga", "Weber", "Yilmaz", "Zhang",
];

const USERNAME_SEPARATORS: &[&str] = &["", ".", "_"];

const RELATIONS: &[&str] = &[
    "neighbor", "cousin", "roommate", "coworker", "sister", "brother", "aunt", "friend",
];

const ADJECTIVES: &[&str] = &[
    "gripping", "forgettable", "stunning", "overlong", "charming", "baffling", "gorgeous",
    "clumsy", "haunting", "delightful", "uneven", "brilliant",
];

const OPINIONS: &[&str] = &[
    "I would watch it again tomorrow.",
    "The ending made no sense to me.",
    "Bring snacks, it runs long.",
    "The soundtrack carried the whole thing.",
    "Not my kind of film, honestly.",
    "Five minutes in and I was hooked.",
    "My popcorn was more exciting.",
    "It grows on you after a second viewing.",
];

/// A generated comment, not yet persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedComment {
    pub username: String,
    pub title: String,
    pub content: String,
    pub rating: i32,
}

/// A generated movie with its comments, not yet persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedMovie {
    pub title: String,
    pub genre: String,
    pub description: String,
    pub director: String,
    pub actors: Vec<String>,
    pub comments: Vec<SeedComment>,
}

/// Generate `count` movies, each with between [`MIN_TEST_COMMENTS`] and
/// [`MAX_TEST_COMMENTS`] comments.
pub fn generate_movies<R: Rng>(rng: &mut R, count: usize) -> Vec<SeedMovie> {
    (0..count).map(|_| generate_movie(rng)).collect()
}

/// Generate a single movie with its comments.
pub fn generate_movie<R: Rng>(rng: &mut R) -> SeedMovie {
    let comment_count = rng.random_range(MIN_TEST_COMMENTS..=MAX_TEST_COMMENTS);

    SeedMovie {
        title: word(rng).to_string(),
        genre: word(rng).to_string(),
        description: sentences(rng, DESCRIPTION_SENTENCES),
        director: full_name(rng),
        actors: (0..ACTORS_PER_MOVIE).map(|_| word(rng).to_string()).collect(),
        comments: (0..comment_count).map(|_| generate_comment(rng)).collect(),
    }
}

/// Generate a single comment.
pub fn generate_comment<R: Rng>(rng: &mut R) -> SeedComment {
    SeedComment {
        username: username(rng),
        title: truncate_chars(sentence(rng), MAX_COMMENT_TITLE_LEN),
        content: truncate_chars(review(rng), MAX_CONTENT_LEN),
        rating: rng.random_range(MIN_RATING..=MAX_RATING),
    }
}

fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    // All word lists are non-empty constants.
    items.choose(rng).copied().unwrap_or_default()
}

fn word<R: Rng>(rng: &mut R) -> &'static str {
    pick(rng, LOREM)
}

fn sentence<R: Rng>(rng: &mut R) -> String {
    let word_count = rng.random_range(3..=10);
    let words: Vec<&str> = (0..word_count).map(|_| word(rng)).collect();
    let mut text = capitalize(&words.join(" "));
    text.push('.');
    text
}

fn sentences<R: Rng>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

fn full_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

fn username<R: Rng>(rng: &mut R) -> String {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let separator = pick(rng, USERNAME_SEPARATORS);
    if rng.random_bool(0.5) {
        format!("{first}{separator}{last}{}", rng.random_range(1..100))
    } else {
        format!("{first}{separator}{last}")
    }
}

fn review<R: Rng>(rng: &mut R) -> String {
    let name = pick(rng, FIRST_NAMES);
    let relation = pick(rng, RELATIONS);
    let adjective = pick(rng, ADJECTIVES);
    let opinion = pick(rng, OPINIONS);
    format!("My {relation} {name} saw this twice and calls it {adjective}. {opinion}")
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn truncate_chars(text: String, max: usize) -> String {
    if text.chars().count() <= max {
        text
    } else {
        text.chars().take(max).collect()
    }
}
