//! Upstream payloads and the cached item model.

use serde::{Deserialize, Serialize};

/// A movie genre as listed by `/genre/movie/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// One movie of an upcoming page.
///
/// `genres` is empty as fetched and holds one entry per `genre_ids`
/// element once the item has been enriched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieListItem {
    pub id: i64,
    pub title: String,
    pub original_title: String,
    pub original_language: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: String,
    pub adult: bool,
    pub video: bool,
    pub popularity: f64,
    pub vote_count: i64,
    pub vote_average: f64,
    pub genre_ids: Vec<i64>,
    pub genres: Vec<Genre>,
}

/// One page of `/movie/upcoming`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpcomingPage {
    pub page: u32,
    pub results: Vec<MovieListItem>,
    pub total_pages: u32,
    pub total_results: u32,
}

/// Body of `/genre/movie/list`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenresResponse {
    #[serde(default)]
    pub genres: Vec<Genre>,
}
