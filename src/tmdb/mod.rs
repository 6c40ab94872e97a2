//! TMDB Module
//!
//! Upstream client for the paginated upcoming-movies listing and the genre list.

mod client;
pub mod models;

pub use client::{MovieSource, TmdbClient};
pub use models::{Genre, GenresResponse, MovieListItem, UpcomingPage};
