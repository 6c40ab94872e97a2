//! Genre index: genre id to name, stored in the cache.

use tracing::{debug, info, warn};

use crate::cache::{genre_key, Cache};
use crate::error::WarmupError;
use crate::tmdb::MovieSource;

/// Fetches the genre list once and writes one `genres/{id}` entry per genre.
///
/// Returns the number of genres written. Re-running overwrites entries with
/// the same values unless upstream changed.
pub async fn warm_genres(source: &dyn MovieSource, cache: &dyn Cache) -> Result<usize, WarmupError> {
    info!("Warming-up genres...");

    let genres = source.fetch_genres().await?;
    for genre in &genres {
        cache.set(&genre_key(genre.id), genre.name.clone()).await?;
    }

    info!("Cached {} genres", genres.len());
    Ok(genres.len())
}

/// Resolves a genre name, yielding an empty name when it is not cached.
///
/// Backend failures are logged and treated like a miss.
pub async fn genre_name(cache: &dyn Cache, id: i64) -> String {
    match cache.get(&genre_key(id)).await {
        Ok(Some(name)) => name,
        Ok(None) => {
            debug!("Genre {} not cached", id);
            String::new()
        }
        Err(e) => {
            warn!("Genre {} lookup failed: {}", id, e);
            String::new()
        }
    }
}
