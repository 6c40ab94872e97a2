//! Cache-backed page store.

use std::sync::Arc;

use tracing::debug;

use crate::cache::{page_key, Cache};
use crate::error::StoreError;
use crate::tmdb::MovieListItem;

/// Reads and writes per-page item lists under `upcoming/{page}`.
#[derive(Clone)]
pub struct PageStore {
    cache: Arc<dyn Cache>,
}

impl PageStore {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self { cache }
    }

    /// Serializes `items` as one JSON blob and writes it without expiration.
    pub async fn store(&self, page: u32, items: &[MovieListItem]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(items).map_err(|source| StoreError::Serialize { page, source })?;

        debug!("Storing page {} ({} items)", page, items.len());
        self.cache.set(&page_key(page), blob).await?;
        Ok(())
    }

    /// Loads the items of `page`.
    ///
    /// An absent key and an empty value are both `NotFound`; a value that
    /// does not parse is `Deserialize`.
    pub async fn load(&self, page: u32) -> Result<Vec<MovieListItem>, StoreError> {
        let blob = match self.cache.get(&page_key(page)).await? {
            Some(blob) if !blob.is_empty() => blob,
            _ => return Err(StoreError::NotFound { page }),
        };

        serde_json::from_str(&blob).map_err(|source| StoreError::Deserialize { page, source })
    }
}
