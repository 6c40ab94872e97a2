//! Read path: reassembles cached pages into one listing.

use std::ops::RangeInclusive;

use tracing::debug;

use crate::error::StoreError;
use crate::models::UpcomingResponse;
use crate::warmup::{PageStore, WarmState};

/// First upstream page number.
pub const FIRST_PAGE: u32 = 1;

/// Pages read for a listing of `total_pages`; the last page is included.
pub fn page_range(total_pages: u32) -> RangeInclusive<u32> {
    FIRST_PAGE..=total_pages
}

/// Builds the merged upcoming listing from the page store.
#[derive(Clone)]
pub struct Aggregator {
    pages: PageStore,
    state: WarmState,
}

impl Aggregator {
    pub fn new(pages: PageStore, state: WarmState) -> Self {
        Self { pages, state }
    }

    pub fn state(&self) -> &WarmState {
        &self.state
    }

    /// Concatenates all cached pages in ascending page order.
    ///
    /// Before any warm-up the result is empty. Pages missing from the cache
    /// are skipped; a page that exists but does not parse fails the read.
    pub async fn get_upcoming(&self) -> Result<UpcomingResponse, StoreError> {
        let Some(total_pages) = self.state.total_pages() else {
            debug!("Upcoming listing requested before warm-up");
            return Ok(UpcomingResponse::default());
        };

        let mut data = Vec::new();
        for page in page_range(total_pages) {
            match self.pages.load(page).await {
                Ok(items) => data.extend(items),
                Err(StoreError::NotFound { page }) => {
                    debug!("Page {} not cached, skipping", page);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(UpcomingResponse { data })
    }
}
