//! Warm-up orchestrator.
//!
//! Page 1 is fetched first to discover the page count. Remaining pages are
//! fetched one after another; each fetched page is enriched and stored on
//! its own background task so fetching never waits on storage.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::cache::Cache;
use crate::error::{FetchError, StoreError, WarmupError};
use crate::tmdb::{MovieSource, UpcomingPage};
use crate::warmup::{enrich_items, warm_genres, PageStore, WarmState, FIRST_PAGE};

// == Warmer ==
/// Drives warm-up cycles against one upstream source and one cache.
#[derive(Clone)]
pub struct Warmer {
    source: Arc<dyn MovieSource>,
    cache: Arc<dyn Cache>,
    pages: PageStore,
    state: WarmState,
}

impl Warmer {
    pub fn new(source: Arc<dyn MovieSource>, cache: Arc<dyn Cache>, state: WarmState) -> Self {
        Self {
            pages: PageStore::new(cache.clone()),
            source,
            cache,
            state,
        }
    }

    pub fn state(&self) -> &WarmState {
        &self.state
    }

    pub fn pages(&self) -> &PageStore {
        &self.pages
    }

    /// Loads the genre index, then warms upcoming pages.
    pub async fn warm(&self) -> Result<WarmupReport, WarmupError> {
        self.warm_genres().await?;
        self.warm_upcoming().await
    }

    pub async fn warm_genres(&self) -> Result<usize, WarmupError> {
        warm_genres(self.source.as_ref(), self.cache.as_ref()).await
    }

    /// Runs one upcoming-pages warm-up cycle.
    ///
    /// Fails only when page 1 cannot be fetched. A later fetch failure stops
    /// the remaining fetches and is recorded in the report; pages already
    /// handed to background tasks are still stored. Returns once every fetch
    /// has been issued, with storage possibly still in flight.
    pub async fn warm_upcoming(&self) -> Result<WarmupReport, WarmupError> {
        info!("Warming-up upcoming movies...");

        let first = self.source.fetch_page(FIRST_PAGE).await?;
        let total_pages = first.total_pages;
        self.state.publish(total_pages);
        info!("Upstream reports {} upcoming pages", total_pages);

        if let Err(e) = enrich_and_store(self.cache.clone(), self.pages.clone(), FIRST_PAGE, first).await {
            error!("Failed to store page {}: {}", FIRST_PAGE, e);
        }

        let mut tasks = StoreTasks::new();
        let mut fetched = 1;
        let mut failure = None;

        for page in (FIRST_PAGE + 1)..=total_pages {
            match self.source.fetch_page(page).await {
                Ok(fetched_page) => {
                    fetched += 1;
                    tasks.spawn(self.cache.clone(), self.pages.clone(), page, fetched_page);
                }
                Err(e) => {
                    warn!("Fetching page {} failed, stopping warm-up: {}", page, e);
                    failure = Some(PageFailure { page, error: e });
                    break;
                }
            }
        }

        info!(
            "Issued {} of {} page fetches, {} stores in flight",
            fetched,
            total_pages,
            tasks.len()
        );

        Ok(WarmupReport {
            total_pages,
            fetched,
            failure,
            tasks,
        })
    }
}

async fn enrich_and_store(
    cache: Arc<dyn Cache>,
    pages: PageStore,
    page: u32,
    fetched: UpcomingPage,
) -> Result<(), StoreError> {
    let items = enrich_items(cache.as_ref(), fetched.results).await;
    pages.store(page, &items).await
}

// == Warm-up Report ==
/// A page whose fetch stopped the fan-out.
#[derive(Debug)]
pub struct PageFailure {
    pub page: u32,
    pub error: FetchError,
}

/// Outcome of [`Warmer::warm_upcoming`].
///
/// `tasks` must be either joined or detached; dropping it aborts pending stores.
#[derive(Debug)]
pub struct WarmupReport {
    /// Page count reported by page 1
    pub total_pages: u32,
    /// Number of pages fetched successfully, page 1 included
    pub fetched: u32,
    /// Fetch failure that ended the fan-out early, if any
    pub failure: Option<PageFailure>,
    /// Background enrich+store tasks for pages 2 and up
    pub tasks: StoreTasks,
}

impl WarmupReport {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

// == Store Tasks ==
/// Group of background enrich+store tasks.
#[derive(Debug, Default)]
pub struct StoreTasks {
    set: JoinSet<(u32, Result<(), StoreError>)>,
}

/// Collected results of a joined [`StoreTasks`].
#[derive(Debug, Default)]
pub struct StoreOutcome {
    pub stored: Vec<u32>,
    pub failed: Vec<(u32, StoreError)>,
}

impl StoreTasks {
    pub fn new() -> Self {
        Self::default()
    }

    fn spawn(&mut self, cache: Arc<dyn Cache>, pages: PageStore, page: u32, fetched: UpcomingPage) {
        self.set.spawn(async move {
            let result = enrich_and_store(cache, pages, page, fetched).await;
            (page, result)
        });
    }

    /// Number of tasks not yet joined.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Waits for every task and collects per-page results, stored pages ascending.
    pub async fn join(mut self) -> StoreOutcome {
        let mut outcome = StoreOutcome::default();

        while let Some(joined) = self.set.join_next().await {
            match joined {
                Ok((page, Ok(()))) => outcome.stored.push(page),
                Ok((page, Err(e))) => {
                    error!("Failed to store page {}: {}", page, e);
                    outcome.failed.push((page, e));
                }
                Err(e) => error!("Store task did not complete: {}", e),
            }
        }

        outcome.stored.sort_unstable();
        outcome
    }

    /// Lets the tasks run to completion unobserved; failures are only logged.
    pub fn detach(self) {
        if self.is_empty() {
            return;
        }
        tokio::spawn(async move {
            let outcome = self.join().await;
            info!(
                "Background stores finished: {} stored, {} failed",
                outcome.stored.len(),
                outcome.failed.len()
            );
        });
    }
}
