//! Warm-up Module
//!
//! Pre-populates the cache from upstream and reassembles cached pages for reads.
//!
//! # Cache layout
//! - `genres/{id}` - genre name as a plain string
//! - `upcoming/{page}` - JSON array of enriched items for that page

mod aggregate;
mod enrich;
mod genres;
mod orchestrator;
mod pages;
mod state;

pub use aggregate::{page_range, Aggregator, FIRST_PAGE};
pub use enrich::enrich_items;
pub use genres::{genre_name, warm_genres};
pub use orchestrator::{PageFailure, StoreOutcome, StoreTasks, Warmer, WarmupReport};
pub use pages::PageStore;
pub use state::WarmState;
