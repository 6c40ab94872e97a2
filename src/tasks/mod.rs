//! Background Tasks Module
//!
//! Contains background tasks that run during server operation.
//!
//! # Tasks
//! - Refresh: warms the cache at startup and then at a configured interval

mod refresh;

pub use refresh::{run_warmup, spawn_refresh_task};
