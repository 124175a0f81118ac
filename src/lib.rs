//! Listing Scout
//!
//! Periodic web-scraping/notification tools: a Fort Lauderdale real-estate
//! search with criteria filtering and investment scoring, and an escape-room
//! industry news digest with content-hash deduplication.

pub mod analyze;
pub mod cli;
pub mod dedup;
pub mod filter;
pub mod logger;
pub mod notify;
pub mod pipeline;
pub mod report;
pub mod schedule;
pub mod scrapers;
pub mod storage;
pub mod types;

pub use types::*;
