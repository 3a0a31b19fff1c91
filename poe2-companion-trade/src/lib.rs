//! Trade-site query building and the thin API client.
//!
//! [`filter`] projects a stored item's normalized modifiers into the search
//! filter clauses the site's query API expects; [`client`] issues the search,
//! fetch, and whisper calls. Failures surface once as typed errors — no
//! retries, no queued backlog.

pub mod client;
pub mod error;
pub mod filter;

pub use client::TradeClient;
pub use error::TradeError;
pub use filter::{FilterValue, SearchQuery, StatFilter, StatGroup, build_filters, build_search_query};
