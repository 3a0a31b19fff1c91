//! Shared data model for the PoE2 trade companion.
//!
//! This crate defines the types that flow between the stat-normalization
//! pipeline, the collection store, and the trade query builder without any
//! storage or network dependencies. Consumers can use these types directly
//! for serialization, display, or passing to the other companion crates.

pub mod item;
pub mod modifier;
pub mod stat_id;

pub use item::{ItemSkill, SavedSearch, TradeItem};
pub use modifier::{NormalizedModifier, TagFragment, ValueRange};
pub use stat_id::{split_stat_id, strip_qualifier};
