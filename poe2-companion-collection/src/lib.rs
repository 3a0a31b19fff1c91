//! Hierarchical collection store for starred items and saved searches.
//!
//! The store owns an ordered forest of folder/item nodes with recursive
//! lookup, insertion, deletion, rename, and expand-toggle, and writes the
//! whole forest back to a host key-value store after every mutation. Two
//! independent forests exist per host: the item collection and the
//! saved-search bookmarks, distinguished only by storage key and payload
//! type.

pub mod error;
pub mod node;
pub mod state;
pub mod store;

pub use error::CollectionError;
pub use node::{CollectionNode, Folder, ItemNode, Payload};
pub use state::{JsonFileStore, MemoryStore, StateStore};
pub use store::CollectionStore;
