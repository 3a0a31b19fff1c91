//! Forest node types.
//!
//! The serialized shape matches the JSON the host's key-value store already
//! holds: a tagged `type` field (`"folder"` / `"item"`), camelCase fields,
//! and the item payload under `data`.

use serde::{Deserialize, Serialize};

use poe2_companion_core::{SavedSearch, TradeItem};

/// A payload that can be wrapped in an item node.
///
/// The id must be stable and caller-meaningful: the site's listing id for
/// trade items, a locally generated token for saved searches.
pub trait Payload {
    fn id(&self) -> &str;
    fn display_name(&self) -> &str;
}

impl Payload for TradeItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Payload for SavedSearch {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// One node of the collection forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CollectionNode<P> {
    Folder(Folder<P>),
    Item(ItemNode<P>),
}

impl<P> CollectionNode<P> {
    pub fn id(&self) -> &str {
        match self {
            Self::Folder(f) => &f.id,
            Self::Item(i) => &i.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Folder(f) => &f.name,
            Self::Item(i) => &i.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    /// Number of nodes in this subtree, the node itself included.
    pub fn subtree_len(&self) -> usize {
        match self {
            Self::Item(_) => 1,
            Self::Folder(f) => 1 + f.children.iter().map(Self::subtree_len).sum::<usize>(),
        }
    }
}

/// A folder holding an ordered list of child nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder<P> {
    pub id: String,
    pub name: String,
    pub expanded: bool,
    #[serde(default = "Vec::new")]
    pub children: Vec<CollectionNode<P>>,
}

/// A leaf node wrapping one payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemNode<P> {
    pub id: String,
    pub name: String,
    #[serde(rename = "data")]
    pub payload: P,
}
