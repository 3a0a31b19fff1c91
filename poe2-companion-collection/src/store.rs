//! The collection store: an ordered forest with transactional persistence.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CollectionError;
use crate::node::{CollectionNode, Folder, ItemNode, Payload};
use crate::state::StateStore;

/// Exclusive owner of one collection forest, persisted under one storage key.
///
/// Mutations are applied to the in-memory forest synchronously and written
/// back through the backend immediately afterwards, in mutation order. A
/// failed write propagates to the caller but leaves the in-memory forest
/// intact, so a retry is just the next mutation.
pub struct CollectionStore<P, S> {
    backend: S,
    key: String,
    forest: Vec<CollectionNode<P>>,
    /// Insertion target for new nodes. Transient: never persisted, cleared
    /// when its target is deleted.
    cursor: Option<String>,
}

impl<P, S> CollectionStore<P, S>
where
    P: Serialize + DeserializeOwned,
    S: StateStore,
{
    /// Open a store over `backend`, populating the forest from `key`.
    ///
    /// An unparsable persisted blob logs a warning and starts empty rather
    /// than failing: a stale or corrupt value should not brick the store.
    pub fn open(backend: S, key: impl Into<String>) -> Result<Self, CollectionError> {
        let key = key.into();
        let forest = match backend.read(&key)? {
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(forest) => forest,
                Err(e) => {
                    log::warn!("Unparsable collection state under '{key}', starting empty: {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(Self {
            backend,
            key,
            forest,
            cursor: None,
        })
    }

    /// Create a folder and return its id.
    ///
    /// The folder lands under `parent_id` if that resolves to an existing
    /// folder, else under the cursor target if that resolves to a folder,
    /// else at the forest root. Always succeeds apart from persistence.
    pub fn add_folder(
        &mut self,
        name: &str,
        parent_id: Option<&str>,
    ) -> Result<String, CollectionError> {
        let id = uuid::Uuid::new_v4().to_string();
        let folder = CollectionNode::Folder(Folder {
            id: id.clone(),
            name: name.to_string(),
            expanded: true,
            children: Vec::new(),
        });

        let mut slot = Some(folder);
        for target in [parent_id, self.cursor.as_deref()] {
            if let Some(target_id) = target {
                if try_insert(&mut self.forest, target_id, &mut slot) {
                    break;
                }
            }
        }
        if let Some(folder) = slot.take() {
            self.forest.push(folder);
        }

        self.persist()?;
        Ok(id)
    }

    /// Wrap `payload` in an item node and insert it at the cursor target if
    /// that is a folder, else at the forest root.
    ///
    /// Fails with [`CollectionError::DuplicateId`] if the payload's id exists
    /// anywhere in the forest, leaving the store unchanged.
    pub fn add_item(&mut self, payload: P) -> Result<String, CollectionError>
    where
        P: Payload,
    {
        let id = payload.id().to_string();
        if self.find_node(&id).is_some() {
            return Err(CollectionError::DuplicateId(id));
        }

        let name = match payload.display_name() {
            "" => "Unknown Item".to_string(),
            name => name.to_string(),
        };
        let item = CollectionNode::Item(ItemNode {
            id: id.clone(),
            name,
            payload,
        });

        let mut slot = Some(item);
        if let Some(target_id) = self.cursor.as_deref() {
            try_insert(&mut self.forest, target_id, &mut slot);
        }
        if let Some(item) = slot.take() {
            self.forest.push(item);
        }

        self.persist()?;
        Ok(id)
    }

    /// Remove the node with `id` and, for folders, all descendants.
    ///
    /// Deleting an unknown id is a no-op, not an error. Clears the cursor if
    /// it pointed at the removed node.
    pub fn delete_node(&mut self, id: &str) -> Result<(), CollectionError> {
        filter_out(&mut self.forest, id);
        if self.cursor.as_deref() == Some(id) {
            self.cursor = None;
        }
        self.persist()
    }

    /// Depth-first search across the whole forest.
    pub fn find_node(&self, id: &str) -> Option<&CollectionNode<P>> {
        find(&self.forest, id)
    }

    /// Rename the folder with `id`. A non-folder or unknown id is a no-op.
    pub fn rename_folder(&mut self, id: &str, name: &str) -> Result<(), CollectionError> {
        if let Some(CollectionNode::Folder(folder)) = find_mut(&mut self.forest, id) {
            folder.name = name.to_string();
        }
        self.persist()
    }

    /// Flip the expanded flag of the folder with `id`.
    pub fn toggle_expanded(&mut self, id: &str) -> Result<(), CollectionError> {
        if let Some(CollectionNode::Folder(folder)) = find_mut(&mut self.forest, id) {
            folder.expanded = !folder.expanded;
        }
        self.persist()
    }

    /// Designate the insertion target for subsequent adds, or clear it.
    ///
    /// The cursor is transient UI state: it is not persisted and the forest
    /// is unchanged, so no write is issued.
    pub fn set_cursor(&mut self, id: Option<&str>) {
        self.cursor = id.map(str::to_string);
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// The root nodes, in insertion order.
    pub fn nodes(&self) -> &[CollectionNode<P>] {
        &self.forest
    }

    /// Total number of nodes in the forest.
    pub fn len(&self) -> usize {
        self.forest.iter().map(CollectionNode::subtree_len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }

    /// Serialize the whole forest and write it back under the store's key.
    /// Full rewrites keep persistence trivially consistent; forests stay in
    /// the tens-to-hundreds of nodes.
    fn persist(&mut self) -> Result<(), CollectionError> {
        let blob = serde_json::to_string(&self.forest)?;
        self.backend.write(&self.key, &blob)?;
        Ok(())
    }
}

/// Push the slotted node into the folder with `id`, anywhere in the subtree.
/// Returns true once inserted; non-folder ids never match.
fn try_insert<P>(
    nodes: &mut [CollectionNode<P>],
    id: &str,
    slot: &mut Option<CollectionNode<P>>,
) -> bool {
    for node in nodes.iter_mut() {
        if let CollectionNode::Folder(folder) = node {
            if folder.id == id {
                if let Some(new_node) = slot.take() {
                    folder.children.push(new_node);
                }
                return true;
            }
            if try_insert(&mut folder.children, id, slot) {
                return true;
            }
        }
    }
    false
}

/// Depth-first removal of the node with `id` at any level.
fn filter_out<P>(nodes: &mut Vec<CollectionNode<P>>, id: &str) {
    nodes.retain(|node| node.id() != id);
    for node in nodes.iter_mut() {
        if let CollectionNode::Folder(folder) = node {
            filter_out(&mut folder.children, id);
        }
    }
}

fn find<'a, P>(nodes: &'a [CollectionNode<P>], id: &str) -> Option<&'a CollectionNode<P>> {
    for node in nodes {
        if node.id() == id {
            return Some(node);
        }
        if let CollectionNode::Folder(folder) = node {
            if let Some(found) = find(&folder.children, id) {
                return Some(found);
            }
        }
    }
    None
}

fn find_mut<'a, P>(
    nodes: &'a mut [CollectionNode<P>],
    id: &str,
) -> Option<&'a mut CollectionNode<P>> {
    for node in nodes.iter_mut() {
        if node.id() == id {
            return Some(node);
        }
        if let CollectionNode::Folder(folder) = node {
            if let Some(found) = find_mut(&mut folder.children, id) {
                return Some(found);
            }
        }
    }
    None
}
