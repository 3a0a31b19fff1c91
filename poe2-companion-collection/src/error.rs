/// Errors that can occur during collection store operations.
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    /// The payload's id already exists somewhere in the forest. The store's
    /// state is unchanged; this guards against re-starring the same listing.
    #[error("A node with id '{0}' already exists in the collection")]
    DuplicateId(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
