/// Errors that can occur during trade API operations.
#[derive(Debug, thiserror::Error)]
pub enum TradeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Listing not found or no longer available")]
    NotFound,

    #[error("Listing has no hideout token")]
    NoHideoutToken,

    #[error("Whisper rejected: {0}")]
    Whisper(String),

    #[error("API error: {0}")]
    Api(String),
}
