//! HTTP client for the trade site's search, fetch, and whisper endpoints.

use serde::Deserialize;
use tokio::time::Duration;

use crate::error::TradeError;
use crate::filter::SearchQuery;

const DEFAULT_BASE_URL: &str = "https://poe.game.qq.com/api/trade2";
const DEFAULT_REALM: &str = "poe2";

/// Response from the search endpoint. Only the result id is consumed; it
/// keys the follow-up navigation URL.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    id: String,
}

/// Response from the fetch endpoint.
#[derive(Debug, Deserialize)]
struct FetchResponse {
    #[serde(default)]
    result: Vec<FetchResult>,
}

#[derive(Debug, Deserialize)]
struct FetchResult {
    listing: ListingInfo,
}

#[derive(Debug, Deserialize)]
struct ListingInfo {
    #[serde(default)]
    hideout_token: Option<String>,
}

/// Response from the whisper endpoint. The site reports success through a
/// `status` field rather than the HTTP status line.
#[derive(Debug, Deserialize)]
struct WhisperResponse {
    #[serde(default)]
    status: Option<u16>,
    #[serde(default)]
    error: Option<WhisperError>,
}

#[derive(Debug, Deserialize)]
struct WhisperError {
    message: String,
}

/// Thin async client over the trade API.
pub struct TradeClient {
    http: reqwest::Client,
    base_url: String,
    realm: String,
}

impl TradeClient {
    /// Create a client against the default (tencent-hosted) trade API.
    pub fn new() -> Result<Self, TradeError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (tests, other mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, TradeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            realm: DEFAULT_REALM.to_string(),
        })
    }

    /// POST a refined search and return its result id.
    pub async fn search(&self, league: &str, query: &SearchQuery) -> Result<String, TradeError> {
        let url = format!("{}/search/{}/{league}", self.base_url, self.realm);
        let resp = self.http.post(&url).json(query).send().await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(TradeError::Api(format!(
                "Search failed (HTTP {status}): {}",
                truncate(&text, 200)
            )));
        }

        let parsed: SearchResponse = serde_json::from_str(&text)?;
        Ok(parsed.id)
    }

    /// The navigation URL for a search result id.
    pub fn result_url(&self, league: &str, search_id: &str) -> String {
        let site = self
            .base_url
            .strip_suffix("/api/trade2")
            .unwrap_or(&self.base_url);
        format!("{site}/trade2/search/{}/{league}/{search_id}", self.realm)
    }

    /// Fetch a stored listing and return its hideout token.
    async fn fetch_hideout_token(
        &self,
        listing_id: &str,
        query_id: &str,
    ) -> Result<String, TradeError> {
        let url = format!(
            "{}/fetch/{listing_id}?query={query_id}&realm={}",
            self.base_url, self.realm
        );
        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(TradeError::Api(format!(
                "Fetch failed (HTTP {status}): {}",
                truncate(&text, 200)
            )));
        }
        let parsed: FetchResponse = serde_json::from_str(&text)?;

        let first = parsed.result.into_iter().next().ok_or(TradeError::NotFound)?;
        first.listing.hideout_token.ok_or(TradeError::NoHideoutToken)
    }

    /// Travel to the listing owner's hideout: fetch the listing's token and
    /// POST it to the whisper endpoint.
    ///
    /// A failure is reported once to the caller; there is no retry.
    pub async fn goto_hideout(&self, listing_id: &str, query_id: &str) -> Result<(), TradeError> {
        let token = self.fetch_hideout_token(listing_id, query_id).await?;

        let url = format!("{}/whisper", self.base_url);
        let body = serde_json::json!({ "token": token });
        let resp = self.http.post(&url).json(&body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(TradeError::Api(format!(
                "Whisper failed (HTTP {status}): {}",
                truncate(&text, 200)
            )));
        }
        let parsed: WhisperResponse = serde_json::from_str(&text)?;

        match parsed.status {
            Some(200) => Ok(()),
            _ => {
                let message = parsed
                    .error
                    .map(|e| e.message)
                    .unwrap_or_else(|| "unknown error".to_string());
                log::warn!("Whisper rejected for listing {listing_id}: {message}");
                Err(TradeError::Whisper(message))
            }
        }
    }
}

/// Truncate an error body for display without splitting a character.
/// The API renders Chinese error text, so a plain byte slice can land
/// mid-character.
fn truncate(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
