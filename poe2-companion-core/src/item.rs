//! Item payloads carried by the collection forests.
//!
//! Serde field names mirror the JSON shape persisted in the host's key-value
//! store, so a forest written by an earlier build of the companion loads
//! unchanged.

use serde::{Deserialize, Serialize};

use crate::modifier::NormalizedModifier;

/// A skill granted by an item, parsed from its rendered skill line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSkill {
    /// The site's field name for the skill element, when exposed.
    #[serde(rename = "type")]
    pub skill_type: Option<String>,
    pub image_url: Option<String>,
    pub level: Option<u32>,
    pub name: String,
}

/// One starred trade listing, as captured from a result row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeItem {
    /// The site's stable listing id.
    pub id: String,
    pub name: String,
    pub price: String,
    pub player_name: Option<String>,
    /// The row's text flattened to one line, kept as a display fallback.
    pub full_text: String,
    /// Explicit modifiers.
    pub affixes: Vec<NormalizedModifier>,
    /// Implicit modifiers.
    #[serde(rename = "base")]
    pub implicits: Vec<NormalizedModifier>,
    /// Rune-socket modifiers.
    #[serde(default)]
    pub runes: Vec<NormalizedModifier>,
    /// Desecrated modifiers.
    #[serde(default, rename = "desecrates")]
    pub desecrated: Vec<NormalizedModifier>,
    #[serde(default)]
    pub skills: Vec<ItemSkill>,
    /// Capture time, milliseconds since the epoch.
    #[serde(rename = "timestamp")]
    pub captured_at: i64,
}

impl TradeItem {
    /// Current time in the `captured_at` encoding.
    pub fn now_millis() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A bookmarked search URL in the saved-searches forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub id: String,
    pub name: String,
    pub url: String,
}

impl SavedSearch {
    /// Create a saved search with a fresh locally generated id.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            url: url.into(),
        }
    }
}
