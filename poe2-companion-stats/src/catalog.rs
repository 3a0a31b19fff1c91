//! In-memory index over the trade site's cached stat dataset.
//!
//! The host page ships a JSON dataset keyed by namespace, each namespace
//! holding entries keyed by the remainder of a stat id, each entry exposing a
//! `text` template with `#` placeholders. The catalog is built once from that
//! blob and is immutable afterwards; a missing entry is a valid "no dataset
//! data" result, never an error.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use poe2_companion_core::split_stat_id;

/// One raw dataset entry. Only the display template is consumed.
#[derive(Debug, Deserialize)]
struct RawEntry {
    text: String,
}

/// An index of stat display templates, keyed by `(namespace, composite key)`.
pub struct StatCatalog {
    buckets: HashMap<String, HashMap<String, String>>,
}

impl StatCatalog {
    /// Build a catalog from the host's dataset blob.
    ///
    /// An unparsable blob logs a warning and yields an empty catalog: every
    /// lookup then misses and the pipeline proceeds without numeric
    /// extraction.
    pub fn from_json(blob: &str) -> Self {
        let raw: HashMap<String, HashMap<String, RawEntry>> = match serde_json::from_str(blob) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Unparsable stat dataset, proceeding without templates: {e}");
                return Self::empty();
            }
        };

        let buckets = raw
            .into_iter()
            .map(|(ns, entries)| {
                let entries = entries
                    .into_iter()
                    .map(|(key, entry)| (key, entry.text))
                    .collect();
                (ns, entries)
            })
            .collect();

        Self { buckets }
    }

    /// A catalog with no entries. Every lookup misses.
    pub fn empty() -> Self {
        Self {
            buckets: HashMap::new(),
        }
    }

    /// Parse the dataset blob exactly once for the process lifetime.
    ///
    /// Later calls return the cached catalog without re-parsing, regardless
    /// of the blob passed. Prefer passing a catalog handle explicitly; this
    /// exists for hosts that only have one dataset per page load.
    pub fn shared(blob: &str) -> &'static StatCatalog {
        static SHARED: OnceLock<StatCatalog> = OnceLock::new();
        SHARED.get_or_init(|| StatCatalog::from_json(blob))
    }

    /// Look up the display template for a stat id.
    ///
    /// The id's second segment selects the namespace bucket; everything after
    /// the first segment must exactly match an entry's composite key.
    /// Malformed ids and absent buckets or entries all resolve to `None`.
    pub fn lookup(&self, stat_id: &str) -> Option<&str> {
        let Some((bucket, key)) = split_stat_id(stat_id) else {
            log::warn!("Malformed stat id '{stat_id}', expected at least two segments");
            return None;
        };
        self.buckets.get(bucket)?.get(key).map(String::as_str)
    }

    /// Total number of indexed templates.
    pub fn len(&self) -> usize {
        self.buckets.values().map(HashMap::len).sum()
    }

    /// Returns true if the catalog holds no templates.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOB: &str = r#"{
        "stat_100": { "stat_100": { "text": "提高 #% 攻击速度" } },
        "local": {
            "local.stat_7": { "text": "+# 护甲" },
            "local.stat_8": { "text": "提高 #% 闪避" }
        }
    }"#;

    #[test]
    fn lookup_two_segment_id() {
        let catalog = StatCatalog::from_json(BLOB);
        assert_eq!(
            catalog.lookup("explicit.stat_100"),
            Some("提高 #% 攻击速度")
        );
    }

    #[test]
    fn lookup_three_segment_id() {
        let catalog = StatCatalog::from_json(BLOB);
        assert_eq!(catalog.lookup("explicit.local.stat_7"), Some("+# 护甲"));
        assert_eq!(catalog.lookup("implicit.local.stat_8"), Some("提高 #% 闪避"));
    }

    #[test]
    fn miss_is_none() {
        let catalog = StatCatalog::from_json(BLOB);
        assert_eq!(catalog.lookup("explicit.stat_999"), None);
        assert_eq!(catalog.lookup("explicit.other.stat_7"), None);
    }

    #[test]
    fn malformed_id_is_none() {
        let catalog = StatCatalog::from_json(BLOB);
        assert_eq!(catalog.lookup("explicit"), None);
        assert_eq!(catalog.lookup(""), None);
    }

    #[test]
    fn unparsable_blob_is_empty() {
        let catalog = StatCatalog::from_json("not json at all");
        assert!(catalog.is_empty());
        assert_eq!(catalog.lookup("explicit.stat_100"), None);
    }

    #[test]
    fn counts() {
        let catalog = StatCatalog::from_json(BLOB);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert!(StatCatalog::empty().is_empty());
    }
}
