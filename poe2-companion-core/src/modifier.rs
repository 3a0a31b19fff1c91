//! Normalized modifier records produced by the stat pipeline.
//!
//! One scraped modifier line carries two pieces of text: a short tag fragment
//! (tier code plus the roll's possible bounds) and the rendered content the
//! player actually sees. The pipeline turns both into one
//! [`NormalizedModifier`], which is what the collection store persists and
//! the query builder reads back.

use serde::{Deserialize, Serialize};

/// A numeric roll range from a modifier's tag text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

/// One `+`-separated piece of a modifier's tag text.
///
/// A fragment may carry a tier code (`P3` = prefix tier 3, `S12` = suffix
/// tier 12), one or more roll ranges, or both. Fragments with neither are
/// dropped during parsing and never appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagFragment {
    /// `Some(true)` for a prefix tier code, `Some(false)` for a suffix,
    /// `None` when the fragment had ranges only.
    pub is_prefix: Option<bool>,
    pub tier: Option<u32>,
    #[serde(default)]
    pub ranges: Vec<ValueRange>,
}

/// A fully normalized modifier line.
///
/// The top-level tier/range fields mirror the first surviving tag fragment;
/// when more than one fragment survived they are all retained in `children`.
/// `values` holds the realized roll extracted from `raw_text` against the
/// dataset template, or `None` when no template exists or nothing matched —
/// "no usable value" is always `None`, never an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedModifier {
    pub is_prefix: Option<bool>,
    pub tier: Option<u32>,
    #[serde(default)]
    pub ranges: Vec<ValueRange>,
    pub stat_id: Option<String>,
    pub template: Option<String>,
    pub raw_text: String,
    pub values: Option<Vec<f64>>,
    pub children: Option<Vec<TagFragment>>,
}

impl NormalizedModifier {
    /// The first extracted value, or zero when no value was recovered.
    ///
    /// This is the projection the trade site's search filters use.
    pub fn first_value_or_zero(&self) -> f64 {
        self.values
            .as_ref()
            .and_then(|v| v.first().copied())
            .unwrap_or(0.0)
    }
}
