//! Orchestrates tag parsing, dataset lookup, and value extraction for one
//! scraped modifier.

use poe2_companion_core::NormalizedModifier;

use crate::catalog::StatCatalog;
use crate::extractor::extract_values;
use crate::tag_parser::parse_tag_text;

/// The three text fields the DOM scraper supplies per modifier element.
#[derive(Debug, Clone, Default)]
pub struct RawModifier {
    /// The tag fragment text (tier codes, roll ranges). May be empty.
    pub tag_text: String,
    /// The element's stat-id metadata field, when exposed.
    pub stat_id: Option<String>,
    /// The rendered content the player sees.
    pub content: String,
}

/// Normalize one scraped modifier.
///
/// Pure function of its inputs: re-running it for the same raw modifier and
/// catalog always produces the same record. All parsing failures degrade to
/// missing optional fields; nothing here errors.
pub fn normalize(raw: &RawModifier, catalog: &StatCatalog) -> NormalizedModifier {
    let tag = parse_tag_text(&raw.tag_text);

    let template = raw
        .stat_id
        .as_deref()
        .and_then(|id| catalog.lookup(id))
        .map(str::to_string);

    let values = template
        .as_deref()
        .and_then(|t| extract_values(t, &raw.content));

    NormalizedModifier {
        is_prefix: tag.is_prefix,
        tier: tag.tier,
        ranges: tag.ranges,
        stat_id: raw.stat_id.clone(),
        template,
        raw_text: raw.content.clone(),
        values,
        children: tag.children,
    }
}
