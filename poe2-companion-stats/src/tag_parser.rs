//! Parser for a modifier's tag text.
//!
//! The tag line concatenates fragments joined by `+`, each independently
//! carrying a tier code and/or roll ranges:
//! ```text
//! S12 + [10—20]
//! P3 [1.5-2.5] 到 [4-6]
//! ```
//!
//! Fragments with neither a tier nor a range are dropped. The first survivor
//! is promoted to the record's top-level fields; when more than one survives
//! the whole list is retained alongside.

use std::sync::LazyLock;

use regex::Regex;

use poe2_companion_core::{TagFragment, ValueRange};

/// Tier code: prefix/suffix letter plus tier number, case-insensitive.
static TIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([PpSs])(\d+)").expect("tier pattern"));

/// Roll range: two decimal numbers around a dash. The site renders ranges
/// with plain hyphens, en-dashes, or em-dashes interchangeably; bounds may be
/// negative or fractional. Multiple ranges in one fragment (two-part damage
/// rolls) are separated by connector text this pattern simply skips over.
static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(-?\d+(?:\.\d+)?)\s*[-\u{2013}\u{2014}]\s*(-?\d+(?:\.\d+)?)")
        .expect("range pattern")
});

/// Parse result for one modifier's tag text.
///
/// The top-level fields mirror the first surviving fragment. An all-dropped
/// tag yields the `{None, None, []}` sentinel rather than an absent value, so
/// callers never special-case "no tag".
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTag {
    pub is_prefix: Option<bool>,
    pub tier: Option<u32>,
    pub ranges: Vec<ValueRange>,
    /// All surviving fragments, present only when more than one survived.
    pub children: Option<Vec<TagFragment>>,
}

impl ParsedTag {
    fn sentinel() -> Self {
        Self {
            is_prefix: None,
            tier: None,
            ranges: Vec::new(),
            children: None,
        }
    }
}

/// Parse the raw tag text of one modifier.
pub fn parse_tag_text(tag: &str) -> ParsedTag {
    let fragments: Vec<TagFragment> = tag
        .split('+')
        .map(str::trim)
        .filter_map(parse_fragment)
        .collect();

    let Some(first) = fragments.first() else {
        return ParsedTag::sentinel();
    };

    ParsedTag {
        is_prefix: first.is_prefix,
        tier: first.tier,
        ranges: first.ranges.clone(),
        children: (fragments.len() > 1).then_some(fragments),
    }
}

/// Parse one `+`-separated piece. Returns `None` when the piece carries
/// neither a tier code nor a range.
fn parse_fragment(piece: &str) -> Option<TagFragment> {
    let (is_prefix, tier) = match TIER_RE.captures(piece) {
        Some(caps) => {
            let is_prefix = caps[1].eq_ignore_ascii_case("P");
            // The pattern only admits digits, but an absurdly long run can
            // still overflow; treat that as no tier.
            let tier = caps[2].parse::<u32>().ok();
            (tier.map(|_| is_prefix), tier)
        }
        None => (None, None),
    };

    let ranges: Vec<ValueRange> = RANGE_RE
        .captures_iter(piece)
        .filter_map(|caps| {
            let min = caps[1].parse::<f64>().ok()?;
            let max = caps[2].parse::<f64>().ok()?;
            Some(ValueRange { min, max })
        })
        .collect();

    if tier.is_none() && ranges.is_empty() {
        return None;
    }

    Some(TagFragment {
        is_prefix,
        tier,
        ranges,
    })
}
