//! Helpers for the dotted stat identifiers the trade site attaches to
//! modifier elements (e.g. `explicit.stat_3299347043`).
//!
//! The first segment is a qualifier naming the modifier group; the remainder
//! is the composite key the stat dataset is indexed by, with its own first
//! segment selecting the top-level dataset bucket.

/// Split a stat id into its dataset bucket and composite key.
///
/// Returns `None` for ids with fewer than two dot-separated segments —
/// callers treat that the same as a dataset miss.
///
/// # Examples
///
/// ```
/// use poe2_companion_core::split_stat_id;
///
/// let (bucket, key) = split_stat_id("explicit.stat_12345").unwrap();
/// assert_eq!(bucket, "stat_12345");
/// assert_eq!(key, "stat_12345");
///
/// let (bucket, key) = split_stat_id("explicit.local.stat_9").unwrap();
/// assert_eq!(bucket, "local");
/// assert_eq!(key, "local.stat_9");
///
/// assert!(split_stat_id("explicit").is_none());
/// ```
pub fn split_stat_id(stat_id: &str) -> Option<(&str, &str)> {
    let (_, key) = stat_id.split_once('.')?;
    if key.is_empty() {
        return None;
    }
    let bucket = key.split('.').next().unwrap_or(key);
    Some((bucket, key))
}

/// Drop the leading qualifier segment from a stat id.
///
/// The trade site's search filters are keyed by the id without its qualifier,
/// so `explicit.stat_12345` becomes `stat_12345`. Ids without a qualifier are
/// returned unchanged.
pub fn strip_qualifier(stat_id: &str) -> &str {
    match stat_id.split_once('.') {
        Some((_, rest)) if !rest.is_empty() => rest,
        _ => stat_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_two_segment_id() {
        let (bucket, key) = split_stat_id("implicit.stat_42").unwrap();
        assert_eq!(bucket, "stat_42");
        assert_eq!(key, "stat_42");
    }

    #[test]
    fn splits_three_segment_id() {
        let (bucket, key) = split_stat_id("rune.local.stat_7").unwrap();
        assert_eq!(bucket, "local");
        assert_eq!(key, "local.stat_7");
    }

    #[test]
    fn rejects_single_segment() {
        assert!(split_stat_id("explicit").is_none());
        assert!(split_stat_id("explicit.").is_none());
        assert!(split_stat_id("").is_none());
    }

    #[test]
    fn strips_qualifier() {
        assert_eq!(strip_qualifier("explicit.stat_12345"), "stat_12345");
        assert_eq!(strip_qualifier("rune.local.stat_7"), "local.stat_7");
        assert_eq!(strip_qualifier("bare"), "bare");
    }
}
