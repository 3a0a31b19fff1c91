//! Builds the search-query envelope from a stored item's modifiers.
//!
//! One clause per normalized modifier with a known stat id, AND-combined.
//! Only the first extracted value feeds the clause minimum; additional
//! magnitudes (two-part damage rolls) are dropped. That is a known
//! simplification inherited from the product behavior, kept deliberately.

use serde::{Deserialize, Serialize};

use poe2_companion_core::{NormalizedModifier, strip_qualifier};

/// One stat filter clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatFilter {
    /// Stat id without its leading qualifier segment.
    pub id: String,
    pub value: FilterValue,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterValue {
    pub min: f64,
}

/// An AND-combined group of stat filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatGroup {
    #[serde(rename = "type")]
    pub group_type: String,
    pub filters: Vec<StatFilter>,
    pub disabled: bool,
}

/// The full POST body the search endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query: Query,
    pub sort: Sort,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub status: StatusOption,
    pub stats: Vec<StatGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusOption {
    pub option: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sort {
    pub price: String,
}

/// Project modifiers into filter clauses.
///
/// Modifiers without a stat id carry nothing the query API can key on and
/// are skipped. A modifier without extracted values contributes a zero
/// minimum, keeping the stat required without constraining its roll.
pub fn build_filters(modifiers: &[NormalizedModifier]) -> Vec<StatFilter> {
    modifiers
        .iter()
        .filter_map(|modifier| {
            let stat_id = modifier.stat_id.as_deref()?;
            Some(StatFilter {
                id: strip_qualifier(stat_id).to_string(),
                value: FilterValue {
                    min: modifier.first_value_or_zero(),
                },
                disabled: false,
            })
        })
        .collect()
}

/// Wrap filter clauses in the search envelope: any listing status, one
/// AND group, cheapest first.
pub fn build_search_query(modifiers: &[NormalizedModifier]) -> SearchQuery {
    SearchQuery {
        query: Query {
            status: StatusOption {
                option: "any".to_string(),
            },
            stats: vec![StatGroup {
                group_type: "and".to_string(),
                filters: build_filters(modifiers),
                disabled: false,
            }],
        },
        sort: Sort {
            price: "asc".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modifier(stat_id: Option<&str>, values: Option<Vec<f64>>) -> NormalizedModifier {
        NormalizedModifier {
            is_prefix: None,
            tier: None,
            ranges: Vec::new(),
            stat_id: stat_id.map(str::to_string),
            template: None,
            raw_text: String::new(),
            values,
            children: None,
        }
    }

    #[test]
    fn one_clause_per_identified_modifier() {
        let filters = build_filters(&[
            modifier(Some("explicit.stat_100"), Some(vec![15.0])),
            modifier(None, Some(vec![3.0])),
            modifier(Some("implicit.stat_200"), None),
        ]);

        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].id, "stat_100");
        assert_eq!(filters[0].value.min, 15.0);
        assert_eq!(filters[1].id, "stat_200");
        assert_eq!(filters[1].value.min, 0.0);
        assert!(filters.iter().all(|f| !f.disabled));
    }

    #[test]
    fn only_first_value_feeds_the_clause() {
        let filters = build_filters(&[modifier(Some("explicit.stat_300"), Some(vec![4.0, 8.0]))]);
        assert_eq!(filters[0].value.min, 4.0);
    }

    #[test]
    fn envelope_shape() {
        let query = build_search_query(&[modifier(Some("explicit.stat_100"), Some(vec![15.0]))]);
        let json = serde_json::to_value(&query).unwrap();

        assert_eq!(json["query"]["status"]["option"], "any");
        assert_eq!(json["query"]["stats"][0]["type"], "and");
        assert_eq!(json["query"]["stats"][0]["disabled"], false);
        assert_eq!(json["query"]["stats"][0]["filters"][0]["id"], "stat_100");
        assert_eq!(
            json["query"]["stats"][0]["filters"][0]["value"]["min"],
            15.0
        );
        assert_eq!(json["sort"]["price"], "asc");
    }
}
