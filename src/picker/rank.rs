//! Filter and rank a catalog for a query

use super::score::{Score, normalize_query, score};
use crate::catalog::Entry;

/// Order of the ranked list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Best match first (picking an existing target)
    Descending,
    /// Best match last, next to the input line (creating a session)
    Ascending,
}

/// An entry together with its score for the current query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry<'a> {
    /// The scored entry
    pub entry: &'a Entry,
    /// Its score
    pub score: Score,
}

/// Score and order entries that match `query`
///
/// Non-matching entries are dropped. The sort is stable, so equal scores keep
/// catalog order.
#[must_use]
pub fn rank_scored<'a>(
    entries: &'a [Entry],
    query: &str,
    direction: SortDirection,
) -> Vec<RankedEntry<'a>> {
    let query = normalize_query(query);
    let mut ranked: Vec<RankedEntry<'a>> = entries
        .iter()
        .filter_map(|entry| score(entry, &query).map(|score| RankedEntry { entry, score }))
        .collect();

    match direction {
        SortDirection::Descending => ranked.sort_by(|a, b| b.score.cmp(&a.score)),
        SortDirection::Ascending => ranked.sort_by_key(|r| r.score),
    }
    ranked
}

/// The ranked list shown for `query`
///
/// An empty query returns every entry in catalog order.
#[must_use]
pub fn rank(entries: &[Entry], query: &str, direction: SortDirection) -> Vec<Entry> {
    if query.is_empty() {
        return entries.to_vec();
    }
    rank_scored(entries, query, direction)
        .into_iter()
        .map(|ranked| ranked.entry.clone())
        .collect()
}
