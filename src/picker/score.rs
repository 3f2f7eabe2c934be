//! Relevance scoring for a single entry
//!
//! Additive integer scoring: exact title beats prefix beats substring, with a
//! path-depth term that prefers shallow `org/project` style directories.

use crate::catalog::Entry;

/// Relevance score. Larger is better; may be negative for deep paths.
pub type Score = i64;

const EXACT_TITLE: Score = 1000;
const TITLE_PREFIX: Score = 500;
const TITLE_SUBSTRING: Score = 100;
const DEPTH_BASE: Score = 10;
const DEPTH_WEIGHT: Score = 10;
const PREFERRED_DEPTH: usize = 2;
const PREFERRED_DEPTH_BONUS: Score = 200;
const DESCRIPTION_MATCH: Score = 50;

/// Normalize a raw query for scoring
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase()
}

/// Score `entry` against an already-normalized query
///
/// Returns `None` when the query occurs in neither title nor description;
/// such entries are excluded from results. Any other entry is kept, even if
/// the depth term drives its total below zero.
#[must_use]
pub fn score(entry: &Entry, query: &str) -> Option<Score> {
    let title = entry.title.to_lowercase();
    let description = entry.description.to_lowercase();

    let in_title = title.contains(query);
    let in_description = description.contains(query);
    if !in_title && !in_description {
        return None;
    }

    let mut score = 0;

    if title == query {
        score += EXACT_TITLE;
    }
    if title.starts_with(query) {
        score += TITLE_PREFIX;
    }
    if in_title {
        score += TITLE_SUBSTRING;
    }

    let depth = entry.description.matches('/').count();
    #[allow(clippy::cast_possible_wrap)]
    let depth_score = (DEPTH_BASE - depth as Score) * DEPTH_WEIGHT;
    score += depth_score;

    if depth == PREFERRED_DEPTH {
        score += PREFERRED_DEPTH_BONUS;
    }
    if in_description {
        score += DESCRIPTION_MATCH;
    }

    Some(score)
}
