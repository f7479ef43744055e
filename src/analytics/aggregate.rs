use std::collections::BTreeMap;

use super::error::{AnalyticsError, AnalyticsResult};

/// Counts occurrences of the key extracted from each item
///
/// One algorithm serves every grouping the engine needs (by member, by
/// role, by franchise, by line-up); only the key-extraction closure
/// varies. The result is keyed in a `BTreeMap` so iteration order is
/// stable, which the mode selector's tie-break relies on.
///
/// Fails with `EmptyAggregate` when the item sequence produced no
/// entries at all.
pub fn group_and_count<I, K, F>(items: I, mut key_of: F) -> AnalyticsResult<BTreeMap<K, u64>>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    let mut counts = BTreeMap::new();

    for item in items {
        *counts.entry(key_of(&item)).or_insert(0) += 1;
    }

    if counts.is_empty() {
        return Err(AnalyticsError::EmptyAggregate);
    }

    Ok(counts)
}

/// Picks the key with the maximal count
///
/// Tie-break: the first key in ascending key order among the tied maxima
/// wins (strictly-greater comparison over the map's sorted iteration).
///
/// Fails with `EmptyAggregate` when given an empty mapping.
pub fn mode<K: Ord>(counts: &BTreeMap<K, u64>) -> AnalyticsResult<&K> {
    counts
        .iter()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
        .map(|(key, _)| key)
        .ok_or(AnalyticsError::EmptyAggregate)
}
