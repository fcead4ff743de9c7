//! Descriptive statistics over a filtered trip log.
//!
//! Each aggregator is stateless: it takes a [`Dataset`](crate::data::model::Dataset)
//! and returns a plain result struct. Rendering lives in [`crate::report`].
//! All aggregators tolerate an empty dataset — a distribution with no
//! observations simply has no mode.

use std::collections::BTreeMap;

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

/// Index of the highest count, `None` when every bucket is zero.
///
/// Ties go to the first index reaching the maximum: a single
/// left-to-right scan with a strict `>` comparison.
pub(crate) fn mode_index(counts: &[u64]) -> Option<(usize, u64)> {
    let mut best: Option<(usize, u64)> = None;
    for (index, &count) in counts.iter().enumerate() {
        match best {
            Some((_, best_count)) if count > best_count => best = Some((index, count)),
            None if count > 0 => best = Some((index, count)),
            _ => {}
        }
    }
    best
}

/// First key (in map order) holding the highest count.
///
/// With a `BTreeMap` this resolves ties to the smallest key, the same
/// stable ranking a sorted frequency table produces.
pub(crate) fn most_common<K: Copy>(counts: &BTreeMap<K, u64>) -> Option<(K, u64)> {
    let mut best: Option<(K, u64)> = None;
    for (&key, &count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((key, count));
        }
    }
    best
}
