//! Set similarity measures used for ranking.

use std::collections::BTreeSet;

use crate::domain::foundation::Fraction;

/// Jaccard index `|a ∩ b| / |a ∪ b|`; zero when both sets are empty.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> Fraction {
    let shared = a.intersection(b).count();
    let union = a.len() + b.len() - shared;
    Fraction::ratio(shared, union)
}

/// Share of `wanted` found in `present`, zero when nothing is wanted.
pub fn coverage(wanted: &[&str], present: &BTreeSet<String>) -> Fraction {
    let hits = wanted.iter().filter(|w| present.contains(**w)).count();
    Fraction::ratio(hits, wanted.len())
}
