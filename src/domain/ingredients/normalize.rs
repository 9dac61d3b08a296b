//! Ingredient name normalization shared by analysis and scoring.

use std::collections::BTreeSet;

/// Trims, lowercases and collapses inner whitespace. Blank names yield `None`.
pub fn normalize_ingredient(name: &str) -> Option<String> {
    let normalized = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Normalized, deduplicated set of ingredient names.
pub fn normalized_set<I, S>(names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|n| normalize_ingredient(n.as_ref()))
        .collect()
}
