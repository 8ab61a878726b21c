use indexmap::IndexMap;
use std::hash::Hash;

/// Computes the arithmetic mean of a slice of values. Returns `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Integer percentage of `part` in `total`, truncated. Zero when `total` is zero.
pub fn pct(part: usize, total: usize) -> usize {
    if total == 0 { 0 } else { part * 100 / total }
}

/// Counts occurrences, keeping values in first-seen order.
fn tally<T, I>(values: I) -> IndexMap<T, usize>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts = IndexMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Occurrence counts sorted by descending frequency; ties keep first-seen order.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: Vec<_> = tally(values).into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Every value reaching the highest frequency, in first-seen order.
/// Empty input yields an empty vector.
pub fn mode<T, I>(values: I) -> Vec<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let counts = tally(values);
    let Some(max) = counts.values().copied().max() else {
        return Vec::new();
    };
    counts
        .into_iter()
        .filter(|(_, count)| *count == max)
        .map(|(value, _)| value)
        .collect()
}
