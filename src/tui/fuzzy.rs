//! Fuzzy filtering of choice labels

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Indices of `labels` matching `query`, best match first.
///
/// With `pin_first` the first label is always kept at the top regardless of
/// the query; it is how the `done` entry stays reachable while filtering.
pub fn filter(labels: &[String], query: &str, pin_first: bool) -> Vec<usize> {
    let skip = usize::from(pin_first && !labels.is_empty());
    let pinned = (0..skip).collect::<Vec<_>>();

    if query.trim().is_empty() {
        return (0..labels.len()).collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
    let mut buf = Vec::new();

    let mut scored: Vec<(usize, u32)> = labels
        .iter()
        .enumerate()
        .skip(skip)
        .filter_map(|(idx, label)| {
            pattern
                .score(Utf32Str::new(label, &mut buf), &mut matcher)
                .map(|score| (idx, score))
        })
        .collect();

    // Stable sort keeps catalog order among equal scores
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    pinned
        .into_iter()
        .chain(scored.into_iter().map(|(idx, _)| idx))
        .collect()
}
