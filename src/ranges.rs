//! Range compression of sparse integer id sets.
//!
//! Encodes a set of ids as a minimal ordered union of singletons and
//! inclusive contiguous spans, rendered as a `match`-guard alternation
//! (`1..=3|5|7..=9`). One linear scan after sorting; spans are greedily
//! maximal.

use std::fmt;

/// One element of a compressed id set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdRange {
    /// A single id.
    Single(u32),
    /// An inclusive contiguous span.
    Span(u32, u32),
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdRange::Single(id) => write!(f, "{}", id),
            IdRange::Span(start, end) => write!(f, "{}..={}", start, end),
        }
    }
}

/// Compress an unordered id set into minimal ordered ranges.
///
/// Duplicates are tolerated (dropped); the empty input yields no ranges.
pub fn compress(ids: &[u32]) -> Vec<IdRange> {
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut out = Vec::new();
    let mut iter = sorted.into_iter();
    let first = match iter.next() {
        Some(id) => id,
        None => return out,
    };

    let mut start = first;
    let mut last = first;
    for id in iter {
        if id == last + 1 {
            last = id;
        } else {
            out.push(close_range(start, last));
            start = id;
            last = id;
        }
    }
    out.push(close_range(start, last));
    out
}

fn close_range(start: u32, last: u32) -> IdRange {
    if start == last {
        IdRange::Single(start)
    } else {
        IdRange::Span(start, last)
    }
}

/// Join compressed ranges into a pattern alternation usable as a multi-value
/// dispatch guard.
pub fn render_alternation(ranges: &[IdRange]) -> String {
    ranges
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("|")
}
