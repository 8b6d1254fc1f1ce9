//! Sequentiality check for chain part indices

use crate::types::PartIndex;
use serde::Serialize;
use std::fmt;

/// Check that part indices form one contiguous run (`min..=max`, step 1).
///
/// Indices are sorted descending and paired with their position; the run is
/// contiguous iff `position + index` is the same for every pair. An empty
/// set is never sequential, a single index always is.
pub fn is_sequential<I>(parts: I) -> bool
where
    I: IntoIterator<Item = PartIndex>,
{
    let mut indices: Vec<i64> = parts.into_iter().map(|p| i64::from(p.get())).collect();
    indices.sort_unstable();
    indices.reverse();

    let mut groups = 0_usize;
    let mut current = None;
    for (position, index) in (0_i64..).zip(indices) {
        let key = position + index;
        if current != Some(key) {
            groups += 1;
            current = Some(key);
        }
    }

    groups == 1
}

/// An inclusive run of part indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartRange {
    /// First index of the run
    pub start: PartIndex,
    /// Last index of the run
    pub end: PartIndex,
}

impl fmt::Display for PartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Runs of indices absent between the lowest and highest part.
///
/// One range per gap, so the result is bounded by the number of parts
/// present no matter how far apart their indices are.
pub fn missing_parts<I>(parts: I) -> Vec<PartRange>
where
    I: IntoIterator<Item = PartIndex>,
{
    let mut present: Vec<PartIndex> = parts.into_iter().collect();
    present.sort_unstable();
    present.dedup();

    present
        .windows(2)
        .filter_map(|pair| {
            let (low, high) = (pair[0].get(), pair[1].get());
            if high - low < 2 {
                return None;
            }
            Some(PartRange {
                start: PartIndex::new(low + 1)?,
                end: PartIndex::new(high - 1)?,
            })
        })
        .collect()
}
