//! Duplicate color detection over a quantized palette.

use std::collections::BTreeMap;

use crate::models::Palette;

/// Groups of color-identical palette entries.
///
/// Each group maps its representative (the lowest index with that color) to
/// the indices it absorbs. Indices that are unique keep no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateMap {
    groups: BTreeMap<usize, Vec<usize>>,
}

impl DuplicateMap {
    /// Iterate groups in ascending representative order.
    pub fn groups(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.groups.iter().map(|(&rep, absorbed)| (rep, absorbed.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of absorbed (non-representative) indices.
    pub fn merged_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Find palette entries that are channel-wise identical.
///
/// First-occurrence-wins: each group's representative is its lowest index,
/// and an index already absorbed by an earlier group is never used as a new
/// representative, so transitive duplicates land in one group. O(n²) over
/// the palette, which is bounded at 256 entries.
pub fn detect_duplicates(palette: &Palette) -> DuplicateMap {
    let len = palette.len();
    let mut absorbed = vec![false; len];
    let mut groups = BTreeMap::new();

    for i in 0..len {
        if absorbed[i] {
            continue;
        }
        let mut members = Vec::new();
        for j in (i + 1)..len {
            if !absorbed[j] && palette.color(j) == palette.color(i) {
                absorbed[j] = true;
                members.push(j);
            }
        }
        if !members.is_empty() {
            groups.insert(i, members);
        }
    }

    DuplicateMap { groups }
}
