//! Abundance filtering and ranking.
//!
//! Entries are two-word back-references into the store; the comparator reads
//! header bytes through the store rather than from cached copies, so ranking
//! never duplicates record content.

use crate::bio::store::SequenceStore;
use crate::{Result, SeqrankError};
use std::cmp::Ordering;
use tracing::debug;

/// Inclusive abundance bounds for the filter stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbundanceRange {
    pub min: u64,
    pub max: u64,
}

impl Default for AbundanceRange {
    fn default() -> Self {
        Self { min: 0, max: u64::MAX }
    }
}

impl AbundanceRange {
    pub fn new(min: u64, max: u64) -> Result<Self> {
        if min > max {
            return Err(SeqrankError::InvalidInput(format!(
                "minimum abundance {} exceeds maximum {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, abundance: u64) -> bool {
        abundance >= self.min && abundance <= self.max
    }
}

/// Back-reference into the store: abundance plus original record index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankEntry {
    pub abundance: u64,
    pub index: usize,
}

/// Filter stage: one entry per record whose abundance falls within the
/// range, in original index order. An empty result is not an error.
pub fn collect_in_range(store: &SequenceStore, range: AbundanceRange) -> Vec<RankEntry> {
    let mut entries = Vec::new();
    for index in 0..store.len() {
        let abundance = store.abundance(index);
        if range.contains(abundance) {
            entries.push(RankEntry { abundance, index });
        }
    }
    debug!(
        total = store.len(),
        passed = entries.len(),
        "abundance filter applied"
    );
    entries
}

/// Sort entries in place under the ranking order:
/// abundance descending, then header bytes ascending, then original index
/// ascending. The index tie-break makes this a strict total order, so the
/// result does not depend on sort stability.
pub fn rank(store: &SequenceStore, entries: &mut [RankEntry]) {
    entries.sort_unstable_by(|a, b| compare(store, a, b));
}

fn compare(store: &SequenceStore, a: &RankEntry, b: &RankEntry) -> Ordering {
    b.abundance
        .cmp(&a.abundance)
        .then_with(|| store.header_bytes(a.index).cmp(store.header_bytes(b.index)))
        .then_with(|| a.index.cmp(&b.index))
}

/// Median of the ranked abundances. Entries must already be in rank order;
/// the middle is read directly from the sorted positions.
pub fn median_abundance(entries: &[RankEntry]) -> f64 {
    let passed = entries.len();
    if passed == 0 {
        0.0
    } else if passed % 2 == 1 {
        entries[(passed - 1) / 2].abundance as f64
    } else {
        (entries[passed / 2 - 1].abundance as f64 + entries[passed / 2].abundance as f64) / 2.0
    }
}
