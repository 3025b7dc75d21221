//! The sorting pipeline: filter, rank, median, truncate, emit.

use crate::bio::store::SequenceStore;
use crate::core::rank::{self, AbundanceRange};
use crate::core::relabel::{self, RelabelPolicy};
use crate::Result;
use std::io::Write;
use tracing::debug;

/// Options for one sorting run.
#[derive(Debug, Clone, Default)]
pub struct SortOptions {
    pub range: AbundanceRange,
    /// Maximum number of records to emit; `None` = all.
    pub top: Option<u64>,
    pub policy: RelabelPolicy,
    pub sizeout: bool,
}

/// Outcome of a run; the caller decides how to report it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortSummary {
    /// Records in the store.
    pub total: usize,
    /// Records that passed the abundance filter.
    pub passed: usize,
    /// Records written to the sink.
    pub written: usize,
    /// Median abundance of the filtered set, before truncation.
    pub median: f64,
}

/// Run the full pipeline against an already-open sink.
///
/// The sink is taken ready-made so that a failure to create it surfaces
/// before any input processing starts. Stages run strictly in sequence:
/// the sort needs the complete filtered set and the median needs the
/// complete sorted set.
pub fn run_sort<W: Write + ?Sized>(
    store: &SequenceStore,
    options: &SortOptions,
    writer: &mut W,
) -> Result<SortSummary> {
    let mut entries = rank::collect_in_range(store, options.range);
    let passed = entries.len();

    rank::rank(store, &mut entries);

    // Median is taken over the full filtered set, not the truncated one.
    let median = rank::median_abundance(&entries);

    if let Some(top) = options.top {
        entries.truncate(usize::try_from(top).unwrap_or(usize::MAX));
    }

    let written = relabel::emit(store, &entries, &options.policy, options.sizeout, writer)?;

    debug!(
        total = store.len(),
        passed, written, median, "sort pipeline finished"
    );

    Ok(SortSummary {
        total: store.len(),
        passed,
        written,
        median,
    })
}
