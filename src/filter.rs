//! The stream driver: fetch, evaluate, conditionally emit, release.
//!
//! One graph is in flight at a time. The driver owns each graph for exactly
//! one iteration: it is decoded from the input handle, both predicates are
//! evaluated, the graph is re-emitted unmodified iff both hold, and it is
//! dropped before the next fetch. Output order matches input order.

use crate::g6::{Graph6Reader, Graph6Writer, StreamError};
use crate::predicates::{is_maximal_triangle_free, is_twin_free};
use std::io::{BufRead, Write};

/// Counters for one filter run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Graphs decoded from the input stream.
    pub read: u64,
    /// Graphs that passed both predicates and were written.
    pub accepted: u64,
}

/// Filters a graph6 stream, forwarding exactly the graphs that are both
/// twin-free and maximal triangle-free.
///
/// Runs to end of input. The first transport or decode error aborts the run;
/// there is no per-graph recovery.
///
/// # Errors
/// Returns the stream error that ended the run early.
pub fn filter_graphs<R: BufRead, W: Write>(
    input: R,
    output: W,
) -> Result<FilterStats, StreamError> {
    let mut reader = Graph6Reader::new(input);
    let mut writer = Graph6Writer::new(output);
    let mut stats = FilterStats::default();

    for item in &mut reader {
        let g = item?;
        stats.read += 1;
        if is_twin_free(&g) && is_maximal_triangle_free(&g) {
            writer.write_graph(&g)?;
            stats.accepted += 1;
        }
    }
    writer.flush()?;
    Ok(stats)
}

// ============================================================================
// Tests
// ============================================================================
