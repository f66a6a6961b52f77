#![forbid(unsafe_code)]

//! Cluster partitioning and greedy column packing.
//!
//! The partitioner walks the events once in sorted order, growing an "open
//! cluster" of columns:
//!
//! 1. Sort events by start time, ties by end time.
//! 2. When an event starts after the latest end minute seen so far, no later
//!    event can overlap the open cluster either (starts only increase), so
//!    the cluster is closed and every event it holds receives its final
//!    `(column_count, column_index)` pair.
//! 3. Each event goes into the first existing column whose last member it
//!    does not conflict with, scanning columns in creation order. If every
//!    column conflicts, a new column is appended.
//! 4. After the pass, the still-open cluster is closed; skipping this step
//!    would silently drop the trailing events.
//!
//! The column scan is first fit, not best fit: it is a greedy coloring and
//! can use more columns than the overlap graph strictly needs. Downstream
//! visual expectations encode the greedy result, so the policy is part of
//! the contract.

use dayview_core::Event;
use serde::{Deserialize, Serialize};

use crate::events_conflict;

/// Column assignment for one event.
///
/// `column_count` is the number of columns in the event's cluster;
/// `column_index` is the 0-based index (in creation order) of the column the
/// event landed in. Together they determine the event's horizontal share of
/// the panel, see [`compute_placement`](crate::compute_placement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAssignment {
    /// The assigned event.
    pub event: Event,
    /// Number of columns in the event's cluster. Always at least 1.
    pub column_count: usize,
    /// 0-based column index within the cluster.
    pub column_index: usize,
}

/// Partition events into clusters and pack each cluster into columns.
///
/// Returns one assignment per input event, ordered by `(start, end)`
/// ascending (not the caller's order). Members of the same column never
/// conflict; events in different columns of the same cluster may.
///
/// An empty input yields an empty vec.
#[must_use]
pub fn assign_columns(events: &[Event]) -> Vec<ColumnAssignment> {
    let mut sorted = events.to_vec();
    sorted.sort_unstable();

    // One slot per sorted event, written when that event's cluster closes.
    let mut slots: Vec<(usize, usize)> = vec![(0, 0); sorted.len()];
    // Open cluster state: columns hold indices into `sorted`; `latest_end`
    // is None while no cluster is open.
    let mut columns: Vec<Vec<usize>> = Vec::new();
    let mut latest_end: Option<i32> = None;

    for (idx, event) in sorted.iter().enumerate() {
        if latest_end.is_some_and(|latest| event.start() > latest) {
            close_cluster(&mut columns, &mut slots);
            latest_end = None;
        }

        let fit = columns.iter().position(|column| {
            column
                .last()
                .is_none_or(|&last| !events_conflict(*event, sorted[last]))
        });
        match fit {
            Some(found) => columns[found].push(idx),
            None => columns.push(vec![idx]),
        }

        latest_end = Some(match latest_end {
            Some(latest) => latest.max(event.end()),
            None => event.end(),
        });
    }

    // Fencepost: the last cluster has no following gap to close it.
    close_cluster(&mut columns, &mut slots);

    sorted
        .into_iter()
        .zip(slots)
        .map(|(event, (column_count, column_index))| ColumnAssignment {
            event,
            column_count,
            column_index,
        })
        .collect()
}

/// Emit final `(column_count, column_index)` pairs for every event held in
/// the open columns, then reset the cluster.
fn close_cluster(columns: &mut Vec<Vec<usize>>, slots: &mut [(usize, usize)]) {
    let column_count = columns.len();

    #[cfg(feature = "tracing")]
    tracing::trace!(columns = column_count, "closing event cluster");

    for (column_index, column) in columns.iter().enumerate() {
        for &slot in column {
            slots[slot] = (column_count, column_index);
        }
    }
    columns.clear();
}
