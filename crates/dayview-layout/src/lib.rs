#![forbid(unsafe_code)]

//! Event layout solvers for the single-day calendar view.
//!
//! This crate turns a set of time intervals into non-colliding visual
//! placements:
//!
//! - [`assign_columns`] - partitions events into clusters of temporally
//!   connected events and packs each cluster into side-by-side columns
//! - [`compute_placement`] - converts a column assignment into a bounding
//!   box (percentage share of the panel width, absolute vertical extent)
//! - [`events_conflict`] - the inclusive-boundary overlap rule both of the
//!   above are built on
//!
//! The solvers are pure: no shared state, no I/O, and output that is a
//! deterministic function of input content. Rendering (string formatting,
//! element creation) lives in `dayview-render`.
//!
//! ```
//! use dayview_core::{BorderMetrics, Event};
//! use dayview_layout::{assign_columns, compute_placement};
//!
//! let events = vec![Event::new(540, 600)?, Event::new(560, 620)?];
//! let border = BorderMetrics::DEFAULT;
//!
//! for assignment in assign_columns(&events) {
//!     let placement = compute_placement(
//!         assignment.column_count,
//!         assignment.column_index,
//!         assignment.event,
//!         &border,
//!     )?;
//!     assert_eq!(placement.width.percent, 50.0);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod partition;
pub mod placement;

use dayview_core::Event;
pub use partition::{ColumnAssignment, assign_columns};
pub use placement::{PanelShare, Placement, PlacementError, compute_placement};

/// Check whether the time frames of two events overlap.
///
/// Boundaries are inclusive: an event that starts on the exact minute
/// another ends still conflicts with it. Callers relying on rendering
/// parity must preserve this rule.
///
/// ```
/// use dayview_core::Event;
/// use dayview_layout::events_conflict;
///
/// let a = Event::new(0, 10)?;
/// let b = Event::new(10, 20)?;
/// let c = Event::new(11, 20)?;
/// assert!(events_conflict(a, b));
/// assert!(!events_conflict(a, c));
/// # Ok::<(), dayview_core::EventError>(())
/// ```
#[inline]
#[must_use]
pub fn events_conflict(a: Event, b: Event) -> bool {
    a.start() <= b.end() && b.start() <= a.end()
}
