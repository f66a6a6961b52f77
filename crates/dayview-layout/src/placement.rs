#![forbid(unsafe_code)]

//! Bounding-box computation for column-assigned events.

use std::fmt;

use dayview_core::{BorderMetrics, Event};
use serde::{Deserialize, Serialize};

/// A horizontal measure on the events panel: a percentage share of the panel
/// width plus a fixed offset in absolute units.
///
/// Resolves to `percent% + unit_offset` (the offset is negative for widths).
/// The two terms stay separate so the render surface can format them as a
/// `calc()`-style expression; see `dayview-render`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelShare {
    /// Percentage of the panel width (0.0 to 100.0).
    pub percent: f64,
    /// Fixed offset in absolute units, added to the percentage term.
    pub unit_offset: f64,
}

impl PanelShare {
    /// Create a panel share from its percentage and unit terms.
    #[inline]
    #[must_use]
    pub const fn new(percent: f64, unit_offset: f64) -> Self {
        Self {
            percent,
            unit_offset,
        }
    }
}

/// Computed bounding box for one event block.
///
/// Horizontal values are [`PanelShare`]s; vertical values are absolute units
/// on the same scale as event minutes.
///
/// The percentage and unit terms of a [`PanelShare`] are resolved
/// independently by the render surface. Two surfaces rounding the percentage
/// term differently can produce a one-unit visual overlap at column
/// boundaries; keeping the split formula is part of the rendering-parity
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Offset from the panel's left edge.
    pub left: PanelShare,
    /// Block width.
    pub width: PanelShare,
    /// Offset from the panel's top edge, in absolute units.
    pub top: f64,
    /// Block height in absolute units.
    pub height: f64,
}

/// Compute the bounding box for an event given its column assignment.
///
/// - `width` is an even share of the panel (`100 / column_count` percent)
///   minus the horizontal border compensation, so adjacent columns' borders
///   do not double up.
/// - `left` is the column's percentage offset plus the left-edge inset.
/// - `top` is the event's start minute; `height` is the inclusive duration
///   minus the vertical border compensation, floored at zero.
///
/// # Errors
///
/// A `column_count` of zero or a `column_index` outside
/// `0..column_count` is a contract violation; both are rejected rather than
/// silently divided through.
pub fn compute_placement(
    column_count: usize,
    column_index: usize,
    event: Event,
    border: &BorderMetrics,
) -> Result<Placement, PlacementError> {
    if column_count == 0 {
        return Err(PlacementError::ZeroColumnCount);
    }
    if column_index >= column_count {
        return Err(PlacementError::ColumnIndexOutOfRange {
            column_index,
            column_count,
        });
    }

    let width_percent = 100.0 / column_count as f64;
    let left_percent = width_percent * column_index as f64;
    let duration = f64::from(event.duration());

    Ok(Placement {
        left: PanelShare::new(left_percent, border.left_inset()),
        width: PanelShare::new(width_percent, -border.offset_x()),
        top: f64::from(event.start()),
        height: (duration - border.offset_y()).max(0.0),
    })
}

/// Errors from [`compute_placement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The caller supplied a cluster with zero columns.
    ZeroColumnCount,
    /// The column index does not fall inside the cluster's columns.
    ColumnIndexOutOfRange {
        /// Offending column index.
        column_index: usize,
        /// Number of columns in the cluster.
        column_count: usize,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColumnCount => write!(f, "column count must be at least 1"),
            Self::ColumnIndexOutOfRange {
                column_index,
                column_count,
            } => write!(
                f,
                "column index {column_index} outside cluster of {column_count} columns"
            ),
        }
    }
}

impl std::error::Error for PlacementError {}
