#![forbid(unsafe_code)]

//! Day-viewer public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the event model, the layout solvers, and the render directive
//! builders from the internal crates, and offers a lightweight prelude.
//!
//! ```
//! use dayview::prelude::*;
//!
//! let events = vec![Event::new(540, 600)?, Event::new(560, 620)?];
//! let params = ViewParams::DEFAULT;
//!
//! for block in layout_panel(&params, &events)? {
//!     let strings = position_strings(&block.placement, &params);
//!     assert!(strings.width.starts_with("calc(50%"));
//! }
//! # Ok::<(), dayview::Error>(())
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use dayview_core::{BorderMetrics, Event, EventError, ParamsError, ViewParams};

// --- Layout re-exports -----------------------------------------------------

pub use dayview_layout::{
    ColumnAssignment, PanelShare, Placement, PlacementError, assign_columns, compute_placement,
    events_conflict,
};

// --- Render re-exports -----------------------------------------------------

pub use dayview_render::{
    EventBlock, Meridiem, PositionStrings, TimeTick, clock_label, layout_panel, meridiem_of,
    position_strings, ruler_ticks,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for day-viewer apps.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid event interval.
    Event(EventError),
    /// Invalid view configuration.
    Params(ParamsError),
    /// Placement contract violation.
    Placement(PlacementError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event(err) => write!(f, "{err}"),
            Self::Params(err) => write!(f, "{err}"),
            Self::Placement(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<EventError> for Error {
    fn from(err: EventError) -> Self {
        Self::Event(err)
    }
}

impl From<ParamsError> for Error {
    fn from(err: ParamsError) -> Self {
        Self::Params(err)
    }
}

impl From<PlacementError> for Error {
    fn from(err: PlacementError) -> Self {
        Self::Placement(err)
    }
}

/// Standard result type for day-viewer APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    //! Common imports for day-viewer apps.

    pub use crate::{
        BorderMetrics, Error, Event, EventBlock, Placement, Result, TimeTick, ViewParams,
        layout_panel, position_strings, ruler_ticks,
    };
}
