#![forbid(unsafe_code)]

//! Render directives for the day viewer.
//!
//! Thin consumers of the `dayview-layout` output:
//!
//! - [`ruler`] - time-ruler ticks and clock labels for the left column
//! - [`panel`] - positioned event blocks for the events panel
//! - [`position`] - `calc()`-style position strings for a CSS-like surface
//!
//! Nothing here owns a render target; every function maps values to values
//! so any UI technology can consume the result.

pub mod panel;
pub mod position;
pub mod ruler;

pub use panel::{EventBlock, layout_panel};
pub use position::{PositionStrings, position_strings};
pub use ruler::{Meridiem, TimeTick, clock_label, meridiem_of, ruler_ticks};
