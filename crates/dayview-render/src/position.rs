#![forbid(unsafe_code)]

//! `calc()`-style position strings for CSS-like render surfaces.

use dayview_core::ViewParams;
use dayview_layout::{PanelShare, Placement};
use serde::{Deserialize, Serialize};

/// Formatted positioning directives for one event block.
///
/// Horizontal values are `calc()` expressions combining the percentage and
/// unit terms; vertical values are plain `px` lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionStrings {
    /// CSS `left` value, e.g. `calc(75% + 4px)`.
    pub left: String,
    /// CSS `top` value, e.g. `60px`.
    pub top: String,
    /// CSS `width` value, e.g. `calc(25% - 5px)`.
    pub width: String,
    /// CSS `height` value, e.g. `59px`.
    pub height: String,
}

/// Format a placement as CSS-style position strings.
///
/// Vertical values are scaled by the view's minute-to-unit ratio. The
/// percentage and unit terms stay in one `calc()` expression; surfaces that
/// round the percentage term independently can overlap adjacent columns by
/// a pixel.
#[must_use]
pub fn position_strings(placement: &Placement, params: &ViewParams) -> PositionStrings {
    let ratio = params.minutes_to_unit_ratio;
    PositionStrings {
        left: calc(placement.left),
        top: px(placement.top * ratio),
        width: calc(placement.width),
        height: px(placement.height * ratio),
    }
}

fn calc(share: PanelShare) -> String {
    if share.unit_offset < 0.0 {
        format!("calc({}% - {}px)", share.percent, -share.unit_offset)
    } else {
        format!("calc({}% + {}px)", share.percent, share.unit_offset)
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}
