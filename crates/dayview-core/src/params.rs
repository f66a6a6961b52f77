#![forbid(unsafe_code)]

//! View configuration: day window, ruler ticks, and border metrics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Border thickness constants for event blocks.
///
/// These mirror the stylesheet's border widths and feed the placement
/// formula's fixed compensation terms. All values are in the same absolute
/// unit as event minutes (1:1 by default).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderMetrics {
    /// Width of the block's regular border.
    pub border_width: f64,
    /// Width of the block's accent border on the left edge.
    pub left_border_width: f64,
}

impl BorderMetrics {
    /// Default metrics: 1-unit border, 4-unit left accent border.
    pub const DEFAULT: Self = Self {
        border_width: 1.0,
        left_border_width: 4.0,
    };

    /// Create border metrics. Values must be non-negative; [`ViewParams::new`]
    /// rejects negative widths.
    #[must_use]
    pub const fn new(border_width: f64, left_border_width: f64) -> Self {
        Self {
            border_width,
            left_border_width,
        }
    }

    /// Horizontal compensation subtracted from a block's width so adjacent
    /// columns' borders do not double up.
    #[inline]
    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.border_width + self.left_border_width
    }

    /// Vertical compensation subtracted from a block's height (top and
    /// bottom borders).
    #[inline]
    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.border_width * 2.0
    }

    /// Inset added to a block's left edge, keeping the leftmost column clear
    /// of the panel's own border.
    #[inline]
    #[must_use]
    pub fn left_inset(&self) -> f64 {
        self.left_border_width
    }
}

impl Default for BorderMetrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Day-viewer configuration.
///
/// | Field                   | Default | Meaning                              |
/// |-------------------------|---------|--------------------------------------|
/// | `min_time_minutes`      | 0       | First visible minute                 |
/// | `max_time_minutes`      | 720     | Last visible minute (inclusive)      |
/// | `tick_interval_minutes` | 30      | Spacing between ruler ticks          |
/// | `starting_hour`         | 9       | Clock hour that minute 0 maps to     |
/// | `minutes_to_unit_ratio` | 1.0     | Vertical scale applied at formatting |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewParams {
    /// First minute of the visible day window.
    pub min_time_minutes: i32,
    /// Last minute of the visible day window (inclusive).
    pub max_time_minutes: i32,
    /// Spacing between time-ruler ticks, in minutes.
    pub tick_interval_minutes: i32,
    /// Clock hour (24-hour) that minute 0 corresponds to.
    pub starting_hour: i32,
    /// Scale from minutes to absolute render units.
    pub minutes_to_unit_ratio: f64,
    /// Border metrics for event blocks.
    pub border: BorderMetrics,
}

impl ViewParams {
    /// Default parameters: a 9:00 AM to 9:00 PM window with 30-minute ticks.
    pub const DEFAULT: Self = Self {
        min_time_minutes: 0,
        max_time_minutes: 720,
        tick_interval_minutes: 30,
        starting_hour: 9,
        minutes_to_unit_ratio: 1.0,
        border: BorderMetrics::DEFAULT,
    };

    /// Create parameters with an explicit day window and tick interval,
    /// keeping the default clock reference, scale, and borders.
    pub fn new(
        min_time_minutes: i32,
        max_time_minutes: i32,
        tick_interval_minutes: i32,
    ) -> Result<Self, ParamsError> {
        Self::DEFAULT
            .with_window(min_time_minutes, max_time_minutes)?
            .with_tick_interval(tick_interval_minutes)
    }

    /// Replace the day window.
    pub fn with_window(mut self, min: i32, max: i32) -> Result<Self, ParamsError> {
        if min < 0 {
            return Err(ParamsError::NegativeWindowStart { min });
        }
        if max < min {
            return Err(ParamsError::EmptyWindow { min, max });
        }
        self.min_time_minutes = min;
        self.max_time_minutes = max;
        Ok(self)
    }

    /// Replace the tick interval.
    pub fn with_tick_interval(mut self, interval: i32) -> Result<Self, ParamsError> {
        if interval <= 0 {
            return Err(ParamsError::NonPositiveTickInterval { interval });
        }
        self.tick_interval_minutes = interval;
        Ok(self)
    }

    /// Replace the border metrics, rejecting negative widths.
    pub fn with_border(mut self, border: BorderMetrics) -> Result<Self, ParamsError> {
        if border.border_width < 0.0 || border.left_border_width < 0.0 {
            return Err(ParamsError::NegativeBorderWidth {
                border_width: border.border_width,
                left_border_width: border.left_border_width,
            });
        }
        self.border = border;
        Ok(self)
    }
}

impl Default for ViewParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Errors from [`ViewParams`] construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamsError {
    /// The day window starts before minute zero.
    NegativeWindowStart {
        /// Offending window start.
        min: i32,
    },
    /// The day window ends before it starts.
    EmptyWindow {
        /// Window start minute.
        min: i32,
        /// Window end minute.
        max: i32,
    },
    /// The ruler tick interval is zero or negative.
    NonPositiveTickInterval {
        /// Offending interval.
        interval: i32,
    },
    /// A border width is negative.
    NegativeBorderWidth {
        /// Regular border width.
        border_width: f64,
        /// Left accent border width.
        left_border_width: f64,
    },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeWindowStart { min } => {
                write!(f, "day window start {min} is negative")
            }
            Self::EmptyWindow { min, max } => {
                write!(f, "day window end {max} precedes start {min}")
            }
            Self::NonPositiveTickInterval { interval } => {
                write!(f, "tick interval {interval} must be positive")
            }
            Self::NegativeBorderWidth {
                border_width,
                left_border_width,
            } => write!(
                f,
                "border widths must be non-negative (got {border_width} / {left_border_width})"
            ),
        }
    }
}

impl std::error::Error for ParamsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_day() {
        let params = ViewParams::DEFAULT;
        assert_eq!(params.min_time_minutes, 0);
        assert_eq!(params.max_time_minutes, 720);
        assert_eq!(params.tick_interval_minutes, 30);
        assert_eq!(params.starting_hour, 9);
        assert_eq!(params.minutes_to_unit_ratio, 1.0);
    }

    #[test]
    fn default_border_offsets() {
        let border = BorderMetrics::DEFAULT;
        assert_eq!(border.offset_x(), 5.0);
        assert_eq!(border.offset_y(), 2.0);
        assert_eq!(border.left_inset(), 4.0);
    }

    #[test]
    fn new_accepts_valid_window() {
        let params = ViewParams::new(0, 480, 60).expect("valid params");
        assert_eq!(params.max_time_minutes, 480);
        assert_eq!(params.tick_interval_minutes, 60);
    }

    #[test]
    fn new_rejects_reversed_window() {
        assert_eq!(
            ViewParams::new(100, 50, 30),
            Err(ParamsError::EmptyWindow { min: 100, max: 50 })
        );
    }

    #[test]
    fn new_rejects_negative_start() {
        assert_eq!(
            ViewParams::new(-30, 720, 30),
            Err(ParamsError::NegativeWindowStart { min: -30 })
        );
    }

    #[test]
    fn new_rejects_zero_interval() {
        assert_eq!(
            ViewParams::new(0, 720, 0),
            Err(ParamsError::NonPositiveTickInterval { interval: 0 })
        );
    }

    #[test]
    fn with_border_rejects_negative_widths() {
        let result = ViewParams::DEFAULT.with_border(BorderMetrics::new(-1.0, 4.0));
        assert!(matches!(
            result,
            Err(ParamsError::NegativeBorderWidth { .. })
        ));
    }
}
