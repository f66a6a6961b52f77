#![forbid(unsafe_code)]

//! Time-ruler ticks along the left side of the day viewer.

use std::fmt;

use dayview_core::ViewParams;
use serde::{Deserialize, Serialize};

/// AM/PM half of the 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Meridiem {
    /// Before noon.
    Am,
    /// Noon and after.
    Pm,
}

impl Meridiem {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One tick on the time ruler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeTick {
    /// Minute offset from the start of the day window.
    pub minutes: i32,
    /// 12-hour clock label, `"[h]h:mm"`.
    pub label: String,
    /// AM/PM half for this tick.
    pub meridiem: Meridiem,
}

/// Translate a minute offset into a 12-hour `"[h]h:mm"` clock label.
///
/// `starting_hour` is the 24-hour clock hour that minute 0 corresponds to
/// (9 in the reference configuration, so minute 30 reads `"9:30"` and
/// minute 360 reads `"3:00"`). Hour values of 12 and 24 map to 12 rather
/// than 0.
#[must_use]
pub fn clock_label(minutes: i32, starting_hour: i32) -> String {
    let hour = minutes / 60 + starting_hour;
    let hour = (hour + 11) % 12 + 1;
    let minute = minutes % 60;
    format!("{hour}:{minute:02}")
}

/// Determine the AM/PM half for a minute offset.
#[must_use]
pub fn meridiem_of(minutes: i32, starting_hour: i32) -> Meridiem {
    if minutes / 60 + starting_hour >= 12 {
        Meridiem::Pm
    } else {
        Meridiem::Am
    }
}

/// Build the ruler ticks for the configured day window.
///
/// Ticks run from the window's first minute through its last, inclusive,
/// spaced by the configured interval. The reference configuration (0..=720
/// every 30 minutes) yields 25 ticks, 9:00 AM through 9:00 PM.
#[must_use]
pub fn ruler_ticks(params: &ViewParams) -> Vec<TimeTick> {
    // A non-positive interval would never terminate.
    let interval = params.tick_interval_minutes.max(1);

    let mut ticks = Vec::new();
    let mut minutes = params.min_time_minutes;
    while minutes <= params.max_time_minutes {
        ticks.push(TimeTick {
            minutes,
            label: clock_label(minutes, params.starting_hour),
            meridiem: meridiem_of(minutes, params.starting_hour),
        });
        minutes += interval;
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_am_times() {
        assert_eq!(clock_label(30, 9), "9:30");
    }

    #[test]
    fn translates_pm_times() {
        assert_eq!(clock_label(360, 9), "3:00");
    }

    #[test]
    fn zero_pads_minutes_below_ten() {
        assert_eq!(clock_label(1, 9), "9:01");
    }

    #[test]
    fn noon_reads_twelve_not_zero() {
        assert_eq!(clock_label(180, 9), "12:00");
    }

    #[test]
    fn identifies_am() {
        assert_eq!(meridiem_of(60, 9), Meridiem::Am);
    }

    #[test]
    fn identifies_pm() {
        assert_eq!(meridiem_of(360, 9), Meridiem::Pm);
    }

    #[test]
    fn noon_is_pm() {
        assert_eq!(meridiem_of(180, 9), Meridiem::Pm);
    }

    #[test]
    fn default_window_has_25_ticks() {
        let ticks = ruler_ticks(&ViewParams::DEFAULT);
        assert_eq!(ticks.len(), 25);
        assert_eq!(ticks[0].label, "9:00");
        assert_eq!(ticks[0].meridiem, Meridiem::Am);
        assert_eq!(ticks[24].minutes, 720);
        assert_eq!(ticks[24].label, "9:00");
        assert_eq!(ticks[24].meridiem, Meridiem::Pm);
    }

    #[test]
    fn tick_spacing_follows_interval() {
        let params = ViewParams::new(0, 120, 60).expect("valid params");
        let minutes: Vec<i32> = ruler_ticks(&params).iter().map(|t| t.minutes).collect();
        assert_eq!(minutes, vec![0, 60, 120]);
    }

    #[test]
    fn meridiem_label_round_trip() {
        assert_eq!(Meridiem::Am.to_string(), "AM");
        assert_eq!(Meridiem::Pm.label(), "PM");
    }
}
