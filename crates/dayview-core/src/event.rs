#![forbid(unsafe_code)]

//! The calendar event interval type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A time-bounded calendar event.
///
/// Start and end are integer minutes relative to a day-start reference. The
/// reference point (e.g. minute 0 = 9:00 AM) is a rendering concern; the
/// layout code treats minutes as opaque integers.
///
/// `end >= start` is enforced at construction. A one-minute event has
/// `start == end`, so the inclusive duration is `end - start + 1`.
///
/// Ordering is ascending by start, ties broken by ascending end. This is the
/// processing order the column partitioner relies on.
///
/// # Examples
///
/// ```
/// use dayview_core::Event;
///
/// let event = Event::new(540, 600)?;
/// assert_eq!(event.start(), 540);
/// assert_eq!(event.duration(), 61);
///
/// assert!(Event::new(600, 540).is_err());
/// # Ok::<(), dayview_core::EventError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEvent", into = "RawEvent")]
pub struct Event {
    start: i32,
    end: i32,
}

impl Event {
    /// Create an event, rejecting `end < start`.
    pub fn new(start: i32, end: i32) -> Result<Self, EventError> {
        if end < start {
            return Err(EventError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Start minute (inclusive).
    #[inline]
    #[must_use]
    pub const fn start(self) -> i32 {
        self.start
    }

    /// End minute (inclusive).
    #[inline]
    #[must_use]
    pub const fn end(self) -> i32 {
        self.end
    }

    /// Inclusive duration in minutes (`end - start + 1`).
    #[inline]
    #[must_use]
    pub const fn duration(self) -> i32 {
        self.end - self.start + 1
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Wire mirror of [`Event`] so deserialization re-validates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawEvent {
    start: i32,
    end: i32,
}

impl TryFrom<RawEvent> for Event {
    type Error = EventError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        Event::new(raw.start, raw.end)
    }
}

impl From<Event> for RawEvent {
    fn from(event: Event) -> Self {
        Self {
            start: event.start,
            end: event.end,
        }
    }
}

/// Errors from [`Event`] construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventError {
    /// The end minute precedes the start minute.
    EndBeforeStart {
        /// Offending start minute.
        start: i32,
        /// Offending end minute.
        end: i32,
    },
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndBeforeStart { start, end } => {
                write!(f, "event end {end} precedes start {start}")
            }
        }
    }
}

impl std::error::Error for EventError {}
