#![forbid(unsafe_code)]

//! Positioned event blocks for the events panel.

use dayview_core::{Event, ViewParams};
use dayview_layout::{Placement, PlacementError, assign_columns, compute_placement};
use serde::{Deserialize, Serialize};

/// One visual block in the events panel: an event plus its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventBlock {
    /// The event the block represents.
    pub event: Event,
    /// Computed bounding box.
    pub placement: Placement,
}

/// Lay out the events panel: partition the events into columns and compute
/// a placement for each.
///
/// Returns one block per input event, in the partitioner's sorted order.
/// An empty input short-circuits to an empty vec so a zero-event day never
/// reaches the placement math.
///
/// # Errors
///
/// Propagates [`PlacementError`] from the placement calculator; with
/// assignments produced by the partitioner the contract always holds, so an
/// error here indicates a bug rather than bad caller input.
pub fn layout_panel(
    params: &ViewParams,
    events: &[Event],
) -> Result<Vec<EventBlock>, PlacementError> {
    if events.is_empty() {
        return Ok(Vec::new());
    }

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("layout_panel", events = events.len()).entered();

    assign_columns(events)
        .into_iter()
        .map(|assignment| {
            compute_placement(
                assignment.column_count,
                assignment.column_index,
                assignment.event,
                &params.border,
            )
            .map(|placement| EventBlock {
                event: assignment.event,
                placement,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(start: i32, end: i32) -> Event {
        Event::new(start, end).expect("valid test event")
    }

    #[test]
    fn empty_input_renders_nothing() {
        let blocks = layout_panel(&ViewParams::DEFAULT, &[]).expect("empty panel");
        assert!(blocks.is_empty());
    }

    #[test]
    fn blocks_align_with_sorted_assignments() {
        let events = vec![ev(560, 620), ev(30, 150), ev(540, 600)];
        let blocks = layout_panel(&ViewParams::DEFAULT, &events).expect("panel layout");
        let starts: Vec<i32> = blocks.iter().map(|b| b.event.start()).collect();
        assert_eq!(starts, vec![30, 540, 560]);
    }

    #[test]
    fn overlapping_events_split_the_panel_width() {
        let events = vec![ev(540, 600), ev(560, 620)];
        let blocks = layout_panel(&ViewParams::DEFAULT, &events).expect("panel layout");
        assert_eq!(blocks[0].placement.width.percent, 50.0);
        assert_eq!(blocks[0].placement.left.percent, 0.0);
        assert_eq!(blocks[1].placement.left.percent, 50.0);
    }

    #[test]
    fn lone_event_spans_the_panel() {
        let blocks = layout_panel(&ViewParams::DEFAULT, &[ev(0, 720)]).expect("panel layout");
        assert_eq!(blocks[0].placement.width.percent, 100.0);
        assert_eq!(blocks[0].placement.top, 0.0);
        assert_eq!(blocks[0].placement.height, 719.0);
    }
}
