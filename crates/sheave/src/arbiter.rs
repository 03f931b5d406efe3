use crate::anchor::{Anchor, PositionSet};
use crate::drag::DragSession;

/// What a content-offset change from the inner scrollable surface should
/// drive this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDecision {
    /// Move the sheet; the coordinator pins the content offset back to rest.
    Drag,
    /// Let the inner content scroll normally.
    Scroll,
}

/// One frame of input from the inner scrollable surface.
#[derive(Clone, Copy, Debug)]
pub struct ScrollFrame {
    pub content_offset: f32,
    pub content_height: f32,
    /// Whether a finger is actively on the surface, as opposed to inertial
    /// or programmatic motion.
    pub tracking: bool,
}

/// Decide whether a scroll notification moves the sheet or the content.
///
/// In order:
///
/// 1. Content no taller than the sheet's travel never needs to scroll:
///    always drag.
/// 2. No active touch means inertial or programmatic motion; leave it alone.
/// 3. A sheet between anchors finishes its own motion before content may
///    scroll.
/// 4. Resting at the bottom, pulling content up (positive offset) opens the
///    sheet; anything else scrolls.
/// 5. Resting at the top, pulling down past the content's top (negative
///    offset) starts closing the sheet. While the offset is still positive
///    the peak it reaches is remembered, and promoted to the session's
///    `correction` when the drag takes over, so content the user already
///    scrolled is not re-counted as sheet travel. The bottom case
///    deliberately tracks no such correction.
/// 6. At any middle anchor no inner scroll competes: always drag.
pub fn arbitrate(
    positions: &PositionSet,
    current: Option<&Anchor>,
    session: &mut DragSession,
    frame: ScrollFrame,
) -> ScrollDecision {
    if frame.content_height <= positions.span() {
        return ScrollDecision::Drag;
    }
    if !frame.tracking {
        return ScrollDecision::Scroll;
    }
    let Some(current) = current else {
        return ScrollDecision::Drag;
    };

    if current.offset == positions.bottom().offset {
        if frame.content_offset > 0.0 {
            ScrollDecision::Drag
        } else {
            ScrollDecision::Scroll
        }
    } else if current.offset == positions.top().offset {
        if frame.content_offset < 0.0 {
            session.correction = session.peak_offset;
            ScrollDecision::Drag
        } else {
            session.peak_offset = session.peak_offset.max(frame.content_offset);
            ScrollDecision::Scroll
        }
    } else {
        ScrollDecision::Drag
    }
}
