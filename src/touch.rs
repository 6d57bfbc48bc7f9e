//! Single-pointer touch tracking.
//!
//! Multi-touch streams are collapsed into one logical pointer: the tracker
//! follows at most one touch identifier at a time, first touch wins, and
//! every other finger is ignored until the tracked one lifts.

#[cfg(test)]
#[path = "touch_test.rs"]
mod touch_test;

use crate::event::TouchPoint;

/// Tracking state: either no touch, or exactly one identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchState {
    /// No touch tracked; waiting for the next touch-start.
    #[default]
    Idle,
    /// Following the touch with this identifier as the logical pointer.
    Tracking(i32),
}

/// The touch tracker state machine.
///
/// All three transitions take the event's changed-touch list in event order
/// and return the accepted touch, if any. `None` means the event is fully
/// ignored — no state change and nothing to forward.
#[derive(Debug, Default)]
pub struct TouchTracker {
    state: TouchState,
}

impl TouchTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The identifier currently tracked, if any.
    #[must_use]
    pub fn tracked(&self) -> Option<i32> {
        match self.state {
            TouchState::Idle => None,
            TouchState::Tracking(id) => Some(id),
        }
    }

    /// Handle a touch-start.
    ///
    /// While idle the first changed touch is adopted; while tracking, only a
    /// changed touch carrying the tracked identifier is accepted (the state
    /// does not change in that case).
    pub fn start(&mut self, changed: &[TouchPoint]) -> Option<TouchPoint> {
        let accepted = match self.state {
            TouchState::Idle => changed.first().copied(),
            TouchState::Tracking(id) => find(changed, id),
        }?;
        self.state = TouchState::Tracking(accepted.id);
        Some(accepted)
    }

    /// Handle a touch-move. A no-op unless some changed touch matches the
    /// tracked identifier; an idle tracker never adopts a touch here.
    pub fn movement(&mut self, changed: &[TouchPoint]) -> Option<TouchPoint> {
        match self.state {
            TouchState::Idle => None,
            TouchState::Tracking(id) => find(changed, id),
        }
    }

    /// Handle a touch-end. Clears the tracker and returns the lifted touch
    /// when it matches the tracked identifier; otherwise a no-op.
    pub fn end(&mut self, changed: &[TouchPoint]) -> Option<TouchPoint> {
        let lifted = match self.state {
            TouchState::Idle => None,
            TouchState::Tracking(id) => find(changed, id),
        }?;
        self.state = TouchState::Idle;
        Some(lifted)
    }
}

/// First changed touch with the given identifier, in event order.
fn find(changed: &[TouchPoint], id: i32) -> Option<TouchPoint> {
    changed.iter().find(|t| t.id == id).copied()
}
