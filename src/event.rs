//! Canonical host event types.
//!
//! The browser delivers input through per-kind callbacks; the bridge maps
//! each of them to one [`HostEvent`] variant and pushes it through a single
//! dispatch function, preserving strict in-order, single-consumer
//! processing.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use crate::consts::MIN_SURFACE_PX;

/// One changed touch point from a touch event, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Host-assigned touch identifier, stable for the finger's lifetime.
    pub id: i32,
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    #[must_use]
    pub fn new(id: i32, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// Raw wheel / trackpad scroll delta as reported by the host.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in host units.
    pub dx: f64,
    /// Vertical scroll amount in host units (positive = down).
    pub dy: f64,
}

/// Render-surface size in pixels.
///
/// Always equals the host window's client area; re-synced on every resize
/// notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build a size from raw client-area dimensions, clamping each axis to
    /// at least [`MIN_SURFACE_PX`] so a degenerate client area never yields
    /// a zero-sized surface.
    #[must_use]
    pub fn clamped(width: i32, height: i32) -> Self {
        Self {
            width: u32::try_from(width).unwrap_or(0).max(MIN_SURFACE_PX),
            height: u32::try_from(height).unwrap_or(0).max(MIN_SURFACE_PX),
        }
    }
}

/// A host input or lifecycle event, normalized from the DOM callbacks.
///
/// Pointer press/release variants carry the position because the original
/// shim forwards the cursor position before the button change on every
/// mouse-down/up.
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// The pointer moved to an absolute surface position.
    PointerMoved { x: f64, y: f64 },
    /// A mouse button went down at the given position.
    ButtonPressed { x: f64, y: f64, button: i16 },
    /// A mouse button came up at the given position.
    ButtonReleased { x: f64, y: f64, button: i16 },
    /// A wheel/trackpad scroll, still in raw host units.
    Wheel(WheelDelta),
    /// Changed touches of a touch-start event, in event order.
    TouchStarted(Vec<TouchPoint>),
    /// Changed touches of a touch-move event, in event order.
    TouchMoved(Vec<TouchPoint>),
    /// Changed touches of a touch-end event, in event order.
    TouchEnded(Vec<TouchPoint>),
    /// The window client area changed.
    Resized(ViewportSize),
}
