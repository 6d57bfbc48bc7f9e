//! Event dispatch and input normalization.
//!
//! [`BridgeCore`] is the browser-independent heart of the crate: it owns the
//! demo instance, the touch tracker, and the current viewport size, and maps
//! every [`HostEvent`] to calls on the demo's entry points. Separated from
//! the DOM layer in [`crate::host`] so it can be tested without a browser.

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use crate::consts::{TOUCH_BUTTON, WHEEL_DX_DIVISOR, WHEEL_DY_DIVISOR};
use crate::demo::{DemoError, DemoInstance};
use crate::event::{HostEvent, ViewportSize};
use crate::touch::TouchTracker;

/// Bridge state shared by the event listeners and the frame driver.
///
/// The bridge holds no pointer or button state of its own — every input call
/// mutates the demo instance only. The sole values kept here are the touch
/// tracker (needed to disambiguate multi-touch) and the viewport size the
/// frame driver reads.
pub struct BridgeCore<D: DemoInstance> {
    pub demo: D,
    pub touch: TouchTracker,
    pub viewport: ViewportSize,
}

impl<D: DemoInstance> BridgeCore<D> {
    #[must_use]
    pub fn new(demo: D, viewport: ViewportSize) -> Self {
        Self { demo, touch: TouchTracker::new(), viewport }
    }

    /// Dispatch one host event, in delivery order.
    ///
    /// Positions are forwarded unconditionally with no bounds checks; wheel
    /// deltas are scaled by the calibration divisors and negated; touches go
    /// through the tracker and synthesize primary-button presses.
    pub fn handle(&mut self, event: HostEvent) {
        match event {
            HostEvent::PointerMoved { x, y } => self.demo.mouse_move(x, y),
            HostEvent::ButtonPressed { x, y, button } => {
                // Position first, then the button change, as the original
                // shim orders its mouse-down/up forwarding.
                self.demo.mouse_move(x, y);
                self.demo.mouse_button(button, true);
            }
            HostEvent::ButtonReleased { x, y, button } => {
                self.demo.mouse_move(x, y);
                self.demo.mouse_button(button, false);
            }
            HostEvent::Wheel(delta) => {
                self.demo
                    .mouse_wheel(-delta.dx / WHEEL_DX_DIVISOR, -delta.dy / WHEEL_DY_DIVISOR);
            }
            HostEvent::TouchStarted(changed) => {
                if let Some(t) = self.touch.start(&changed) {
                    self.demo.mouse_move(t.x, t.y);
                    self.demo.mouse_button(TOUCH_BUTTON, true);
                }
            }
            HostEvent::TouchMoved(changed) => {
                if let Some(t) = self.touch.movement(&changed) {
                    self.demo.mouse_move(t.x, t.y);
                }
            }
            HostEvent::TouchEnded(changed) => {
                if let Some(t) = self.touch.end(&changed) {
                    self.demo.mouse_move(t.x, t.y);
                    self.demo.mouse_button(TOUCH_BUTTON, false);
                }
            }
            HostEvent::Resized(size) => self.viewport = size,
        }
    }

    /// Tick the demo instance once with the host scheduler's token and the
    /// current viewport size. Exactly one demo tick per call; a failure is
    /// fatal to the caller's loop.
    ///
    /// # Errors
    ///
    /// Propagates [`DemoError::Frame`] from the demo instance unchanged.
    pub fn tick(&mut self, token: f64) -> Result<(), DemoError> {
        self.demo.frame(token, self.viewport.width, self.viewport.height)
    }
}
