//! The collaborator contract consumed by the bridge.
//!
//! The GUI demo module is opaque to this crate: the bridge never inspects it,
//! it only pushes input and frame ticks through the entry points below. The
//! trait exists so the dispatch logic in [`crate::bridge`] can be exercised
//! natively against a recording fake; the browser implementation lives in
//! [`crate::host`].

use thiserror::Error;

/// Failures surfaced by the demo module.
#[derive(Debug, Error)]
pub enum DemoError {
    /// The module could not create a demo instance. Fatal: nothing is wired
    /// and the mount aborts.
    #[error("demo instance failed to initialize: {0}")]
    Init(String),
    /// A per-frame tick failed. Fatal to the frame loop: a broken render
    /// step cannot meaningfully continue, so the loop is not re-armed.
    #[error("demo frame tick failed: {0}")]
    Frame(String),
}

/// One running demo session.
///
/// Implementations own the opaque instance handle; every method mutates the
/// instance's internal state only. Input forwarding is infallible (the
/// contract offers no error channel for it); the frame tick is the one
/// operation allowed to fail, and a failure ends the frame loop.
pub trait DemoInstance {
    /// Forward an absolute cursor position in surface pixels.
    fn mouse_move(&mut self, x: f64, y: f64);

    /// Forward a discrete button press or release.
    fn mouse_button(&mut self, button: i16, pressed: bool);

    /// Forward an already-normalized wheel delta.
    fn mouse_wheel(&mut self, dx: f64, dy: f64);

    /// Advance the demo by one frame.
    ///
    /// `token` is the host scheduler's timestamp, treated as opaque; `width`
    /// and `height` are the current render-surface size in pixels.
    ///
    /// # Errors
    ///
    /// [`DemoError::Frame`] when the render step fails; the caller must
    /// stop driving frames.
    fn frame(&mut self, token: f64, width: u32, height: u32) -> Result<(), DemoError>;
}
