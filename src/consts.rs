//! Shared numeric constants for the input bridge.

// ── Wheel calibration ───────────────────────────────────────────

// The divisors and the sign flip applied in `BridgeCore::handle` are an
// empirical calibration inherited from the original shim ("this scale is
// arbitrary"). Different input devices report wheel deltas at different
// magnitudes and sign conventions; these values are kept as-is rather than
// derived from any unit conversion.

/// Divisor applied to raw horizontal wheel deltas before forwarding.
pub const WHEEL_DX_DIVISOR: f64 = 10.0;

/// Divisor applied to raw vertical wheel deltas before forwarding.
pub const WHEEL_DY_DIVISOR: f64 = 100.0;

// ── Touch ───────────────────────────────────────────────────────

/// Button id forwarded for synthesized touch presses (the primary button).
pub const TOUCH_BUTTON: i16 = 0;

// ── Viewport ────────────────────────────────────────────────────

/// Minimum render-surface dimension in pixels per axis.
pub const MIN_SURFACE_PX: u32 = 1;
