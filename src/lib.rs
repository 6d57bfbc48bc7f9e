//! Input-event bridge between a browser host and an immediate-mode GUI demo.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It is handed
//! an already-instantiated GUI/renderer module (the "demo module"), creates a
//! single demo instance from it, and then does three things for the lifetime
//! of the page: forwards normalized pointer/touch/wheel input into the
//! instance, keeps the render surface sized to the window, and ticks the
//! instance once per `requestAnimationFrame` callback. The demo module itself
//! (layout, widgets, drawing) is an external collaborator consumed only
//! through the [`demo::DemoInstance`] contract.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`bridge`] | Event dispatch, input normalization, and the testable [`bridge::BridgeCore`] |
//! | [`demo`] | The demo-instance contract and its error type |
//! | [`event`] | Canonical host event types |
//! | [`touch`] | Single-pointer touch tracking state machine |
//! | [`host`] | DOM listeners, frame loop, and the exported `mount` entry point |
//! | [`consts`] | Shared numeric constants (wheel calibration, button ids) |

pub mod bridge;
pub mod consts;
pub mod demo;
pub mod event;
pub mod host;
pub mod touch;
