//! Browser layer: demo-module binding, DOM listeners, and the frame loop.
//!
//! Everything here assumes a wasm32 browser environment. The exported
//! [`mount`] function is the single entry point: the host page instantiates
//! the demo module, then hands it to `mount` together with the canvas that
//! serves as the render surface. All state lives in one shared
//! [`BridgeCore`]; the listener closures and the frame callback each borrow
//! it only for the duration of a single synchronous callback.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Once;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCanvasElement, MouseEvent, TouchEvent, WheelEvent};

use crate::bridge::BridgeCore;
use crate::demo::{DemoError, DemoInstance};
use crate::event::{HostEvent, TouchPoint, ViewportSize, WheelDelta};

#[wasm_bindgen]
extern "C" {
    /// The GUI demo module, duck-typed: any JS object exposing the
    /// `init_demo` / `do_*` entry points works.
    pub type DemoModule;

    #[wasm_bindgen(method, structural, catch)]
    fn init_demo(this: &DemoModule) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, structural)]
    fn do_mouse_move(this: &DemoModule, handle: &JsValue, x: f64, y: f64);

    #[wasm_bindgen(method, structural)]
    fn do_mouse_button(this: &DemoModule, handle: &JsValue, button: i16, pressed: bool);

    #[wasm_bindgen(method, structural)]
    fn do_mouse_wheel(this: &DemoModule, handle: &JsValue, dx: f64, dy: f64);

    #[wasm_bindgen(method, structural, catch)]
    fn do_frame(
        this: &DemoModule,
        handle: &JsValue,
        token: f64,
        width: u32,
        height: u32,
    ) -> Result<(), JsValue>;
}

/// A running demo session backed by the JS module.
///
/// Owns the opaque instance handle returned by `init_demo` and passes it to
/// every call, per the collaborator contract.
pub struct JsDemo {
    module: DemoModule,
    handle: JsValue,
}

impl JsDemo {
    /// Create the demo instance. Fatal on failure: the caller must abort
    /// the mount without wiring anything.
    ///
    /// # Errors
    ///
    /// [`DemoError::Init`] with the module's own message when `init_demo`
    /// throws.
    pub fn init(module: DemoModule) -> Result<Self, DemoError> {
        let handle = module
            .init_demo()
            .map_err(|err| DemoError::Init(js_error_text(&err)))?;
        Ok(Self { module, handle })
    }
}

impl DemoInstance for JsDemo {
    fn mouse_move(&mut self, x: f64, y: f64) {
        self.module.do_mouse_move(&self.handle, x, y);
    }

    fn mouse_button(&mut self, button: i16, pressed: bool) {
        self.module.do_mouse_button(&self.handle, button, pressed);
    }

    fn mouse_wheel(&mut self, dx: f64, dy: f64) {
        self.module.do_mouse_wheel(&self.handle, dx, dy);
    }

    fn frame(&mut self, token: f64, width: u32, height: u32) -> Result<(), DemoError> {
        self.module
            .do_frame(&self.handle, token, width, height)
            .map_err(|err| DemoError::Frame(js_error_text(&err)))
    }
}

fn js_error_text(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

type SharedCore = Rc<RefCell<BridgeCore<JsDemo>>>;
type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Handle returned by [`mount`], exposed to the host page.
///
/// Dropping it on the JS side does not stop anything; the bridge runs until
/// the page goes away or [`BridgeHandle::stop`] is called.
#[wasm_bindgen]
pub struct BridgeHandle {
    stop: Rc<Cell<bool>>,
}

#[wasm_bindgen]
impl BridgeHandle {
    /// Stop the frame loop before its next re-arm. The tick already
    /// scheduled still runs; input listeners stay attached but only mutate
    /// demo state that is no longer rendered.
    pub fn stop(&self) {
        self.stop.set(true);
    }
}

/// Wire the bridge: create the demo instance, size the surface, attach the
/// input listeners, and start the frame loop.
///
/// # Errors
///
/// Fails if `init_demo` fails or a listener cannot be registered; nothing
/// keeps running in that case.
#[wasm_bindgen]
pub fn mount(module: DemoModule, canvas: HtmlCanvasElement) -> Result<BridgeHandle, JsValue> {
    init_logging();

    // Creation is a hard prerequisite: no listener is registered and no
    // frame is driven unless the instance exists.
    let demo = JsDemo::init(module).map_err(|err| JsValue::from_str(&err.to_string()))?;
    let viewport = sync_surface(&canvas);
    let core: SharedCore = Rc::new(RefCell::new(BridgeCore::new(demo, viewport)));

    attach_listeners(&core, &canvas)?;

    let stop = Rc::new(Cell::new(false));
    start_frame_loop(&core, &stop);

    log::info!("bridge mounted at {}x{}", viewport.width, viewport.height);
    Ok(BridgeHandle { stop })
}

// ── Viewport sync ───────────────────────────────────────────────

/// Read the window's client-area size, apply it to the canvas backing
/// store, and return it. Called on mount and on every resize; synchronous,
/// no debounce.
fn sync_surface(canvas: &HtmlCanvasElement) -> ViewportSize {
    let size = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map_or(ViewportSize::new(1, 1), |root| {
            ViewportSize::clamped(root.client_width(), root.client_height())
        });
    canvas.set_width(size.width);
    canvas.set_height(size.height);
    size
}

// ── Listener wiring ─────────────────────────────────────────────

/// Register one DOM listener that casts the event and hands it to `handler`.
///
/// The closure is leaked: listeners live for the page lifetime and are
/// never detached.
fn listen<E, F>(target: &EventTarget, kind: &str, mut handler: F) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Attach resize, contextmenu, and either the touch or the mouse listener
/// set, mirroring the original shim: a surface that exposes `ontouchstart`
/// gets touch listeners instead of mouse listeners, not both.
fn attach_listeners(core: &SharedCore, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let canvas_target: &EventTarget = canvas.as_ref();

    listen::<Event, _>(canvas_target, "contextmenu", |ev| {
        ev.prevent_default();
    })?;

    if let Some(window) = web_sys::window() {
        let core = Rc::clone(core);
        let canvas = canvas.clone();
        listen::<Event, _>(window.as_ref(), "resize", move |_ev| {
            let size = sync_surface(&canvas);
            core.borrow_mut().handle(HostEvent::Resized(size));
        })?;
    }

    if has_touch(canvas) {
        attach_touch_listeners(core, canvas_target)
    } else {
        attach_mouse_listeners(core, canvas_target)
    }
}

/// Whether the surface supports touch input (`'ontouchstart' in canvas`).
fn has_touch(canvas: &HtmlCanvasElement) -> bool {
    js_sys::Reflect::has(canvas.as_ref(), &JsValue::from_str("ontouchstart")).unwrap_or(false)
}

fn attach_mouse_listeners(core: &SharedCore, target: &EventTarget) -> Result<(), JsValue> {
    {
        let core = Rc::clone(core);
        listen::<MouseEvent, _>(target, "mousedown", move |ev| {
            ev.prevent_default();
            core.borrow_mut().handle(HostEvent::ButtonPressed {
                x: f64::from(ev.client_x()),
                y: f64::from(ev.client_y()),
                button: ev.button(),
            });
        })?;
    }
    {
        let core = Rc::clone(core);
        listen::<MouseEvent, _>(target, "mouseup", move |ev| {
            ev.prevent_default();
            core.borrow_mut().handle(HostEvent::ButtonReleased {
                x: f64::from(ev.client_x()),
                y: f64::from(ev.client_y()),
                button: ev.button(),
            });
        })?;
    }
    {
        let core = Rc::clone(core);
        listen::<MouseEvent, _>(target, "mousemove", move |ev| {
            ev.prevent_default();
            core.borrow_mut().handle(HostEvent::PointerMoved {
                x: f64::from(ev.client_x()),
                y: f64::from(ev.client_y()),
            });
        })?;
    }
    {
        let core = Rc::clone(core);
        listen::<WheelEvent, _>(target, "wheel", move |ev| {
            ev.prevent_default();
            core.borrow_mut().handle(HostEvent::Wheel(WheelDelta {
                dx: ev.delta_x(),
                dy: ev.delta_y(),
            }));
        })?;
    }
    Ok(())
}

fn attach_touch_listeners(core: &SharedCore, target: &EventTarget) -> Result<(), JsValue> {
    {
        let core = Rc::clone(core);
        listen::<TouchEvent, _>(target, "touchstart", move |ev| {
            ev.prevent_default();
            core.borrow_mut().handle(HostEvent::TouchStarted(changed_touches(&ev)));
        })?;
    }
    {
        let core = Rc::clone(core);
        listen::<TouchEvent, _>(target, "touchend", move |ev| {
            ev.prevent_default();
            core.borrow_mut().handle(HostEvent::TouchEnded(changed_touches(&ev)));
        })?;
    }
    {
        let core = Rc::clone(core);
        listen::<TouchEvent, _>(target, "touchmove", move |ev| {
            ev.prevent_default();
            core.borrow_mut().handle(HostEvent::TouchMoved(changed_touches(&ev)));
        })?;
    }
    Ok(())
}

/// The event's changed touches in event order, as canonical touch points.
fn changed_touches(ev: &TouchEvent) -> Vec<TouchPoint> {
    let list = ev.changed_touches();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| TouchPoint::new(t.identifier(), f64::from(t.client_x()), f64::from(t.client_y())))
        .collect()
}

// ── Frame loop ──────────────────────────────────────────────────

/// Start the perpetual self-rescheduling frame loop.
///
/// The first tick runs synchronously with token 0 (the original shim calls
/// `do_frame(0)` directly); every later tick comes from the scheduler with
/// its timestamp as the token.
fn start_frame_loop(core: &SharedCore, stop: &Rc<Cell<bool>>) {
    let holder: FrameClosure = Rc::new(RefCell::new(None));
    let cb = {
        let core = Rc::clone(core);
        let stop = Rc::clone(stop);
        let holder = Rc::clone(&holder);
        Closure::wrap(Box::new(move |token: f64| {
            drive_frame(&core, &stop, &holder, token);
        }) as Box<dyn FnMut(f64)>)
    };
    *holder.borrow_mut() = Some(cb);
    drive_frame(core, stop, &holder, 0.0);
}

/// One frame-loop step: tick first, then re-arm, so at least one tick
/// happens even when rescheduling fails. Dropping the closure out of the
/// holder is what actually ends the loop.
fn drive_frame(core: &SharedCore, stop: &Rc<Cell<bool>>, holder: &FrameClosure, token: f64) {
    if let Err(err) = core.borrow_mut().tick(token) {
        log::error!("frame loop halted: {err}");
        holder.borrow_mut().take();
        return;
    }
    if stop.get() {
        holder.borrow_mut().take();
        return;
    }
    let rearmed = {
        let holder_ref = holder.borrow();
        match (web_sys::window(), holder_ref.as_ref()) {
            (Some(window), Some(cb)) => window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .is_ok(),
            _ => false,
        }
    };
    if !rearmed {
        log::warn!("requestAnimationFrame rejected; frame loop stopped");
        holder.borrow_mut().take();
    }
}

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    });
}
