use anyhow::anyhow;
use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCanvasElement, MouseEvent, Window};

use super::canvas::{self, CanvasPainter};
use super::field::{FieldConfig, ParticleField, Pointer};

/// Bookkeeping for the single pending animation frame of a field.
///
/// Once cancelled the handle refuses new ids, so a tick that races teardown
/// knows to cancel the frame it just requested.
#[derive(Debug, Default)]
pub struct TickHandle {
    pending: Cell<Option<i32>>,
    stopped: Cell<bool>,
}

impl TickHandle {
    /// Records a requested frame id. Returns false if the handle was already
    /// cancelled.
    pub fn schedule(&self, id: i32) -> bool {
        if self.stopped.get() {
            return false;
        }
        self.pending.set(Some(id));
        true
    }

    /// The pending frame has been delivered.
    pub fn fired(&self) {
        self.pending.set(None);
    }

    /// Stops the loop. Yields the pending id at most once.
    pub fn cancel(&self) -> Option<i32> {
        self.stopped.set(true);
        self.pending.take()
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        !self.stopped.get() && self.pending.get().is_some()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// Maps client coordinates into a canvas whose top-left sits at
/// (`left`, `top`). `None` when the point falls outside the canvas.
pub fn to_local(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> Option<Pointer> {
    let x = client_x - left;
    let y = client_y - top;
    ((0.0..=width).contains(&x) && (0.0..=height).contains(&y)).then_some(Pointer { x, y })
}

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach<F>(target: EventTarget, kind: &'static str, handler: F) -> anyhow::Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("{} listener: {:?}", kind, e))?;
        Ok(Self { target, kind, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

struct Shared {
    field: RefCell<ParticleField>,
    painter: RefCell<CanvasPainter>,
    pointer: Cell<Option<Pointer>>,
    rng: RefCell<SmallRng>,
    tick: TickHandle,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running particle backdrop bound to one canvas. Dropping it stops the
/// loop and detaches every listener.
pub struct FieldAnimation {
    shared: Rc<Shared>,
    frame: FrameCallback,
    listeners: Vec<Listener>,
}

impl FieldAnimation {
    pub fn start(canvas: HtmlCanvasElement, config: FieldConfig) -> anyhow::Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
        let ctx = canvas::context_2d(&canvas)?;
        let (width, height) = canvas::sync_backing_size(&canvas);

        let mut rng = SmallRng::from_entropy();
        let field = ParticleField::new(config, width, height, &mut rng);
        debug!(
            "particle field started: {} particles on {}x{}",
            field.particles().len(),
            field.width(),
            field.height()
        );

        let mut animation = Self {
            shared: Rc::new(Shared {
                field: RefCell::new(field),
                painter: RefCell::new(CanvasPainter::new(ctx)),
                pointer: Cell::new(None),
                rng: RefCell::new(rng),
                tick: TickHandle::default(),
            }),
            frame: Rc::new(RefCell::new(None)),
            listeners: Vec::new(),
        };

        // Any early return drops `animation`, which detaches what was wired.
        animation.wire_resize(&window, canvas.clone())?;
        if config.interaction.is_some() {
            animation.wire_pointer(&window, canvas)?;
        }
        animation.run(&window);
        Ok(animation)
    }

    fn wire_resize(&mut self, window: &Window, canvas: HtmlCanvasElement) -> anyhow::Result<()> {
        let shared = self.shared.clone();
        let listener = Listener::attach(window.clone().into(), "resize", move |_| {
            let (width, height) = canvas::sync_backing_size(&canvas);
            let mut rng = shared.rng.borrow_mut();
            shared.field.borrow_mut().resize(width, height, &mut *rng);
            debug!("particle field re-initialized for {}x{}", width, height);
        })?;
        self.listeners.push(listener);
        Ok(())
    }

    fn wire_pointer(&mut self, window: &Window, canvas: HtmlCanvasElement) -> anyhow::Result<()> {
        // The canvas sits under the content with pointer events disabled, so
        // track the pointer on the window and project it into the canvas.
        let shared = self.shared.clone();
        let moved = Listener::attach(window.clone().into(), "pointermove", move |ev: Event| {
            if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
                let rect = canvas.get_bounding_client_rect();
                shared.pointer.set(to_local(
                    ev.client_x() as f64,
                    ev.client_y() as f64,
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                ));
            }
        })?;
        self.listeners.push(moved);

        if let Some(root) = window.document().and_then(|d| d.document_element()) {
            let shared = self.shared.clone();
            let left = Listener::attach(root.into(), "pointerleave", move |_| {
                shared.pointer.set(None);
            })?;
            self.listeners.push(left);
        }
        Ok(())
    }

    fn run(&self, window: &Window) {
        let frame = self.frame.clone();
        let shared = self.shared.clone();
        *self.frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            shared.tick.fired();
            if shared.tick.is_stopped() {
                return;
            }
            {
                let mut field = shared.field.borrow_mut();
                field.step(shared.pointer.get());
                field.render(&mut *shared.painter.borrow_mut());
            }
            if let Some(window) = web_sys::window() {
                request_frame(&window, &frame, &shared.tick);
            }
        }) as Box<dyn FnMut()>));
        request_frame(window, &self.frame, &self.shared.tick);
    }

    /// Cancels the pending frame and detaches listeners. Safe to call more
    /// than once.
    pub fn stop(&mut self) {
        if let Some(id) = self.shared.tick.cancel() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        if self.frame.borrow_mut().take().is_some() {
            debug!("particle field stopped");
        }
        self.listeners.clear();
    }
}

impl Drop for FieldAnimation {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(window: &Window, frame: &FrameCallback, tick: &TickHandle) {
    let frame = frame.borrow();
    let Some(callback) = frame.as_ref() else {
        return;
    };
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => {
            if !tick.schedule(id) {
                let _ = window.cancel_animation_frame(id);
            }
        }
        Err(e) => warn!("requestAnimationFrame failed: {:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_handle_is_idle() {
        let tick = TickHandle::default();
        assert!(!tick.is_running());
        assert!(!tick.is_stopped());
    }

    #[test]
    fn scheduled_frame_counts_as_running_until_fired() {
        let tick = TickHandle::default();
        assert!(tick.schedule(7));
        assert!(tick.is_running());
        tick.fired();
        assert!(!tick.is_running());
    }

    #[test]
    fn cancel_yields_pending_id_once() {
        let tick = TickHandle::default();
        tick.schedule(3);
        assert_eq!(tick.cancel(), Some(3));
        assert_eq!(tick.cancel(), None);
        assert!(!tick.is_running());
    }

    #[test]
    fn cancel_without_schedule_is_harmless() {
        let tick = TickHandle::default();
        assert_eq!(tick.cancel(), None);
        assert_eq!(tick.cancel(), None);
        assert!(tick.is_stopped());
        assert!(!tick.is_running());
    }

    #[test]
    fn schedule_after_cancel_is_refused() {
        let tick = TickHandle::default();
        tick.cancel();
        assert!(!tick.schedule(11));
        assert!(!tick.is_running());
        assert_eq!(tick.cancel(), None);
    }

    #[test]
    fn pointer_maps_into_canvas_space() {
        let p = to_local(150.0, 260.0, 100.0, 200.0, 300.0, 100.0).unwrap();
        assert_eq!(p, Pointer { x: 50.0, y: 60.0 });
    }

    #[test]
    fn pointer_outside_canvas_is_dropped() {
        assert_eq!(to_local(50.0, 260.0, 100.0, 200.0, 300.0, 100.0), None);
        assert_eq!(to_local(150.0, 301.0, 100.0, 200.0, 300.0, 100.0), None);
    }
}
