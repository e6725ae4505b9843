use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use wasm_bindgen::{JsCast, closure::Closure};

use crate::{error::Error, js};

type FrameClosure = Closure<dyn FnMut(f64)>;

/// A `requestAnimationFrame` loop that re-registers itself every frame.
///
/// The callback receives the frame timestamp in milliseconds and returns
/// whether the loop should keep running. Dropping the handle cancels the
/// pending frame.
pub(crate) struct AnimationFrameLoop {
    inner: Rc<FrameInner>,
}

struct FrameInner {
    closure: RefCell<Option<FrameClosure>>,
    callback: RefCell<Box<dyn FnMut(f64) -> bool>>,
    running: Cell<bool>,
    frame_id: Cell<i32>,
}

impl AnimationFrameLoop {
    /// Creates the loop and requests the first frame.
    pub(crate) fn start(callback: impl FnMut(f64) -> bool + 'static) -> Result<Self, Error> {
        let inner = Rc::new(FrameInner {
            closure: RefCell::new(None),
            callback: RefCell::new(Box::new(callback)),
            running: Cell::new(true),
            frame_id: Cell::new(0),
        });

        // the closure only holds a weak reference, so dropping the handle frees it
        let weak = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.running.get() {
                return;
            }

            let keep_running = (inner.callback.borrow_mut())(timestamp_ms);
            if !keep_running {
                inner.running.set(false);
                return;
            }

            if let Some(closure) = inner.closure.borrow().as_ref() {
                match request_frame(closure) {
                    Ok(id) => inner.frame_id.set(id),
                    Err(e) => {
                        tracing::error!(error = %e, "animation loop stopped");
                        inner.running.set(false);
                    },
                }
            }
        }) as Box<dyn FnMut(f64)>);

        inner.frame_id.set(request_frame(&closure)?);
        *inner.closure.borrow_mut() = Some(closure);

        Ok(Self { inner })
    }
}

fn request_frame(closure: &FrameClosure) -> Result<i32, Error> {
    js::window()?
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map_err(|_| Error::timer_failed("animation frame"))
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        self.inner.running.set(false);
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.inner.frame_id.get());
        }
    }
}

impl std::fmt::Debug for AnimationFrameLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationFrameLoop")
            .field("running", &self.inner.running.get())
            .finish()
    }
}
