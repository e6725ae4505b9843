use std::{cell::Cell, rc::Rc};

use wasm_bindgen::{JsCast, closure::Closure};

use crate::{error::Error, js};

/// A repeating `setInterval` timer, cleared on drop.
///
/// The callback returns whether to keep running; returning `false` clears
/// the timer but keeps the callback alive until the handle is dropped.
pub(crate) struct Interval {
    handle: Rc<Cell<Option<i32>>>,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub(crate) fn new(period_ms: i32, mut f: impl FnMut() -> bool + 'static) -> Result<Self, Error> {
        let handle = Rc::new(Cell::new(None));

        let active = handle.clone();
        let callback = Closure::wrap(Box::new(move || {
            if !f() {
                clear_interval(active.take());
            }
        }) as Box<dyn FnMut()>);

        let id = js::window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period_ms,
            )
            .map_err(|_| Error::timer_failed("interval"))?;
        handle.set(Some(id));

        Ok(Self { handle, _callback: callback })
    }
}

fn clear_interval(handle: Option<i32>) {
    if let (Some(handle), Some(window)) = (handle, web_sys::window()) {
        window.clear_interval_with_handle(handle);
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        clear_interval(self.handle.take());
    }
}

/// A one-shot `setTimeout`, cancelled if dropped before it fires.
pub(crate) struct Timeout {
    handle: i32,
    fired: Rc<Cell<bool>>,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub(crate) fn new(delay_ms: i32, f: impl FnOnce() + 'static) -> Result<Self, Error> {
        let fired = Rc::new(Cell::new(false));

        let flag = fired.clone();
        let mut f = Some(f);
        let callback = Closure::wrap(Box::new(move || {
            flag.set(true);
            if let Some(f) = f.take() {
                f();
            }
        }) as Box<dyn FnMut()>);

        let handle = js::window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms,
            )
            .map_err(|_| Error::timer_failed("timeout"))?;

        Ok(Self { handle, fired, _callback: callback })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if !self.fired.get()
            && let Some(window) = web_sys::window()
        {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}

impl std::fmt::Debug for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval").field("handle", &self.handle.get()).finish()
    }
}

impl std::fmt::Debug for Timeout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timeout")
            .field("handle", &self.handle)
            .field("fired", &self.fired.get())
            .finish()
    }
}
