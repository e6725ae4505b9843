use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{AddEventListenerOptions, EventTarget};

use crate::error::Error;

/// A DOM event listener removed when dropped.
pub(crate) struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
    /// Attaches `f` to `target`, casting each event to `E`.
    pub(crate) fn new<E: JsCast>(
        target: &EventTarget,
        event_type: &'static str,
        f: impl FnMut(E) + 'static,
    ) -> Result<Self, Error> {
        Self::attach(target, event_type, f, None)
    }

    /// Like [`EventListener::new`], but promises never to call
    /// `preventDefault`, so scrolling is not held up by the handler.
    pub(crate) fn passive<E: JsCast>(
        target: &EventTarget,
        event_type: &'static str,
        f: impl FnMut(E) + 'static,
    ) -> Result<Self, Error> {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        Self::attach(target, event_type, f, Some(&options))
    }

    fn attach<E: JsCast>(
        target: &EventTarget,
        event_type: &'static str,
        mut f: impl FnMut(E) + 'static,
        options: Option<&AddEventListenerOptions>,
    ) -> Result<Self, Error> {
        let callback = Closure::wrap(
            Box::new(move |event: web_sys::Event| f(event.unchecked_into::<E>()))
                as Box<dyn FnMut(web_sys::Event)>,
        );

        let function: &js_sys::Function = callback.as_ref().unchecked_ref();
        match options {
            Some(options) => target
                .add_event_listener_with_callback_and_add_event_listener_options(
                    event_type, function, options,
                ),
            None => target.add_event_listener_with_callback(event_type, function),
        }
        .map_err(|_| Error::listener_failed(event_type))?;

        Ok(Self { target: target.clone(), event_type, callback })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

impl std::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListener")
            .field("event_type", &self.event_type)
            .finish()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use wasm_bindgen_test::*;
    use web_sys::{Event, EventInit};

    use super::*;
    use crate::js;

    wasm_bindgen_test_configure!(run_in_browser);

    fn cancelable(event_type: &str) -> Event {
        let init = EventInit::new();
        init.set_cancelable(true);
        Event::new_with_event_init_dict(event_type, &init).unwrap()
    }

    #[wasm_bindgen_test]
    fn passive_listener_cannot_cancel() {
        let window = js::window().unwrap();
        let _listener =
            EventListener::passive(&window, "neonfolio-passive", |e: Event| e.prevent_default())
                .unwrap();

        let event = cancelable("neonfolio-passive");
        window.dispatch_event(&event).unwrap();
        assert!(!event.default_prevented());
    }

    #[wasm_bindgen_test]
    fn dropped_listener_stops_firing() {
        let window = js::window().unwrap();
        let hits = Rc::new(Cell::new(0));
        let listener = EventListener::new(&window, "neonfolio-drop", {
            let hits = hits.clone();
            move |_: Event| hits.set(hits.get() + 1)
        })
        .unwrap();

        window.dispatch_event(&cancelable("neonfolio-drop")).unwrap();
        drop(listener);
        window.dispatch_event(&cancelable("neonfolio-drop")).unwrap();
        assert_eq!(hits.get(), 1);
    }
}
