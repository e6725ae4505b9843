use neonfolio_core::{RevealTracker, ScrollObservable, Subscription};
use web_sys::Element;

use crate::{dom, js};

/// Adds `revealed` to `element` the first time it scrolls into view and runs
/// `on_reveal` once.
pub(crate) fn on_scroll_into_view(
    scroll: &ScrollObservable,
    element: &Element,
    mut tracker: RevealTracker,
    mut on_reveal: impl FnMut() + 'static,
) -> Subscription {
    let element = element.clone();
    scroll.subscribe(move |_| {
        let (top, bottom) = dom::vertical_bounds(&element);
        let (_, viewport_height) = js::viewport_size();

        if tracker.observe(top, bottom, viewport_height) {
            dom::toggle_class(&element, "revealed", true);
            on_reveal();
        }
    })
}

/// [`on_scroll_into_view`] without a callback.
pub(crate) fn reveal(scroll: &ScrollObservable, element: &Element) -> Subscription {
    on_scroll_into_view(scroll, element, RevealTracker::section(), || {})
}
