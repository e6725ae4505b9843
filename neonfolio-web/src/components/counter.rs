use std::{cell::RefCell, rc::Rc};

use neonfolio_core::{RevealTracker, ScrollObservable, Subscription, effects::CounterAnimation};
use neonfolio_data::Stat;
use web_sys::Element;

use super::reveal::on_scroll_into_view;
use crate::{
    browser::AnimationFrameLoop,
    dom::{self, El},
    error::Error,
    js,
};

/// Stat card whose number counts up once it scrolls into view.
pub(crate) struct Counter {
    root: Element,
    _reveal: Subscription,
    _animation: Rc<RefCell<Option<AnimationFrameLoop>>>,
}

impl Counter {
    pub(crate) fn new(stat: &Stat, scroll: &ScrollObservable) -> Result<Self, Error> {
        let value = El::new("span")?.class("counter-value").text("0");
        let root = El::new("div")?
            .class("counter glass")
            .child(El::new("span")?.class("counter-icon").text(stat.icon))
            .child(
                El::new("div")?
                    .class("counter-number")
                    .child(value.clone())
                    .child(El::new("span")?.class("counter-suffix").text(stat.suffix)),
            )
            .child(El::new("div")?.class("counter-label").text(stat.label))
            .build();
        let value = value.build();

        let animation: Rc<RefCell<Option<AnimationFrameLoop>>> = Rc::default();
        let slot = animation.clone();
        let target = stat.value;
        let reveal = on_scroll_into_view(scroll, &root, RevealTracker::widget(), move || {
            let mut counter = CounterAnimation::new(target);
            let display = value.clone();
            let started = AnimationFrameLoop::start(move |_| {
                let now = js::now();
                counter.start(now);
                dom::set_text(&display, &counter.value(now).to_string());
                counter.is_running(now)
            });

            match started {
                Ok(frame_loop) => *slot.borrow_mut() = Some(frame_loop),
                Err(e) => {
                    tracing::warn!(error = %e, "counter animation not started");
                    dom::set_text(&value, &target.to_string());
                },
            }
        });

        Ok(Self { root, _reveal: reveal, _animation: animation })
    }

    pub(crate) fn root(&self) -> &Element {
        &self.root
    }
}
