use std::{cell::RefCell, rc::Rc};

use neonfolio_core::effects::GlitchState;
use web_sys::{Element, MouseEvent};

use crate::{
    browser::{AnimationFrameLoop, EventListener},
    dom::{self, El},
    error::Error,
    js,
};

/// Heading text that splits into offset pink and cyan copies on hover.
pub(crate) struct GlitchText {
    root: Element,
    _hover: EventListener,
    _animation: Rc<RefCell<Option<AnimationFrameLoop>>>,
}

impl GlitchText {
    pub(crate) fn new(text: &str) -> Result<Self, Error> {
        let upper = El::new("span")?.class("glitch-layer glitch-upper").attr("aria-hidden", "true").text(text);
        let lower = El::new("span")?.class("glitch-layer glitch-lower").attr("aria-hidden", "true").text(text);
        let root = El::new("span")?
            .class("glitch")
            .child(El::new("span")?.class("glitch-base").text(text))
            .child(upper.clone())
            .child(lower.clone())
            .build();
        let layers = [upper.build(), lower.build()];

        let state = Rc::new(RefCell::new(GlitchState::default()));
        let animation: Rc<RefCell<Option<AnimationFrameLoop>>> = Rc::default();

        let slot = animation.clone();
        let hover = EventListener::new(&root, "mouseenter", move |_: MouseEvent| {
            if !state.borrow_mut().hover(js::now()) {
                return;
            }

            let state = state.clone();
            let layers = layers.clone();
            match AnimationFrameLoop::start(move |_| paint(&state.borrow(), &layers)) {
                Ok(frame_loop) => *slot.borrow_mut() = Some(frame_loop),
                Err(e) => tracing::warn!(error = %e, "glitch animation not started"),
            }
        })?;

        Ok(Self { root, _hover: hover, _animation: animation })
    }

    pub(crate) fn root(&self) -> &Element {
        &self.root
    }
}

/// Applies the current layer offsets; returns false once the glitch is over.
fn paint(state: &GlitchState, [upper, lower]: &[Element; 2]) -> bool {
    match state.layers(js::now()) {
        Some(layers) => {
            let opacity = layers.opacity.to_string();
            dom::set_style(upper, "transform", &format!("translateX({}px)", layers.upper_x));
            dom::set_style(lower, "transform", &format!("translateX({}px)", layers.lower_x));
            dom::set_style(upper, "opacity", &opacity);
            dom::set_style(lower, "opacity", &opacity);
            true
        },
        None => {
            dom::set_style(upper, "opacity", "0");
            dom::set_style(lower, "opacity", "0");
            false
        },
    }
}
