use neonfolio_core::Subscription;
use web_sys::Element;

use super::{Component, PageContext};
use crate::{
    dom::{self, El},
    error::Error,
};

/// Thin bar along the top edge that fills as the page scrolls.
pub(crate) struct ScrollProgress {
    root: Element,
    _subscription: Subscription,
}

impl ScrollProgress {
    pub(crate) fn mount(ctx: &PageContext) -> Result<Self, Error> {
        let root = El::new("div")?.class("scroll-progress").build();
        let bar = El::new("div")?.class("scroll-progress-bar").append_to(&root);

        let subscription = ctx.scroll.subscribe(move |snapshot| {
            let transform = format!("scaleX({:.4})", snapshot.progress());
            dom::set_style(&bar, "transform", &transform);
        });

        Ok(Self { root, _subscription: subscription })
    }
}

impl Component for ScrollProgress {
    fn root(&self) -> &Element {
        &self.root
    }
}
