//! WebGL context loss detection.
//!
//! The background scene never tries to restore a lost context: once the
//! browser reports a loss, the scene is torn down and the page continues
//! with the static fallback.

use std::{cell::Cell, rc::Rc};

use web_sys::WebGlContextEvent;

use super::EventListener;
use crate::error::Error;

/// Watches a canvas for `webglcontextlost`.
pub(crate) struct ContextLossHandler {
    is_lost: Rc<Cell<bool>>,
    _on_context_lost: EventListener,
}

impl ContextLossHandler {
    pub(crate) fn new(canvas: &web_sys::HtmlCanvasElement) -> Result<Self, Error> {
        let is_lost = Rc::new(Cell::new(false));

        let flag = is_lost.clone();
        let on_context_lost =
            EventListener::new(canvas, "webglcontextlost", move |event: WebGlContextEvent| {
                event.prevent_default();
                tracing::warn!("webgl context lost");
                flag.set(true);
            })?;

        Ok(Self { is_lost, _on_context_lost: on_context_lost })
    }

    /// Returns true once the context has been lost.
    pub(crate) fn is_context_lost(&self) -> bool {
        self.is_lost.get()
    }
}

impl std::fmt::Debug for ContextLossHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextLossHandler")
            .field("is_lost", &self.is_lost.get())
            .finish()
    }
}
