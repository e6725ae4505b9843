//! `window.__neonfolio_debug`, enabled with `?debug`.

use std::rc::{Rc, Weak};

use neonfolio_core::{BackgroundMode, Boundary, ScrollObservable};
use wasm_bindgen::prelude::*;

use crate::{components::Background, error::Error, js};

const GLOBAL_NAME: &str = "__neonfolio_debug";

/// Read-only view of a mounted page for the browser console.
///
/// ```javascript
/// window.__neonfolio_debug.backgroundMode();   // "scene", "flat" or "unmounted"
/// window.__neonfolio_debug.crashedSections();
/// ```
///
/// Holds no strong reference to the page; after unmount every getter
/// reports the page as gone.
#[wasm_bindgen]
pub struct NeonfolioDebug {
    background: Weak<Boundary<Background>>,
    scroll: ScrollObservable,
    crashed: Vec<&'static str>,
}

impl NeonfolioDebug {
    pub(crate) fn new(
        background: &Rc<Boundary<Background>>,
        scroll: ScrollObservable,
        crashed: Vec<&'static str>,
    ) -> Self {
        Self { background: Rc::downgrade(background), scroll, crashed }
    }
}

#[wasm_bindgen]
impl NeonfolioDebug {
    /// `"scene"` or `"flat"`; `"crashed"` or `"unmounted"` when there is no background.
    #[wasm_bindgen(js_name = "backgroundMode")]
    pub fn background_mode(&self) -> String {
        let Some(background) = self.background.upgrade() else {
            return "unmounted".to_string();
        };

        match background.as_live().map(Background::mode) {
            Some(BackgroundMode::ScenePresent) => "scene",
            Some(BackgroundMode::FallbackFlat) => "flat",
            None => "crashed",
        }
        .to_string()
    }

    /// Whether the WebGL scene is still drawing frames.
    #[wasm_bindgen(js_name = "sceneLive")]
    pub fn scene_live(&self) -> bool {
        self.background
            .upgrade()
            .is_some_and(|b| b.as_live().is_some_and(Background::scene_live))
    }

    /// Last published scroll offset in CSS pixels.
    #[wasm_bindgen(js_name = "scrollOffset")]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll.latest().offset
    }

    /// Last published scroll progress in `[0, 1]`.
    #[wasm_bindgen(js_name = "scrollProgress")]
    pub fn scroll_progress(&self) -> f32 {
        self.scroll.latest().progress()
    }

    #[wasm_bindgen(js_name = "scrollSubscribers")]
    pub fn scroll_subscribers(&self) -> usize {
        self.scroll.subscriber_count()
    }

    /// Labels of the sections that failed to mount.
    #[wasm_bindgen(js_name = "crashedSections")]
    pub fn crashed_sections(&self) -> js_sys::Array {
        self.crashed.iter().map(|label| JsValue::from_str(label)).collect()
    }
}

pub(crate) fn expose(api: NeonfolioDebug) -> Result<(), Error> {
    let window = js::window()?;
    js_sys::Reflect::set(&window, &GLOBAL_NAME.into(), &JsValue::from(api))
        .map_err(|_| Error::debug_api_failed())?;

    tracing::info!("debugging API exposed at window.{GLOBAL_NAME}");
    Ok(())
}

pub(crate) fn withdraw() {
    if let Ok(window) = js::window() {
        let _ = js_sys::Reflect::delete_property(&window, &GLOBAL_NAME.into());
    }
}
