use neonfolio_core::RandomSource;
use rand::{SeedableRng, rngs::SmallRng};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use crate::error::Error;

pub(crate) fn window() -> Result<Window, Error> {
    web_sys::window().ok_or(Error::window_not_found())
}

pub(crate) fn document() -> Result<Document, Error> {
    window().and_then(|w| w.document().ok_or(Error::document_not_found()))
}

pub(crate) fn query_html(selector: &str) -> Result<HtmlElement, Error> {
    document()?
        .query_selector(selector)
        .map_err(|_| Error::mount_point_not_found(selector))?
        .ok_or(Error::mount_point_not_found(selector))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| Error::mount_point_not_found(selector))
}

pub(crate) fn create_canvas() -> Result<HtmlCanvasElement, Error> {
    document()?
        .create_element("canvas")
        .map_err(|_| Error::element_creation_failed("canvas"))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| Error::element_creation_failed("canvas"))
}

pub(crate) fn get_webgl2_context(
    canvas: &HtmlCanvasElement,
) -> Result<web_sys::WebGl2RenderingContext, Error> {
    let attributes = web_sys::WebGlContextAttributes::new();
    attributes.set_alpha(true);
    attributes.set_antialias(true);
    attributes.set_premultiplied_alpha(true);

    canvas
        .get_context_with_context_options("webgl2", &attributes)
        .map_err(|_| Error::canvas_context_failed())?
        .ok_or(Error::webgl_context_failed())?
        .dyn_into::<web_sys::WebGl2RenderingContext>()
        .map_err(|_| Error::webgl_context_failed())
}

pub(crate) fn get_2d_context(
    canvas: &HtmlCanvasElement,
) -> Result<web_sys::CanvasRenderingContext2d, Error> {
    canvas
        .get_context("2d")
        .map_err(|_| Error::canvas_context_failed())?
        .ok_or(Error::canvas_context_failed())?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| Error::canvas_context_failed())
}

/// Creates a glow context from the WebGL2 context of the given canvas.
///
/// The raw WebGL2 context is returned as well for `is_context_lost()` checks.
#[cfg(target_arch = "wasm32")]
pub(crate) fn create_glow_context(
    canvas: &HtmlCanvasElement,
) -> Result<(glow::Context, web_sys::WebGl2RenderingContext), Error> {
    let webgl2_ctx = get_webgl2_context(canvas)?;
    let gl = glow::Context::from_webgl2_context(webgl2_ctx.clone());
    Ok((gl, webgl2_ctx))
}

/// Stub for non-wasm targets (clippy on native host).
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn create_glow_context(
    _canvas: &HtmlCanvasElement,
) -> Result<(glow::Context, web_sys::WebGl2RenderingContext), Error> {
    Err(Error::webgl_context_failed())
}

/// Returns the current device pixel ratio, or 1.0 if unavailable.
pub(crate) fn device_pixel_ratio() -> f32 {
    web_sys::window()
        .map(|w| w.device_pixel_ratio() as f32)
        .unwrap_or(1.0)
}

/// Viewport size in CSS pixels.
pub(crate) fn viewport_size() -> (f32, f32) {
    let dimension = |v: Result<wasm_bindgen::JsValue, _>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };

    web_sys::window()
        .map(|w| (dimension(w.inner_width()), dimension(w.inner_height())))
        .unwrap_or((0.0, 0.0))
}

/// Current `window.scrollY` and the largest reachable offset.
pub(crate) fn scroll_position() -> (f32, f32) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };

    let offset = window.scroll_y().unwrap_or(0.0) as f32;
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map_or(0.0, |e| e.scroll_height() as f32);
    let (_, viewport_height) = viewport_size();

    (offset, document_height - viewport_height)
}

/// Milliseconds from `performance.now()`.
pub(crate) fn now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now())
}

/// Reads a parameter from the page's query string.
pub(crate) fn get_query_param(name: &str) -> Option<String> {
    web_sys::window()?
        .location()
        .search()
        .ok()
        .and_then(|search| {
            let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
            params.get(name)
        })
}

/// Shows a blocking `alert` dialog.
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// `Math.random` as a [`RandomSource`].
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MathRandom;

impl RandomSource for MathRandom {
    fn next_f32(&mut self) -> f32 {
        // Math.random can round up to 1.0 after narrowing
        (js_sys::Math::random() as f32).min(1.0 - f32::EPSILON)
    }
}

/// Random source for one page: seeded when `?seed=` is given.
#[derive(Debug, Clone)]
pub(crate) enum PageRng {
    Browser(MathRandom),
    Seeded(SmallRng),
}

impl PageRng {
    pub(crate) fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(SmallRng::seed_from_u64(seed)),
            None => Self::Browser(MathRandom),
        }
    }
}

impl RandomSource for PageRng {
    fn next_f32(&mut self) -> f32 {
        match self {
            Self::Browser(rng) => rng.next_f32(),
            Self::Seeded(rng) => rng.next_f32(),
        }
    }
}
