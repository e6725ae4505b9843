use wasm_bindgen::JsCast;

use crate::js;

/// Checks whether this browser can create a WebGL2 context.
///
/// Uses a detached throwaway canvas; any failure along the way counts as
/// unavailable.
pub(crate) fn webgl2_available() -> bool {
    let available = js::create_canvas()
        .ok()
        .and_then(|canvas| canvas.get_context("webgl2").ok().flatten())
        .is_some_and(|ctx| ctx.is_instance_of::<web_sys::WebGl2RenderingContext>());

    tracing::debug!(available, "webgl2 probe");
    available
}
