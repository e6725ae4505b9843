//! WebGL2 plumbing for the background scene.

mod buffer;
pub(crate) mod context;
mod program;
pub(crate) mod renderer;
mod scene_renderer;
mod ubo;

use buffer::{buffer_upload_array, buffer_upload_struct};
use program::ShaderProgram;

pub use context::GlState;
pub use renderer::{Drawable, RenderContext};
pub use scene_renderer::SceneRenderer;
