use crate::{error::Error, gl::context::GlState};

/// Rendering context that provides access to GL state.
pub struct RenderContext<'a> {
    pub gl: &'a glow::Context,
    pub state: &'a mut GlState,
}

/// Trait for objects that can be rendered.
pub trait Drawable {
    /// Binds programs and buffers and sets the GL state the draw needs.
    fn prepare(&self, context: &mut RenderContext) -> Result<(), Error>;

    /// Issues the draw calls. State is already set up by [`Drawable::prepare`].
    fn draw(&self, context: &mut RenderContext);

    /// Unbinds what `prepare` bound and restores default state.
    fn cleanup(&self, context: &mut RenderContext);

    /// Runs the full prepare, draw and cleanup sequence.
    fn render(&self, context: &mut RenderContext) -> Result<(), Error> {
        self.prepare(context)?;
        self.draw(context);
        self.cleanup(context);
        Ok(())
    }
}
