use std::marker::PhantomData;

use glow::HasContext;

use crate::{
    error::Error,
    gl::{ShaderProgram, buffer_upload_struct},
};

/// A `#[repr(C)]` struct laid out as a std140 uniform block.
pub(crate) trait UniformBlock: Copy {
    /// Block name in the shader source.
    const NAME: &'static str;
    /// Indexed binding point shared by the block and its buffer.
    const BINDING: u32;
}

/// GPU storage for one [`UniformBlock`], wired to a linked program.
#[derive(Debug)]
pub(crate) struct UniformBuffer<B> {
    buffer: glow::Buffer,
    _block: PhantomData<B>,
}

impl<B: UniformBlock> UniformBuffer<B> {
    /// Creates the buffer and points the program's block at it.
    pub(crate) fn attach(gl: &glow::Context, program: &ShaderProgram) -> Result<Self, Error> {
        let buffer = unsafe { gl.create_buffer() }
            .map_err(|e| Error::buffer_creation_failed(B::NAME, e))?;

        let Some(index) = (unsafe { gl.get_uniform_block_index(program.program, B::NAME) }) else {
            unsafe { gl.delete_buffer(buffer) };
            return Err(Error::uniform_location_failed(B::NAME));
        };

        unsafe { gl.uniform_block_binding(program.program, index, B::BINDING) };
        let ubo = Self { buffer, _block: PhantomData };
        ubo.rebind(gl);

        Ok(ubo)
    }

    /// Restores the indexed binding; other GL users may have taken the slot.
    pub(crate) fn rebind(&self, gl: &glow::Context) {
        unsafe { gl.bind_buffer_base(glow::UNIFORM_BUFFER, B::BINDING, Some(self.buffer)) };
    }

    /// Replaces the whole block.
    pub(crate) fn write(&self, gl: &glow::Context, block: &B) {
        unsafe { gl.bind_buffer(glow::UNIFORM_BUFFER, Some(self.buffer)) };
        buffer_upload_struct(gl, glow::UNIFORM_BUFFER, block, glow::DYNAMIC_DRAW);
        unsafe { gl.bind_buffer(glow::UNIFORM_BUFFER, None) };
    }

    pub(crate) fn delete(&self, gl: &glow::Context) {
        unsafe { gl.delete_buffer(self.buffer) };
    }
}
