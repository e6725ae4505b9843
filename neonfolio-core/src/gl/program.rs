use glow::HasContext;

use crate::error::Error;

/// Every stage targets WebGL2.
const GLSL_DIRECTIVE: &str = "#version 300 es";

/// A linked vertex + fragment program.
#[derive(Debug)]
pub(crate) struct ShaderProgram {
    pub(crate) program: glow::Program,
}

impl ShaderProgram {
    /// Compiles both stage bodies as GLSL ES 3.00 and links them.
    ///
    /// Bodies carry no `#version` line; it is prepended here together with
    /// the stage's float precision.
    pub(crate) fn build(
        gl: &glow::Context,
        vertex_body: &str,
        fragment_body: &str,
    ) -> Result<Self, Error> {
        let vertex = Stage::Vertex.compile(gl, vertex_body)?;
        let fragment = match Stage::Fragment.compile(gl, fragment_body) {
            Ok(shader) => shader,
            Err(e) => {
                unsafe { gl.delete_shader(vertex) };
                return Err(e);
            },
        };

        let linked = link(gl, vertex, fragment);
        unsafe {
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
        }

        linked.map(|program| Self { program })
    }

    pub(crate) fn use_program(&self, gl: &glow::Context) {
        unsafe { gl.use_program(Some(self.program)) };
    }

    pub(crate) fn uniform_location(
        &self,
        gl: &glow::Context,
        name: &'static str,
    ) -> Result<glow::UniformLocation, Error> {
        unsafe { gl.get_uniform_location(self.program, name) }
            .ok_or(Error::uniform_location_failed(name))
    }

    pub(crate) fn delete(&self, gl: &glow::Context) {
        unsafe { gl.delete_program(self.program) };
    }
}

/// Links the stages; the returned program owns no shader objects.
fn link(
    gl: &glow::Context,
    vertex: glow::Shader,
    fragment: glow::Shader,
) -> Result<glow::Program, Error> {
    let program =
        unsafe { gl.create_program() }.map_err(|_| Error::shader_program_creation_failed())?;

    unsafe {
        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);
        gl.detach_shader(program, vertex);
        gl.detach_shader(program, fragment);
    }

    if unsafe { gl.get_program_link_status(program) } {
        Ok(program)
    } else {
        let log = unsafe { gl.get_program_info_log(program) };
        unsafe { gl.delete_program(program) };
        Err(Error::shader_link_failed(log))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    fn gl_type(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        }
    }

    /// Full source for this stage: directive, precision, then the body.
    fn source(self, body: &str) -> String {
        // vertex positions need the full range; colors do not
        let precision = match self {
            Self::Vertex => "highp",
            Self::Fragment => "mediump",
        };
        format!("{GLSL_DIRECTIVE}\nprecision {precision} float;\n{body}")
    }

    fn compile(self, gl: &glow::Context, body: &str) -> Result<glow::Shader, Error> {
        let shader = unsafe { gl.create_shader(self.gl_type()) }
            .map_err(|e| Error::shader_creation_failed(&e))?;

        unsafe {
            gl.shader_source(shader, &self.source(body));
            gl.compile_shader(shader);
        }

        if unsafe { gl.get_shader_compile_status(shader) } {
            Ok(shader)
        } else {
            let log = unsafe { gl.get_shader_info_log(shader) };
            unsafe { gl.delete_shader(shader) };
            Err(Error::shader_compile_failed(self.label(), log))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_declare_stage_precision() {
        let vertex = Stage::Vertex.source("void main() {}");
        let fragment = Stage::Fragment.source("void main() {}");

        assert!(vertex.starts_with("#version 300 es\nprecision highp float;\n"));
        assert!(fragment.starts_with("#version 300 es\nprecision mediump float;\n"));
        assert!(fragment.ends_with("void main() {}"));
    }

    #[test]
    fn shipped_shaders_have_no_version_line() {
        for body in [include_str!("../shaders/scene.vert"), include_str!("../shaders/scene.frag")] {
            assert!(!body.contains("#version"));
            assert_eq!(Stage::Vertex.source(body).matches("#version").count(), 1);
        }
    }
}
