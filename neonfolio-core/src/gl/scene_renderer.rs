use glam::Mat4;
use glow::HasContext;

use crate::{
    error::Error,
    gl::{
        Drawable, RenderContext, ShaderProgram, buffer_upload_array,
        ubo::{UniformBlock, UniformBuffer},
    },
    scene::{Camera, Frame, Lighting, Primitive, Vertex},
};

/// Draws evaluated [`Frame`]s of the background scene.
///
/// Every distinct primitive gets one vertex array with two index buffers: the
/// filled triangles and the unique edges used by wireframe materials. Frames
/// arrive sorted back to front; translucent items are blended without writing
/// depth.
#[derive(Debug)]
#[must_use = "call `delete(gl)` before dropping to avoid GPU resource leaks"]
pub struct SceneRenderer {
    gpu: GpuResources,
    frame: Frame,
    /// Drawing buffer size in physical pixels.
    size_px: (i32, i32),
}

#[derive(Debug)]
struct GpuResources {
    shader: ShaderProgram,
    meshes: Vec<(Primitive, MeshBuffers)>,
    scene_block: UniformBuffer<SceneUbo>,
    uniforms: Uniforms,
}

#[derive(Debug)]
struct Uniforms {
    model: glow::UniformLocation,
    color: glow::UniformLocation,
    emissive: glow::UniformLocation,
    emissive_intensity: glow::UniformLocation,
    opacity: glow::UniformLocation,
}

#[derive(Debug)]
struct MeshBuffers {
    vao: glow::VertexArray,
    vertices: glow::Buffer,
    triangles: glow::Buffer,
    triangle_count: i32,
    edges: glow::Buffer,
    edge_count: i32,
}

#[derive(Debug, Clone, Copy)]
#[repr(C, align(16))] // std140
struct SceneUbo {
    view_projection: [f32; 16],
    /// xyz camera position, w ambient intensity
    camera_ambient: [f32; 4],
    /// xyz world position, w intensity
    light_position: [[f32; 4]; Lighting::POINT_LIGHTS],
    light_color: [[f32; 4]; Lighting::POINT_LIGHTS],
}

impl UniformBlock for SceneUbo {
    const NAME: &'static str = "SceneUbo";
    const BINDING: u32 = 0;
}

impl SceneUbo {
    fn new(frame: &Frame, camera: &Camera, aspect: f32) -> Self {
        let mut light_position = [[0.0; 4]; Lighting::POINT_LIGHTS];
        let mut light_color = [[0.0; 4]; Lighting::POINT_LIGHTS];
        for (i, light) in frame.lights.iter().take(Lighting::POINT_LIGHTS).enumerate() {
            light_position[i] = light.position.extend(light.intensity).to_array();
            let [r, g, b] = light.color.to_f32();
            light_color[i] = [r, g, b, 1.0];
        }

        Self {
            view_projection: camera.view_projection(aspect).to_cols_array(),
            camera_ambient: camera.position.extend(frame.ambient).to_array(),
            light_position,
            light_color,
        }
    }
}

mod attrib {
    pub const POSITION: u32 = 0;
    pub const NORMAL: u32 = 1;
}

impl GpuResources {
    const VERTEX_GLSL: &'static str = include_str!("../shaders/scene.vert");
    const FRAGMENT_GLSL: &'static str = include_str!("../shaders/scene.frag");

    fn new(
        gl: &glow::Context,
        primitives: &[Primitive],
    ) -> Result<Self, Error> {
        let meshes = primitives
            .iter()
            .map(|&primitive| Ok((primitive, MeshBuffers::new(gl, primitive)?)))
            .collect::<Result<Vec<_>, Error>>()?;

        let shader =
            ShaderProgram::build(gl, Self::VERTEX_GLSL, Self::FRAGMENT_GLSL)?;
        shader.use_program(gl);
        let scene_block = UniformBuffer::attach(gl, &shader)?;

        let uniforms = Uniforms {
            model: shader.uniform_location(gl, "u_model")?,
            color: shader.uniform_location(gl, "u_color")?,
            emissive: shader.uniform_location(gl, "u_emissive")?,
            emissive_intensity: shader.uniform_location(gl, "u_emissive_intensity")?,
            opacity: shader.uniform_location(gl, "u_opacity")?,
        };

        tracing::debug!(meshes = meshes.len(), "scene GPU resources created");

        Ok(Self { shader, meshes, scene_block, uniforms })
    }

    fn mesh(&self, primitive: &Primitive) -> Option<&MeshBuffers> {
        self.meshes.iter().find(|(p, _)| p == primitive).map(|(_, m)| m)
    }

    fn delete(&self, gl: &glow::Context) {
        self.shader.delete(gl);
        self.scene_block.delete(gl);
        self.meshes.iter().for_each(|(_, mesh)| mesh.delete(gl));
    }
}

impl MeshBuffers {
    fn new(gl: &glow::Context, primitive: Primitive) -> Result<Self, Error> {
        let data = primitive.mesh()?;

        let vao =
            unsafe { gl.create_vertex_array() }.map_err(Error::vertex_array_creation_failed)?;
        unsafe { gl.bind_vertex_array(Some(vao)) };

        let vertices = create_buffer(gl, glow::ARRAY_BUFFER, &data.vertices, "vertex")?;
        const STRIDE: i32 = size_of::<Vertex>() as i32;
        enable_vertex_attrib(gl, attrib::POSITION, 3, 0, STRIDE);
        enable_vertex_attrib(gl, attrib::NORMAL, 3, 12, STRIDE);

        let edges = create_buffer(gl, glow::ELEMENT_ARRAY_BUFFER, &data.edges, "edge-index")?;
        // triangles stay bound to the VAO as its default element buffer
        let triangles =
            create_buffer(gl, glow::ELEMENT_ARRAY_BUFFER, &data.triangles, "triangle-index")?;

        unsafe { gl.bind_vertex_array(None) };

        Ok(Self {
            vao,
            vertices,
            triangles,
            triangle_count: data.triangles.len() as i32,
            edges,
            edge_count: data.edges.len() as i32,
        })
    }

    fn delete(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vertices);
            gl.delete_buffer(self.triangles);
            gl.delete_buffer(self.edges);
        }
    }
}

fn create_buffer<T>(
    gl: &glow::Context,
    target: u32,
    data: &[T],
    label: &str,
) -> Result<glow::Buffer, Error> {
    let buffer =
        unsafe { gl.create_buffer() }.map_err(|e| Error::buffer_creation_failed(label, e))?;

    unsafe { gl.bind_buffer(target, Some(buffer)) };
    buffer_upload_array(gl, target, data, glow::STATIC_DRAW);

    Ok(buffer)
}

fn enable_vertex_attrib(gl: &glow::Context, index: u32, size: i32, offset: i32, stride: i32) {
    unsafe {
        gl.enable_vertex_attrib_array(index);
        gl.vertex_attrib_pointer_f32(index, size, glow::FLOAT, false, stride, offset);
    }
}

impl SceneRenderer {
    /// Creates GPU resources for every primitive in `primitives`.
    pub fn new(
        gl: &glow::Context,
        primitives: &[Primitive],
    ) -> Result<Self, Error> {
        Ok(Self {
            gpu: GpuResources::new(gl, primitives)?,
            frame: Frame::default(),
            size_px: (1, 1),
        })
    }

    /// Sets the drawing buffer size in physical pixels.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.size_px = (width.max(1), height.max(1));
    }

    #[must_use]
    pub fn size_px(&self) -> (i32, i32) {
        self.size_px
    }

    /// Stages the next frame and uploads its camera and lights.
    pub fn update(&mut self, gl: &glow::Context, frame: Frame, camera: &Camera) {
        let aspect = self.size_px.0 as f32 / self.size_px.1 as f32;
        self.gpu.scene_block.write(gl, &SceneUbo::new(&frame, camera, aspect));
        self.frame = frame;
    }

    /// Releases every GPU resource.
    pub fn delete(&self, gl: &glow::Context) {
        self.gpu.delete(gl);
    }

    fn draw_item(&self, gl: &glow::Context, model: &Mat4, mesh: &MeshBuffers, wireframe: bool) {
        unsafe {
            gl.uniform_matrix_4_f32_slice(
                Some(&self.gpu.uniforms.model),
                false,
                &model.to_cols_array(),
            );
            gl.bind_vertex_array(Some(mesh.vao));
            if wireframe {
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(mesh.edges));
                gl.draw_elements(glow::LINES, mesh.edge_count, glow::UNSIGNED_SHORT, 0);
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(mesh.triangles));
            } else {
                gl.draw_elements(glow::TRIANGLES, mesh.triangle_count, glow::UNSIGNED_SHORT, 0);
            }
        }
    }
}

impl Drawable for SceneRenderer {
    fn prepare(&self, context: &mut RenderContext) -> Result<(), Error> {
        let gl = context.gl;
        let (w, h) = self.size_px;

        context
            .state
            .viewport(gl, 0, 0, w, h)
            .clear_color(gl, 0.0, 0.0, 0.0, 0.0)
            .depth_test(gl, true)
            .depth_mask(gl, true)
            .blend(gl, true)
            .blend_func(gl, glow::ONE, glow::ONE_MINUS_SRC_ALPHA);

        unsafe { gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT) };

        self.gpu.shader.use_program(gl);
        self.gpu.scene_block.rebind(gl);

        Ok(())
    }

    fn draw(&self, context: &mut RenderContext) {
        let gl = context.gl;
        let uniforms = &self.gpu.uniforms;

        for item in &self.frame.items {
            let Some(mesh) = self.gpu.mesh(&item.primitive) else {
                tracing::warn!(primitive = ?item.primitive, "no mesh uploaded for primitive");
                continue;
            };

            let material = &item.material;
            context.state.depth_mask(gl, !material.is_transparent());

            let [r, g, b] = material.color.to_f32();
            let [er, eg, eb] = material.emissive.to_f32();
            unsafe {
                gl.uniform_3_f32(Some(&uniforms.color), r, g, b);
                gl.uniform_3_f32(Some(&uniforms.emissive), er, eg, eb);
                gl.uniform_1_f32(Some(&uniforms.emissive_intensity), material.emissive_intensity);
                gl.uniform_1_f32(Some(&uniforms.opacity), material.opacity);
            }

            self.draw_item(gl, &item.model, mesh, material.wireframe);
        }
    }

    fn cleanup(&self, context: &mut RenderContext) {
        let gl = context.gl;
        unsafe {
            gl.bind_vertex_array(None);
            gl.use_program(None);
        }
        context.state.reset(gl);
    }
}
