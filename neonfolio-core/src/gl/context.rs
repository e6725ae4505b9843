use glow::HasContext;

/// Shadow copy of the fixed-function state the scene pass changes.
///
/// Setters compare against the shadow and only reach GL on a change, so a
/// pass can restate its whole setup every frame. Vertex attribute state lives
/// in the vertex arrays and is not tracked here.
#[derive(Debug)]
pub struct GlState {
    viewport: [i32; 4],
    clear_color: [f32; 4],
    blend: Toggle,
    blend_func: (u32, u32),
    depth_test: Toggle,
    depth_mask: bool,
}

/// An enable/disable capability and its last known setting.
#[derive(Debug, Clone, Copy)]
struct Toggle {
    capability: u32,
    enabled: bool,
}

impl Toggle {
    const fn off(capability: u32) -> Self {
        Self { capability, enabled: false }
    }

    fn set(&mut self, gl: &glow::Context, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        unsafe {
            if enabled {
                gl.enable(self.capability);
            } else {
                gl.disable(self.capability);
            }
        }
        self.enabled = enabled;
    }
}

impl Default for GlState {
    fn default() -> Self {
        Self::new()
    }
}

impl GlState {
    /// Matches the defaults of a freshly created context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            viewport: [0; 4],
            clear_color: [0.0; 4],
            blend: Toggle::off(glow::BLEND),
            blend_func: (glow::ONE, glow::ZERO),
            depth_test: Toggle::off(glow::DEPTH_TEST),
            depth_mask: true,
        }
    }

    pub fn viewport(
        &mut self,
        gl: &glow::Context,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> &mut Self {
        let viewport = [x, y, width, height];
        if self.viewport != viewport {
            unsafe { gl.viewport(x, y, width, height) };
            self.viewport = viewport;
        }
        self
    }

    pub fn clear_color(&mut self, gl: &glow::Context, r: f32, g: f32, b: f32, a: f32) -> &mut Self {
        let color = [r, g, b, a];
        if self.clear_color != color {
            unsafe { gl.clear_color(r, g, b, a) };
            self.clear_color = color;
        }
        self
    }

    pub fn blend(&mut self, gl: &glow::Context, enable: bool) -> &mut Self {
        self.blend.set(gl, enable);
        self
    }

    pub fn blend_func(&mut self, gl: &glow::Context, src: u32, dst: u32) -> &mut Self {
        if self.blend_func != (src, dst) {
            unsafe { gl.blend_func(src, dst) };
            self.blend_func = (src, dst);
        }
        self
    }

    pub fn depth_test(&mut self, gl: &glow::Context, enable: bool) -> &mut Self {
        self.depth_test.set(gl, enable);
        self
    }

    /// Enables or disables depth writes; translucent items draw without them.
    pub fn depth_mask(&mut self, gl: &glow::Context, write: bool) -> &mut Self {
        if self.depth_mask != write {
            unsafe { gl.depth_mask(write) };
            self.depth_mask = write;
        }
        self
    }

    /// Returns blending and depth to the context defaults.
    ///
    /// Viewport and clear color follow the canvas and are left alone.
    pub fn reset(&mut self, gl: &glow::Context) {
        self.blend(gl, false)
            .blend_func(gl, glow::ONE, glow::ZERO)
            .depth_test(gl, false)
            .depth_mask(gl, true);
    }
}
