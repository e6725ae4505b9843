/// Error categories for the core animation and rendering engine.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Shader compilation, linking, or program creation errors.
    #[error("Shader error: {0}")]
    Shader(String),

    /// GL resource creation or management errors.
    #[error("Resource error: {0}")]
    Resource(String),

    /// Scene construction or per-frame evaluation errors.
    #[error("Scene error: {0}")]
    Scene(String),

    /// Contact form validation and submission errors.
    #[error("Form error: {0}")]
    Form(String),
}

impl Error {
    // Shader errors
    pub(crate) fn shader_creation_failed(detail: &str) -> Self {
        Self::Shader(format!("Shader creation failed: {detail}"))
    }

    pub(crate) fn shader_compile_failed(stage: &str, log: String) -> Self {
        Self::Shader(format!("{stage} shader failed to compile: {log}"))
    }

    pub(crate) fn shader_program_creation_failed() -> Self {
        Self::Shader("Shader program creation failed".to_string())
    }

    pub(crate) fn shader_link_failed(log: String) -> Self {
        Self::Shader(format!("Shader linking failed: {log}"))
    }

    // Resource errors
    pub(crate) fn buffer_creation_failed(buffer_type: &str, detail: String) -> Self {
        Self::Resource(format!("Failed to create {buffer_type} buffer: {detail}"))
    }

    pub(crate) fn vertex_array_creation_failed(detail: String) -> Self {
        Self::Resource(format!("Failed to create vertex array object: {detail}"))
    }

    pub(crate) fn uniform_location_failed(name: &str) -> Self {
        Self::Resource(format!("Failed to get uniform location: {name}"))
    }

    // Scene errors
    pub(crate) fn index_overflow(vertices: usize) -> Self {
        Self::Scene(format!("mesh with {vertices} vertices exceeds u16 indices"))
    }

    /// The drawing surface was lost and the scene can no longer render.
    #[must_use]
    pub fn context_lost() -> Self {
        Self::Scene("rendering context lost".to_string())
    }

    // Form errors
    pub(crate) fn missing_field(field: &str) -> Self {
        Self::Form(format!("{field} is required"))
    }

    pub(crate) fn invalid_email(email: &str) -> Self {
        Self::Form(format!("not a valid email address: {email}"))
    }

    pub(crate) fn already_submitting() -> Self {
        Self::Form("a submission is already in flight".to_string())
    }
}
