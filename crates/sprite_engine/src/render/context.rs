//! Graphics context passed explicitly to every subsystem that touches the GPU

use crate::foundation::collections::TextureHandle;
use crate::render::backends::headless::{CommandLog, HeadlessBackend, HeadlessShader};
use crate::render::backends::RenderBackend;
use crate::render::{Shader, Texture, TextureRegistry};

/// Backend, sprite shader and texture registry for one rendering surface
///
/// Constructed by the application once its window and GL/Vulkan context
/// exist, then lent to the scene for start-up, registration and per-frame
/// rendering.
pub struct GraphicsContext {
    /// Buffer and draw plumbing
    pub backend: Box<dyn RenderBackend>,
    /// Shader shared by every sprite batch
    pub shader: Box<dyn Shader>,
    /// Textures sprites may reference
    pub textures: TextureRegistry,
}

impl GraphicsContext {
    /// Create a context with an empty texture registry
    pub fn new(backend: impl RenderBackend + 'static, shader: impl Shader + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            shader: Box::new(shader),
            textures: TextureRegistry::new(),
        }
    }

    /// Create a GPU-less context and the log its collaborators write to
    pub fn headless() -> (Self, CommandLog) {
        let log = CommandLog::new();
        let context = Self::new(HeadlessBackend::new(log.clone()), HeadlessShader::new(log.clone()));
        (context, log)
    }

    /// Register a texture with this context
    pub fn register_texture(&mut self, texture: impl Texture + 'static) -> TextureHandle {
        self.textures.insert(texture)
    }
}
