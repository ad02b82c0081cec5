//! Sprite rendering
//!
//! Turns the sprite renderers of live game objects into as few draw calls as
//! possible. The [`Renderer`] assigns each sprite to a [`RenderBatch`] by
//! z-layer and texture budget; every frame each batch rebuilds only its dirty
//! slots and issues one indexed draw.
//!
//! GPU access goes through the traits in [`backends`], [`shader`] and
//! [`texture`], bundled into a [`GraphicsContext`].

pub mod backends;
pub mod batch;
pub mod camera;
pub mod config;
pub mod context;
pub mod error;
pub mod renderer;
pub mod shader;
pub mod sprite;
pub mod spritesheet;
pub mod stats;
pub mod texture;
pub mod vertex;

pub use backends::{BufferId, RenderBackend};
pub use batch::{BatchError, BatchResult, RenderBatch};
pub use camera::{Camera, CameraConfig};
pub use config::{RendererConfig, DEFAULT_MAX_BATCH_SIZE, DEFAULT_MAX_TEXTURE_SLOTS};
pub use context::GraphicsContext;
pub use error::{RenderError, RenderResult};
pub use renderer::Renderer;
pub use shader::Shader;
pub use sprite::Sprite;
pub use spritesheet::Spritesheet;
pub use stats::{BatchRenderStats, RenderStats};
pub use texture::{Texture, TextureRegistry};
pub use vertex::{SpriteVertex, INDICES_PER_QUAD, VERTEX_SIZE, VERTEX_SIZE_BYTES, VERTICES_PER_QUAD};

pub use crate::foundation::collections::TextureHandle;
