//! Rendering errors

use crate::foundation::collections::TextureHandle;
use crate::render::batch::BatchError;

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while registering or drawing sprites
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A sprite references a texture handle the registry does not know
    #[error("Texture {0:?} is not registered")]
    MissingTexture(TextureHandle),

    /// A batch was drawn before its GPU buffers were created
    #[error("Batch at z-index {z_index} rendered before start()")]
    BatchNotStarted {
        /// Layer of the offending batch
        z_index: i32,
    },

    /// The graphics backend rejected an operation
    #[error("Backend error: {0}")]
    Backend(String),

    /// A batch refused a sprite the allocation policy should have routed elsewhere
    #[error(transparent)]
    Batch(#[from] BatchError),
}
