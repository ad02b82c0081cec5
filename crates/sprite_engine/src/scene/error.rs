//! Scene errors

use crate::render::RenderError;

/// Result type for scene operations
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors that can occur while building or running a scene
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// `init` was called on a scene that is already initialized
    #[error("Scene is already initialized")]
    AlreadyInitialized,

    /// `start` was called on a running scene
    #[error("Scene is already running")]
    AlreadyRunning,

    /// Registration or rendering failed
    #[error(transparent)]
    Render(#[from] RenderError),

    /// A scene loader failed to populate the scene
    #[error("Scene loader '{name}' failed: {reason}")]
    Loader {
        /// Loader name
        name: String,
        /// Failure description
        reason: String,
    },
}
