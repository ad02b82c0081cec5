//! Scene management
//!
//! A [`Scene`] owns the game objects of one level, the renderer batching
//! their sprites and the camera. The [`SceneManager`] swaps scenes built by
//! [`SceneLoader`] implementations.

pub mod error;
#[allow(clippy::module_inception)]
pub mod scene;
pub mod scene_manager;

pub use error::{SceneError, SceneResult};
pub use scene::{Scene, SceneState};
pub use scene_manager::{SceneLoader, SceneManager};
