//! # Sprite Engine
//!
//! The sprite batching core of a 2D scene-graph engine.
//!
//! ## Features
//!
//! - **Game objects and components**: transforms, z-layers and ordered component lists
//! - **Batched sprite rendering**: one draw call per z-layer batch of up to 1000 sprites
//! - **Dirty tracking**: only sprites that moved, recolored or re-textured are rebuilt
//! - **Pluggable GPU backend**: buffer, shader and texture traits plus a headless recorder
//!
//! ## Quick Start
//!
//! ```rust
//! use sprite_engine::prelude::*;
//!
//! let (mut ctx, log) = GraphicsContext::headless();
//! let mut scene = Scene::default();
//!
//! let quad = GameObject::new("quad", Transform::new(Vec2::new(100.0, 100.0), Vec2::new(64.0, 64.0)), 0)
//!     .with_component(SpriteRenderer::from_color(Vec4::new(1.0, 0.0, 0.0, 1.0)));
//! scene.add_game_object(quad, &mut ctx)?;
//! scene.start(&mut ctx)?;
//!
//! let stats = scene.update(1.0 / 60.0, &mut ctx)?;
//! assert_eq!(stats.draw_calls, 1);
//! assert_eq!(log.draws().len(), 1);
//! # Ok::<(), sprite_engine::scene::SceneError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod ecs;
pub mod foundation;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, EngineConfig},
        ecs::{components::SpriteRenderer, Component, ComponentKind, GameObject, Inspector, ObjectContext},
        foundation::{
            collections::{GameObjectId, TextureHandle},
            math::{color, Transform, Vec2, Vec4},
            time::Timer,
        },
        render::{
            Camera, CameraConfig, GraphicsContext, RenderStats, Renderer, RendererConfig, Sprite, Spritesheet,
            Texture,
        },
        scene::{Scene, SceneLoader, SceneManager},
    };
}
