//! Scene Manager
//!
//! Holds the current [`Scene`] and the [`SceneLoader`] that built it.
//! Switching scenes builds a fresh scene from the engine configuration, lets
//! the loader populate it and starts it before the old one is dropped.

use crate::config::EngineConfig;
use crate::render::{GraphicsContext, RenderStats};
use crate::scene::{Scene, SceneResult};

/// Scene-specific population and per-frame logic
pub trait SceneLoader {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Add the scene's game objects, textures and camera setup
    fn init(&mut self, scene: &mut Scene, ctx: &mut GraphicsContext) -> SceneResult<()>;

    /// Called every frame before the scene updates its objects
    fn update(&mut self, _scene: &mut Scene, _dt: f32) {}
}

struct CurrentScene {
    loader: Box<dyn SceneLoader>,
    scene: Scene,
}

/// Owner of the current scene
pub struct SceneManager {
    config: EngineConfig,
    current: Option<CurrentScene>,
}

impl SceneManager {
    /// Create a manager without a scene
    pub fn new(config: EngineConfig) -> Self {
        Self { config, current: None }
    }

    /// Build, populate and start a scene with `loader`, then make it current
    ///
    /// On failure the previous scene stays current.
    pub fn load_scene(
        &mut self,
        loader: impl SceneLoader + 'static,
        ctx: &mut GraphicsContext,
    ) -> SceneResult<()> {
        let mut loader: Box<dyn SceneLoader> = Box::new(loader);
        let mut scene = Scene::from_config(&self.config);
        scene.init(loader.as_mut(), ctx)?;
        scene.start(ctx)?;

        log::info!("Switched to scene '{}'", loader.name());
        self.current = Some(CurrentScene { loader, scene });
        Ok(())
    }

    /// Run one frame of the current scene
    ///
    /// Returns `None` if no scene is loaded.
    pub fn update(&mut self, dt: f32, ctx: &mut GraphicsContext) -> SceneResult<Option<RenderStats>> {
        let Some(current) = self.current.as_mut() else {
            return Ok(None);
        };
        current.loader.update(&mut current.scene, dt);
        current.scene.update(dt, ctx).map(Some)
    }

    /// Current scene
    pub fn current_scene(&self) -> Option<&Scene> {
        self.current.as_ref().map(|current| &current.scene)
    }

    /// Current scene, mutably
    pub fn current_scene_mut(&mut self) -> Option<&mut Scene> {
        self.current.as_mut().map(|current| &mut current.scene)
    }

    /// Name of the current scene's loader
    pub fn current_scene_name(&self) -> Option<&str> {
        self.current.as_ref().map(|current| current.loader.name())
    }

    /// Engine settings new scenes are built from
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::SpriteRenderer;
    use crate::ecs::GameObject;
    use crate::scene::SceneError;

    struct Level {
        name: &'static str,
        sprites: usize,
        fail: bool,
    }

    impl SceneLoader for Level {
        fn name(&self) -> &str {
            self.name
        }

        fn init(&mut self, scene: &mut Scene, ctx: &mut GraphicsContext) -> SceneResult<()> {
            if self.fail {
                return Err(SceneError::Loader { name: self.name.to_string(), reason: "broken".to_string() });
            }
            for i in 0..self.sprites {
                let object = GameObject::named(format!("s{i}")).with_component(SpriteRenderer::default());
                scene.add_game_object(object, ctx)?;
            }
            Ok(())
        }

        fn update(&mut self, scene: &mut Scene, dt: f32) {
            let position = scene.camera().position();
            scene.camera_mut().set_position(position + crate::foundation::math::Vec2::new(dt, 0.0));
        }
    }

    #[test]
    fn test_update_without_scene() {
        let (mut ctx, _log) = GraphicsContext::headless();
        let mut manager = SceneManager::new(EngineConfig::default());
        assert!(manager.update(0.016, &mut ctx).unwrap().is_none());
        assert!(manager.current_scene().is_none());
    }

    #[test]
    fn test_load_scene_starts_it() {
        let (mut ctx, _log) = GraphicsContext::headless();
        let mut manager = SceneManager::new(EngineConfig::default());
        manager.load_scene(Level { name: "editor", sprites: 4, fail: false }, &mut ctx).unwrap();

        assert_eq!(manager.current_scene_name(), Some("editor"));
        assert!(manager.current_scene().unwrap().is_running());

        let stats = manager.update(0.5, &mut ctx).unwrap().unwrap();
        assert_eq!(stats.sprites_drawn, 4);
        assert_eq!(manager.current_scene().unwrap().camera().position().x, 0.5);
    }

    #[test]
    fn test_failed_load_keeps_previous_scene() {
        let (mut ctx, _log) = GraphicsContext::headless();
        let mut manager = SceneManager::new(EngineConfig::default());
        manager.load_scene(Level { name: "first", sprites: 1, fail: false }, &mut ctx).unwrap();

        let result = manager.load_scene(Level { name: "second", sprites: 0, fail: true }, &mut ctx);
        assert!(matches!(result, Err(SceneError::Loader { .. })));
        assert_eq!(manager.current_scene_name(), Some("first"));
    }
}
