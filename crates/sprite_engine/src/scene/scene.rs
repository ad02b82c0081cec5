//! # Scene
//!
//! Owns the game objects of one level together with the [`Renderer`] that
//! batches their sprites and the [`Camera`] they are viewed through.
//!
//! ## Lifecycle
//!
//! ```text
//! Constructed --init()--> Initialized --start()--> Running
//! ```
//!
//! Objects added before `start` are started and registered with the renderer
//! when the scene starts. Once running, a newly added object is started and
//! registered immediately.

use crate::config::EngineConfig;
use crate::ecs::{GameObject, Inspector};
use crate::foundation::collections::{GameObjectId, SlotMap};
use crate::foundation::math::Vec2;
use crate::render::{Camera, GraphicsContext, RenderStats, Renderer, RendererConfig};
use crate::scene::{SceneError, SceneLoader, SceneResult};

/// Lifecycle state of a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneState {
    /// Created, not yet populated
    Constructed,
    /// Populated by a loader, not yet started
    Initialized,
    /// Started; objects are updated and drawn every frame
    Running,
}

/// Game objects, renderer and camera of one level
#[derive(Debug)]
pub struct Scene {
    objects: SlotMap<GameObjectId, GameObject>,
    order: Vec<GameObjectId>,
    renderer: Renderer,
    camera: Camera,
    state: SceneState,
    active: Option<GameObjectId>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(RendererConfig::default(), Camera::default())
    }
}

impl Scene {
    /// Create an empty scene
    pub fn new(renderer_config: RendererConfig, camera: Camera) -> Self {
        Self {
            objects: SlotMap::with_key(),
            order: Vec::new(),
            renderer: Renderer::with_config(renderer_config),
            camera,
            state: SceneState::Constructed,
            active: None,
        }
    }

    /// Create an empty scene from engine settings, camera at the origin
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.renderer.clone(), Camera::with_config(Vec2::zeros(), config.camera))
    }

    /// Populate the scene with `loader`; allowed exactly once
    pub fn init(&mut self, loader: &mut dyn SceneLoader, ctx: &mut GraphicsContext) -> SceneResult<()> {
        if self.state != SceneState::Constructed {
            return Err(SceneError::AlreadyInitialized);
        }
        loader.init(self, ctx)?;
        self.state = SceneState::Initialized;
        log::info!("Scene '{}' initialized with {} objects", loader.name(), self.order.len());
        Ok(())
    }

    /// Start every object, register each with the renderer and go live
    ///
    /// An object whose registration fails is removed from the scene and
    /// the remaining objects are still started. The removed objects' names
    /// are returned.
    pub fn start(&mut self, ctx: &mut GraphicsContext) -> SceneResult<Vec<String>> {
        if self.state == SceneState::Running {
            return Err(SceneError::AlreadyRunning);
        }

        let mut rejected = Vec::new();
        for &id in &self.order {
            let Some(object) = self.objects.get_mut(id) else {
                continue;
            };
            object.start();
            if let Err(err) = self.renderer.add(id, object, ctx) {
                log::error!("Dropping '{}' from scene: {}", object.name(), err);
                rejected.push(id);
            }
        }

        let mut removed = Vec::with_capacity(rejected.len());
        for id in rejected {
            if let Some(object) = self.objects.remove(id) {
                removed.push(object.name().to_string());
            }
            if self.active == Some(id) {
                self.active = None;
            }
        }
        let objects = &self.objects;
        self.order.retain(|&id| objects.contains_key(id));

        self.state = SceneState::Running;
        log::info!(
            "Scene started: {} objects in {} batches",
            self.order.len(),
            self.renderer.batch_count()
        );
        Ok(removed)
    }

    /// Add an object to the scene
    ///
    /// While running, the object is started and registered right away; if
    /// registration fails it is removed again and the error returned.
    pub fn add_game_object(
        &mut self,
        object: GameObject,
        ctx: &mut GraphicsContext,
    ) -> SceneResult<GameObjectId> {
        let id = self.objects.insert(object);
        self.order.push(id);
        if self.state != SceneState::Running {
            return Ok(id);
        }

        let object = &mut self.objects[id];
        object.start();
        if let Err(err) = self.renderer.add(id, object, ctx) {
            self.objects.remove(id);
            self.order.pop();
            return Err(err.into());
        }
        Ok(id)
    }

    /// Update every object in insertion order, then render all batches
    ///
    /// Does nothing until the scene has been started.
    pub fn update(&mut self, dt: f32, ctx: &mut GraphicsContext) -> SceneResult<RenderStats> {
        if !self.is_running() {
            log::trace!("Skipping update of a scene that is not running");
            return Ok(RenderStats::default());
        }
        for &id in &self.order {
            if let Some(object) = self.objects.get_mut(id) {
                object.update(dt);
            }
        }
        Ok(self.renderer.render(&mut self.objects, ctx, &self.camera)?)
    }

    /// Make `id` the object shown by [`inspect_active`](Self::inspect_active)
    pub fn set_active_game_object(&mut self, id: Option<GameObjectId>) {
        self.active = id.filter(|id| self.objects.contains_key(*id));
    }

    /// Object currently selected for inspection
    pub fn active_game_object(&self) -> Option<GameObjectId> {
        self.active
    }

    /// Run the inspection hook of the active object
    ///
    /// Returns `false` if no object is active.
    pub fn inspect_active(&mut self, inspector: &mut dyn Inspector) -> bool {
        match self.active.and_then(|id| self.objects.get_mut(id)) {
            Some(object) => {
                object.inspect(inspector);
                true
            }
            None => false,
        }
    }

    /// Object by handle
    pub fn get(&self, id: GameObjectId) -> Option<&GameObject> {
        self.objects.get(id)
    }

    /// Object by handle, mutably
    pub fn get_mut(&mut self, id: GameObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(id)
    }

    /// First object named `name`, in insertion order
    pub fn find_by_name(&self, name: &str) -> Option<GameObjectId> {
        self.order
            .iter()
            .copied()
            .find(|&id| self.objects.get(id).is_some_and(|object| object.name() == name))
    }

    /// Object handles in insertion order
    pub fn game_objects(&self) -> &[GameObjectId] {
        &self.order
    }

    /// Number of objects
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the scene holds no objects
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Scene camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Scene camera, mutably
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Batch renderer
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Lifecycle state
    pub fn state(&self) -> SceneState {
        self.state
    }

    /// Whether the scene has been started
    pub fn is_running(&self) -> bool {
        self.state == SceneState::Running
    }
}
