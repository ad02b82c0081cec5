//! Game object: a named, layered transform carrying an ordered component list

use std::fmt;

use crate::ecs::components::SpriteRenderer;
use crate::ecs::{Component, ComponentKind, Inspector, ObjectContext};
use crate::foundation::math::Transform;

/// Entity of the scene graph
///
/// Components run in insertion order. Hooks borrow the component list and
/// the transform separately, so a component may move its owner but cannot
/// add or remove components while the list is being iterated.
pub struct GameObject {
    name: String,
    transform: Transform,
    z_index: i32,
    components: Vec<Box<dyn Component>>,
    started: bool,
}

impl GameObject {
    /// Create a game object on layer `z_index`
    pub fn new(name: impl Into<String>, transform: Transform, z_index: i32) -> Self {
        Self {
            name: name.into(),
            transform,
            z_index,
            components: Vec::new(),
            started: false,
        }
    }

    /// Create a game object with a default transform on layer 0
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Transform::default(), 0)
    }

    /// Builder pattern: append a component
    pub fn with_component(mut self, component: impl Component) -> Self {
        self.add_component(component);
        self
    }

    /// Append a component; it runs after every existing component
    pub fn add_component(&mut self, component: impl Component) {
        self.components.push(Box::new(component));
    }

    /// First component with capability `kind`
    pub fn get_component(&self, kind: ComponentKind) -> Option<&dyn Component> {
        self.components
            .iter()
            .find(|c| c.kind() == kind)
            .map(|c| &**c)
    }

    /// First component with capability `kind`, mutably
    pub fn get_component_mut(&mut self, kind: ComponentKind) -> Option<&mut dyn Component> {
        match self.components.iter_mut().find(|c| c.kind() == kind) {
            Some(c) => Some(&mut **c),
            None => None,
        }
    }

    /// Whether any component has capability `kind`
    pub fn has_component(&self, kind: ComponentKind) -> bool {
        self.components.iter().any(|c| c.kind() == kind)
    }

    /// Remove the last component with capability `kind`
    ///
    /// Returns whether a component was removed.
    pub fn remove_component(&mut self, kind: ComponentKind) -> bool {
        match self.components.iter().rposition(|c| c.kind() == kind) {
            Some(index) => {
                self.components.remove(index);
                true
            }
            None => false,
        }
    }

    /// The sprite renderer, if the object draws anything
    pub fn sprite_renderer(&self) -> Option<&SpriteRenderer> {
        self.components.iter().find_map(|c| c.as_sprite_renderer())
    }

    /// The sprite renderer, mutably
    pub fn sprite_renderer_mut(&mut self) -> Option<&mut SpriteRenderer> {
        self.components.iter_mut().find_map(|c| c.as_sprite_renderer_mut())
    }

    /// Current transform together with the sprite renderer
    ///
    /// This is what a render batch needs to rebuild a slot.
    pub fn sprite_render_state_mut(&mut self) -> Option<(Transform, &mut SpriteRenderer)> {
        let transform = self.transform;
        self.sprite_renderer_mut().map(|sprite| (transform, sprite))
    }

    /// Run every component's `start` hook; later calls do nothing
    pub fn start(&mut self) {
        if self.started {
            log::warn!("'{}' started twice; ignoring", self.name);
            return;
        }
        self.started = true;

        let Self { name, transform, z_index, components, .. } = self;
        let mut owner = ObjectContext { name: name.as_str(), z_index: *z_index, transform };
        for component in components.iter_mut() {
            component.start(&mut owner);
        }
    }

    /// Run every component's `update` hook in insertion order
    pub fn update(&mut self, dt: f32) {
        let Self { name, transform, z_index, components, .. } = self;
        let mut owner = ObjectContext { name: name.as_str(), z_index: *z_index, transform };
        for component in components.iter_mut() {
            component.update(dt, &mut owner);
        }
    }

    /// Forward the debug inspection hook to every component
    pub fn inspect(&mut self, inspector: &mut dyn Inspector) {
        inspector.label(&self.name);
        for component in &mut self.components {
            component.inspect(inspector);
        }
    }

    /// Object name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current transform
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable transform; sprite renderers pick up changes on the next `update`
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Draw layer
    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    /// Whether `start` has run
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Number of attached components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

impl fmt::Debug for GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<ComponentKind> = self.components.iter().map(|c| c.kind()).collect();
        f.debug_struct("GameObject")
            .field("name", &self.name)
            .field("transform", &self.transform)
            .field("z_index", &self.z_index)
            .field("components", &kinds)
            .field("started", &self.started)
            .finish()
    }
}
