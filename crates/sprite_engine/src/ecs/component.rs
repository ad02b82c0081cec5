//! Component trait and the context components see during lifecycle hooks

use crate::ecs::components::SpriteRenderer;
use crate::foundation::math::Transform;

/// Capability tag used to look components up on a game object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// [`SpriteRenderer`]
    SpriteRenderer,
    /// Application-defined component
    Custom(&'static str),
}

/// View of the owning game object handed to every component hook
///
/// Components never store a pointer to their owner; they get this borrow
/// for the duration of a single call instead.
#[derive(Debug)]
pub struct ObjectContext<'a> {
    /// Owner's name
    pub name: &'a str,
    /// Owner's draw layer
    pub z_index: i32,
    /// Owner's transform, writable
    pub transform: &'a mut Transform,
}

/// Debug UI collaborator used by [`Component::inspect`]
pub trait Inspector {
    /// Show an RGBA color picker; returns `true` if the user changed the value
    fn color_edit(&mut self, label: &str, rgba: &mut [f32; 4]) -> bool;

    /// Show a plain text line
    fn label(&mut self, _text: &str) {}
}

/// Behaviour attached to a [`GameObject`](crate::ecs::GameObject)
pub trait Component: 'static {
    /// Capability of this component
    fn kind(&self) -> ComponentKind;

    /// Called once when the owning object goes live, before any `update`
    fn start(&mut self, _owner: &mut ObjectContext<'_>) {}

    /// Called every frame while the owning object is live
    fn update(&mut self, _dt: f32, _owner: &mut ObjectContext<'_>) {}

    /// Debug inspection hook
    fn inspect(&mut self, _inspector: &mut dyn Inspector) {}

    /// Typed access for the sprite-drawing capability
    fn as_sprite_renderer(&self) -> Option<&SpriteRenderer> {
        None
    }

    /// Mutable typed access for the sprite-drawing capability
    fn as_sprite_renderer_mut(&mut self) -> Option<&mut SpriteRenderer> {
        None
    }
}
