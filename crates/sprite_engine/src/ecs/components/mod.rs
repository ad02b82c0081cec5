//! Built-in components

pub mod sprite_renderer;

pub use sprite_renderer::{DirtyFlags, SpriteRenderer};
