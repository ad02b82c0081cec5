//! Game object and component model
//!
//! Game objects own a transform, a draw layer and an ordered list of
//! components. Components receive an [`ObjectContext`] on every hook so they
//! can read and move their owner without holding a reference to it.

pub mod component;
pub mod components;
pub mod game_object;

pub use component::{Component, ComponentKind, Inspector, ObjectContext};
pub use game_object::GameObject;
