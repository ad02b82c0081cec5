//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a [`GameObject`](crate::ecs::GameObject) stored in a scene arena
    ///
    /// Render batches hold these instead of references, so ownership of every
    /// game object stays with the scene.
    pub struct GameObjectId;

    /// Stable handle to a texture registered in a
    /// [`TextureRegistry`](crate::render::TextureRegistry)
    ///
    /// The handle is the texture's identity: two sprites share a texture slot
    /// exactly when their handles compare equal.
    pub struct TextureHandle;
}
