//! Texture collaborator and registry
//!
//! Image decoding and GPU upload happen outside this crate. The engine only
//! needs a bound-texture object that can report its pixel size and bind
//! itself to a texture unit, plus a stable identity to key batch slots on.

use crate::foundation::collections::{SlotMap, TextureHandle};
use crate::render::{RenderError, RenderResult};

/// A texture already resident on the GPU
pub trait Texture {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Bind to texture unit `unit`
    fn bind(&self, unit: u32);

    /// Unbind from texture unit `unit`
    fn unbind(&self, unit: u32);

    /// Human-readable name for logs
    fn label(&self) -> &str {
        "texture"
    }
}

/// Owns every texture the renderer can reference, keyed by [`TextureHandle`]
#[derive(Default)]
pub struct TextureRegistry {
    textures: SlotMap<TextureHandle, Box<dyn Texture>>,
}

impl TextureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture and return its handle
    pub fn insert(&mut self, texture: impl Texture + 'static) -> TextureHandle {
        let label = texture.label().to_string();
        let handle = self.textures.insert(Box::new(texture));
        log::debug!("Registered texture '{}' as {:?}", label, handle);
        handle
    }

    /// Look up a texture
    pub fn get(&self, handle: TextureHandle) -> Option<&dyn Texture> {
        self.textures.get(handle).map(|texture| &**texture)
    }

    /// Look up a texture, failing with [`RenderError::MissingTexture`]
    pub fn require(&self, handle: TextureHandle) -> RenderResult<&dyn Texture> {
        self.get(handle).ok_or(RenderError::MissingTexture(handle))
    }

    /// Whether `handle` refers to a registered texture
    pub fn contains(&self, handle: TextureHandle) -> bool {
        self.textures.contains_key(handle)
    }

    /// Pixel size of a registered texture
    pub fn size(&self, handle: TextureHandle) -> Option<(u32, u32)> {
        self.get(handle).map(|t| (t.width(), t.height()))
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::backends::headless::{CommandLog, HeadlessTexture};

    #[test]
    fn test_insert_and_lookup() {
        let log = CommandLog::new();
        let mut registry = TextureRegistry::new();
        let handle = registry.insert(HeadlessTexture::new("atlas", 256, 128, log));

        assert!(registry.contains(handle));
        assert_eq!(registry.size(handle), Some((256, 128)));
        assert_eq!(registry.require(handle).unwrap().label(), "atlas");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_foreign_handle_is_missing() {
        let log = CommandLog::new();
        let mut other = TextureRegistry::new();
        let foreign = other.insert(HeadlessTexture::new("foreign", 1, 1, log));

        let registry = TextureRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(registry.require(foreign), Err(RenderError::MissingTexture(h)) if h == foreign));
    }
}
