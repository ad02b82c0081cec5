//! Sprite: a texture reference plus the UV rectangle to sample

use crate::foundation::collections::TextureHandle;
use crate::foundation::math::Vec2;
use crate::render::vertex::{QUAD_CORNERS, VERTICES_PER_QUAD};

/// Texture coordinates covering the whole image, in quad corner order
pub fn full_tex_coords() -> [Vec2; VERTICES_PER_QUAD] {
    QUAD_CORNERS.map(|[u, v]| Vec2::new(u, v))
}

/// Sub-region of a texture (or no texture at all)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    texture: Option<TextureHandle>,
    tex_coords: [Vec2; VERTICES_PER_QUAD],
}

impl Default for Sprite {
    fn default() -> Self {
        Self::untextured()
    }
}

impl Sprite {
    /// Sprite sampling the whole `texture`
    pub fn new(texture: TextureHandle) -> Self {
        Self {
            texture: Some(texture),
            tex_coords: full_tex_coords(),
        }
    }

    /// Sprite sampling a region of `texture`
    ///
    /// `tex_coords` follow the quad corner order: top-right, bottom-right,
    /// bottom-left, top-left.
    pub fn from_region(texture: TextureHandle, tex_coords: [Vec2; VERTICES_PER_QUAD]) -> Self {
        Self {
            texture: Some(texture),
            tex_coords,
        }
    }

    /// Sprite without a texture; only the tint color is drawn
    pub fn untextured() -> Self {
        Self {
            texture: None,
            tex_coords: full_tex_coords(),
        }
    }

    /// Texture handle, if any
    pub fn texture(&self) -> Option<TextureHandle> {
        self.texture
    }

    /// Texture coordinates in quad corner order
    pub fn tex_coords(&self) -> &[Vec2; VERTICES_PER_QUAD] {
        &self.tex_coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untextured_uses_full_coords() {
        let sprite = Sprite::default();
        assert_eq!(sprite.texture(), None);
        assert_eq!(
            sprite.tex_coords(),
            &[Vec2::new(1.0, 1.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0)]
        );
    }
}
