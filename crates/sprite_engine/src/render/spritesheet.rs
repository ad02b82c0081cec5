//! Spritesheet slicing for texture atlases

use crate::foundation::collections::TextureHandle;
use crate::foundation::math::Vec2;
use crate::render::{RenderResult, Sprite, TextureRegistry};

/// Equally sized sprites cut from one atlas texture
///
/// Sprites are numbered left-to-right, top-to-bottom, starting from the
/// top-left corner of the image.
#[derive(Debug, Clone)]
pub struct Spritesheet {
    texture: TextureHandle,
    sprites: Vec<Sprite>,
}

impl Spritesheet {
    /// Slice `num_sprites` cells of `sprite_width` x `sprite_height` pixels
    /// separated by `spacing` pixels out of a `texture_size` image
    pub fn new(
        texture: TextureHandle,
        texture_size: (u32, u32),
        sprite_width: u32,
        sprite_height: u32,
        num_sprites: usize,
        spacing: u32,
    ) -> Self {
        let (width, height) = (texture_size.0 as f32, texture_size.1 as f32);
        let (cell_w, cell_h, gap) = (sprite_width as f32, sprite_height as f32, spacing as f32);

        let mut sprites = Vec::with_capacity(num_sprites);
        let mut current_x = 0.0;
        let mut current_y = height - cell_h;

        for _ in 0..num_sprites {
            let top = (current_y + cell_h) / height;
            let right = (current_x + cell_w) / width;
            let left = current_x / width;
            let bottom = current_y / height;

            sprites.push(Sprite::from_region(
                texture,
                [
                    Vec2::new(right, top),
                    Vec2::new(right, bottom),
                    Vec2::new(left, bottom),
                    Vec2::new(left, top),
                ],
            ));

            current_x += cell_w + gap;
            if current_x >= width {
                current_x = 0.0;
                current_y -= cell_h + gap;
            }
        }

        Self { texture, sprites }
    }

    /// Slice a texture already in `registry`, reading its pixel size from there
    pub fn from_registry(
        registry: &TextureRegistry,
        texture: TextureHandle,
        sprite_width: u32,
        sprite_height: u32,
        num_sprites: usize,
        spacing: u32,
    ) -> RenderResult<Self> {
        let atlas = registry.require(texture)?;
        Ok(Self::new(
            texture,
            (atlas.width(), atlas.height()),
            sprite_width,
            sprite_height,
            num_sprites,
            spacing,
        ))
    }

    /// Sprite at `index`
    pub fn sprite(&self, index: usize) -> Option<Sprite> {
        self.sprites.get(index).copied()
    }

    /// Atlas texture
    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    /// Number of sprites in the sheet
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Whether the sheet has no sprites
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
