//! Sprite renderer component
//!
//! Holds the tint color and the [`Sprite`] of a game object and tracks
//! whether its vertices need to be rebuilt by the batch that owns its slot.
//!
//! The flag is raised by construction, by color or sprite changes, and by
//! the owner's transform drifting away from the last snapshot taken in
//! `update`. Only the render batch clears it, right after copying fresh
//! vertex data.

use bitflags::bitflags;

use crate::ecs::{Component, ComponentKind, Inspector, ObjectContext};
use crate::foundation::collections::TextureHandle;
use crate::foundation::math::{color, Transform, Vec2, Vec4};
use crate::render::Sprite;

bitflags! {
    /// Reasons the sprite's vertices are stale
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirtyFlags: u8 {
        /// Owner moved or was rescaled
        const TRANSFORM = 1 << 0;
        /// Tint color changed
        const COLOR = 1 << 1;
        /// Texture or UV region changed
        const SPRITE = 1 << 2;
        /// Never consumed by a batch
        const CREATED = 1 << 3;
    }
}

/// Component that draws its owner as a textured or solid-color quad
#[derive(Debug, Clone)]
pub struct SpriteRenderer {
    color: Vec4,
    sprite: Sprite,
    dirty: DirtyFlags,
    last_transform: Option<Transform>,
}

impl Default for SpriteRenderer {
    fn default() -> Self {
        Self::from_color(color::white())
    }
}

impl SpriteRenderer {
    /// Solid-color quad without a texture
    pub fn from_color(color: Vec4) -> Self {
        Self {
            color,
            sprite: Sprite::untextured(),
            dirty: DirtyFlags::CREATED,
            last_transform: None,
        }
    }

    /// Textured quad with a white tint
    pub fn from_sprite(sprite: Sprite) -> Self {
        Self {
            sprite,
            ..Self::default()
        }
    }

    /// Tint color (RGBA in `[0, 1]`)
    pub fn color(&self) -> Vec4 {
        self.color
    }

    /// Current sprite
    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Texture of the current sprite, if any
    pub fn texture(&self) -> Option<TextureHandle> {
        self.sprite.texture()
    }

    /// UVs of the current sprite in quad corner order
    pub fn tex_coords(&self) -> &[Vec2; 4] {
        self.sprite.tex_coords()
    }

    /// Change the tint; marks the sprite dirty only if the value differs
    pub fn set_color(&mut self, color: Vec4) {
        if self.color != color {
            self.color = color;
            self.dirty |= DirtyFlags::COLOR;
        }
    }

    /// Change the sprite; marks the sprite dirty only if the value differs
    pub fn set_sprite(&mut self, sprite: Sprite) {
        if self.sprite != sprite {
            self.sprite = sprite;
            self.dirty |= DirtyFlags::SPRITE;
        }
    }

    /// Whether the owning batch must rebuild this sprite's vertices
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Pending change reasons
    pub fn dirty_flags(&self) -> DirtyFlags {
        self.dirty
    }

    /// Mark the vertices as consumed
    pub(crate) fn clean(&mut self) {
        self.dirty = DirtyFlags::empty();
    }
}

impl Component for SpriteRenderer {
    fn kind(&self) -> ComponentKind {
        ComponentKind::SpriteRenderer
    }

    fn start(&mut self, owner: &mut ObjectContext<'_>) {
        self.last_transform = Some(*owner.transform);
    }

    fn update(&mut self, _dt: f32, owner: &mut ObjectContext<'_>) {
        if self.last_transform.as_ref() != Some(&*owner.transform) {
            self.last_transform = Some(*owner.transform);
            self.dirty |= DirtyFlags::TRANSFORM;
            log::trace!("'{}' sprite moved to {:?}", owner.name, owner.transform.position);
        }
    }

    fn inspect(&mut self, inspector: &mut dyn Inspector) {
        let c = self.color;
        let mut rgba = [c.x, c.y, c.z, c.w];
        if inspector.color_edit("Color Picker", &mut rgba) {
            self.set_color(Vec4::new(rgba[0], rgba[1], rgba[2], rgba[3]));
        }
    }

    fn as_sprite_renderer(&self) -> Option<&SpriteRenderer> {
        Some(self)
    }

    fn as_sprite_renderer_mut(&mut self) -> Option<&mut SpriteRenderer> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPicker(Option<[f32; 4]>);

    impl Inspector for FixedPicker {
        fn color_edit(&mut self, _label: &str, rgba: &mut [f32; 4]) -> bool {
            match self.0 {
                Some(value) => {
                    *rgba = value;
                    true
                }
                None => false,
            }
        }
    }

    fn context<'a>(transform: &'a mut Transform) -> ObjectContext<'a> {
        ObjectContext { name: "test", z_index: 0, transform }
    }

    #[test]
    fn test_new_sprite_is_dirty() {
        let sprite = SpriteRenderer::default();
        assert!(sprite.is_dirty());
        assert_eq!(sprite.dirty_flags(), DirtyFlags::CREATED);
        assert_eq!(sprite.color(), color::white());
        assert_eq!(sprite.texture(), None);
    }

    #[test]
    fn test_setters_only_mark_on_change() {
        let mut sprite = SpriteRenderer::from_color(Vec4::new(1.0, 0.0, 0.0, 1.0));
        sprite.clean();

        sprite.set_color(Vec4::new(1.0, 0.0, 0.0, 1.0));
        sprite.set_sprite(Sprite::untextured());
        assert!(!sprite.is_dirty());

        sprite.set_color(Vec4::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(sprite.dirty_flags(), DirtyFlags::COLOR);
    }

    #[test]
    fn test_update_detects_transform_change_once() {
        let mut transform = Transform::default();
        let mut sprite = SpriteRenderer::default();
        sprite.start(&mut context(&mut transform));
        sprite.clean();

        sprite.update(0.016, &mut context(&mut transform));
        assert!(!sprite.is_dirty());

        transform.translate(Vec2::new(3.0, 0.0));
        sprite.update(0.016, &mut context(&mut transform));
        assert_eq!(sprite.dirty_flags(), DirtyFlags::TRANSFORM);

        sprite.clean();
        sprite.update(0.016, &mut context(&mut transform));
        assert!(!sprite.is_dirty());
    }

    #[test]
    fn test_update_without_start_snapshots() {
        let mut transform = Transform::default();
        let mut sprite = SpriteRenderer::default();
        sprite.clean();

        sprite.update(0.016, &mut context(&mut transform));
        assert!(sprite.is_dirty());
    }

    #[test]
    fn test_inspect_edits_color() {
        let mut sprite = SpriteRenderer::default();
        sprite.clean();

        sprite.inspect(&mut FixedPicker(None));
        assert!(!sprite.is_dirty());

        sprite.inspect(&mut FixedPicker(Some([0.2, 0.4, 0.6, 1.0])));
        assert_eq!(sprite.color(), Vec4::new(0.2, 0.4, 0.6, 1.0));
        assert_eq!(sprite.dirty_flags(), DirtyFlags::COLOR);
    }
}
