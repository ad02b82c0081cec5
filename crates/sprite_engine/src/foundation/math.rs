//! Math utilities and types
//!
//! Provides the fundamental math types for 2D sprite rendering. Matrices stay
//! 4x4 because the draw pipeline consumes homogeneous projection/view
//! matrices even though every entity lives on the XY plane.

pub use nalgebra::{Matrix4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type (also used for RGBA colors)
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Position and scale of a game object on the 2D plane
///
/// `Transform` is a plain value: copying it yields an independent snapshot,
/// and equality is component-wise. Sprite renderers rely on both properties
/// to detect movement by comparing the live transform against a stored copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Bottom-left corner of the quad in world units
    pub position: Vec2,

    /// Width and height of the quad in world units
    pub scale: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a transform from a position and scale
    pub fn new(position: Vec2, scale: Vec2) -> Self {
        Self { position, scale }
    }

    /// Create a unit-scaled transform at `position`
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builder pattern: Set scale
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Move the transform by `delta`
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

/// Color helpers for RGBA tints stored as [`Vec4`]
pub mod color {
    use super::Vec4;

    /// Opaque white, the neutral tint for textured sprites
    pub fn white() -> Vec4 {
        Vec4::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Create an RGBA color, clamping every channel into `[0, 1]`
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Vec4 {
        Vec4::new(r, g, b, a).map(|c| c.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transform() {
        let t = Transform::default();
        assert_eq!(t.position, Vec2::zeros());
        assert_eq!(t.scale, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Transform::new(Vec2::new(100.0, 100.0), Vec2::new(42.0, 42.0));
        let mut copy = original;
        copy.translate(Vec2::new(1.0, 0.0));

        assert_eq!(original.position, Vec2::new(100.0, 100.0));
        assert_eq!(copy.position, Vec2::new(101.0, 100.0));
        assert_ne!(original, copy);
    }

    #[test]
    fn test_equality_is_component_wise() {
        let a = Transform::from_position(Vec2::new(3.0, 4.0)).with_scale(Vec2::new(2.0, 2.0));
        let b = Transform::new(Vec2::new(3.0, 4.0), Vec2::new(2.0, 2.0));
        assert_eq!(a, b);
        assert_ne!(a, b.with_scale(Vec2::new(2.0, 2.5)));
    }

    #[test]
    fn test_rgba_clamps_channels() {
        let c = color::rgba(1.5, -0.2, 0.5, 1.0);
        assert_eq!(c, Vec4::new(1.0, 0.0, 0.5, 1.0));
    }
}
