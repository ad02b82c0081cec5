//! Shader collaborator
//!
//! Shader source parsing, compilation and linking live outside the engine.
//! Batches only need a linked program they can activate and feed uniforms by
//! name, every frame, for every batch.

use crate::foundation::math::{Mat4, Vec4};

/// Uniform receiving the camera projection matrix
pub const UNIFORM_PROJECTION: &str = "uProjection";

/// Uniform receiving the camera view matrix
pub const UNIFORM_VIEW: &str = "uView";

/// Uniform receiving the sampler unit array
pub const UNIFORM_TEXTURES: &str = "uTextures";

/// A compiled and linked shader program
pub trait Shader {
    /// Make this program current
    fn bind(&mut self);

    /// Stop using this program
    fn detach(&mut self);

    /// Upload a 4x4 matrix uniform
    fn upload_mat4(&mut self, name: &str, value: &Mat4);

    /// Upload a 4-component vector uniform
    fn upload_vec4(&mut self, name: &str, value: &Vec4);

    /// Upload a scalar uniform
    fn upload_float(&mut self, name: &str, value: f32);

    /// Upload an integer array uniform
    fn upload_int_array(&mut self, name: &str, values: &[i32]);
}

/// Sampler units for a batch with `max_texture_slots` textures
///
/// Unit 0 is the "no texture" sentinel, units `1..=max_texture_slots` hold
/// the batch textures in slot order.
pub fn texture_slot_units(max_texture_slots: usize) -> Vec<i32> {
    (0..=max_texture_slots as i32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_slot_units_include_sentinel() {
        assert_eq!(texture_slot_units(8), vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(texture_slot_units(1), vec![0, 1]);
    }
}
