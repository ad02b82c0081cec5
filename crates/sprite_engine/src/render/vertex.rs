//! Sprite vertex layout
//!
//! | Vertex Layout            | All values are `f32`                      |
//! |--------------------------|-------------------------------------------|
//! | position                 | x, y                                      |
//! | color                    | r, g, b, a                                |
//! | texture coordinates      | u, v                                      |
//! | texture slot             | id (0 = untextured, 1..=N = bound slot)   |
//!
//! The layout must match the vertex input description of the sprite shader.

use bytemuck::{Pod, Zeroable};

/// Floats in the position attribute
pub const POSITION_SIZE: usize = 2;
/// Floats in the color attribute
pub const COLOR_SIZE: usize = 4;
/// Floats in the texture coordinate attribute
pub const TEX_COORDS_SIZE: usize = 2;
/// Floats in the texture slot attribute
pub const TEX_SLOT_SIZE: usize = 1;

/// Floats per vertex
pub const VERTEX_SIZE: usize = POSITION_SIZE + COLOR_SIZE + TEX_COORDS_SIZE + TEX_SLOT_SIZE;
/// Bytes per vertex
pub const VERTEX_SIZE_BYTES: usize = VERTEX_SIZE * std::mem::size_of::<f32>();

/// Vertices per sprite quad
pub const VERTICES_PER_QUAD: usize = 4;
/// Indices per sprite quad (two triangles)
pub const INDICES_PER_QUAD: usize = 6;

/// Unit offsets of the four quad corners, in vertex order
///
/// Corner `j` of a sprite is `position + QUAD_CORNERS[j] * scale`. The same
/// order is used for the sprite's texture coordinates.
pub const QUAD_CORNERS: [[f32; 2]; VERTICES_PER_QUAD] = [[1.0, 1.0], [1.0, 0.0], [0.0, 0.0], [0.0, 1.0]];

/// One vertex of a sprite quad
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    /// World-space position
    pub position: [f32; 2],
    /// RGBA tint
    pub color: [f32; 4],
    /// Texture coordinates
    pub tex_coords: [f32; 2],
    /// Texture slot index stored as float for the shader
    pub tex_slot: f32,
}

/// Description of one vertex attribute for pipeline setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader input location
    pub location: u32,
    /// Number of `f32` components
    pub components: usize,
    /// Byte offset inside the vertex
    pub offset: usize,
}

/// Attribute table for [`SpriteVertex`]
pub const ATTRIBUTES: [VertexAttribute; 4] = [
    VertexAttribute { location: 0, components: POSITION_SIZE, offset: 0 },
    VertexAttribute { location: 1, components: COLOR_SIZE, offset: POSITION_SIZE * 4 },
    VertexAttribute { location: 2, components: TEX_COORDS_SIZE, offset: (POSITION_SIZE + COLOR_SIZE) * 4 },
    VertexAttribute {
        location: 3,
        components: TEX_SLOT_SIZE,
        offset: (POSITION_SIZE + COLOR_SIZE + TEX_COORDS_SIZE) * 4,
    },
];

/// Build the static index buffer for `capacity` quads
///
/// Quad `i` is drawn as triangles `(4i+3, 4i+2, 4i)` and `(4i, 4i+2, 4i+1)`.
pub fn quad_indices(capacity: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(capacity * INDICES_PER_QUAD);
    for quad in 0..capacity {
        let offset = (quad * VERTICES_PER_QUAD) as u32;
        // Tri 1
        indices.extend_from_slice(&[offset + 3, offset + 2, offset]);
        // Tri 2
        indices.extend_from_slice(&[offset, offset + 2, offset + 1]);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_size_matches_struct() {
        assert_eq!(VERTEX_SIZE, 9);
        assert_eq!(std::mem::size_of::<SpriteVertex>(), VERTEX_SIZE_BYTES);
    }

    #[test]
    fn test_attribute_offsets_are_contiguous() {
        let mut expected = 0;
        for attribute in ATTRIBUTES {
            assert_eq!(attribute.offset, expected);
            expected += attribute.components * 4;
        }
        assert_eq!(expected, VERTEX_SIZE_BYTES);
    }

    #[test]
    fn test_quad_indices_pattern() {
        let capacity = 5;
        let indices = quad_indices(capacity);
        assert_eq!(indices.len(), 6 * capacity);

        for i in 0..capacity as u32 {
            let start = (6 * i) as usize;
            let base = 4 * i;
            assert_eq!(
                &indices[start..start + 6],
                &[base + 3, base + 2, base, base, base + 2, base + 1]
            );
        }
    }
}
