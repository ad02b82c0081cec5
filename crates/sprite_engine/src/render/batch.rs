//! # Render Batch
//!
//! A render batch packs up to `capacity` sprites of one z-layer into a single
//! vertex buffer so they can be drawn with one indexed draw call.
//!
//! ## Layout
//!
//! - Slot `i` owns vertices `4i..4i+4` of the CPU-side vertex array.
//! - The index buffer covers the full capacity and is generated once.
//! - Up to `max_texture_slots` distinct textures are referenced; each vertex
//!   stores `0` for "no texture" or the 1-based slot of its texture.
//!
//! ## Dirty tracking
//!
//! Sprites are referenced by [`GameObjectId`], not owned. On every
//! [`render`](RenderBatch::render) the batch recomputes only the slots whose
//! [`SpriteRenderer`] is dirty, and re-uploads the whole vertex buffer only if
//! at least one slot changed. A batch of static sprites costs one draw call
//! and no uploads per frame.

use crate::ecs::components::SpriteRenderer;
use crate::ecs::GameObject;
use crate::foundation::collections::{GameObjectId, SlotMap, TextureHandle};
use crate::foundation::math::Transform;
use crate::render::backends::{BufferId, RenderBackend};
use crate::render::shader::{texture_slot_units, UNIFORM_PROJECTION, UNIFORM_TEXTURES, UNIFORM_VIEW};
use crate::render::vertex::{quad_indices, SpriteVertex, INDICES_PER_QUAD, QUAD_CORNERS, VERTICES_PER_QUAD};
use crate::render::{
    BatchRenderStats, Camera, GraphicsContext, RenderError, RenderResult, RendererConfig, Texture, TextureRegistry,
};

/// Result type for batch operations
pub type BatchResult<T> = Result<T, BatchError>;

/// Errors raised when a batch cannot take another sprite
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    /// Every sprite slot is in use
    #[error("Batch is full: {capacity} sprites")]
    BatchFull {
        /// Sprite capacity of the batch
        capacity: usize,
    },

    /// The sprite needs a new texture but every texture slot is in use
    #[error("Batch texture slots are full: {max_slots} textures")]
    TextureSlotsFull {
        /// Texture slot limit of the batch
        max_slots: usize,
    },
}

#[derive(Debug, Clone, Copy)]
struct GpuBuffers {
    vertex: BufferId,
    index: BufferId,
}

/// Fixed-capacity group of sprites drawn with one draw call
#[derive(Debug)]
pub struct RenderBatch {
    z_index: i32,
    capacity: usize,
    max_texture_slots: usize,
    sprites: Vec<GameObjectId>,
    vertices: Vec<SpriteVertex>,
    indices: Vec<u32>,
    textures: Vec<TextureHandle>,
    slot_units: Vec<i32>,
    buffers: Option<GpuBuffers>,
    needs_upload: bool,
}

impl RenderBatch {
    /// Create an empty batch for layer `z_index`
    ///
    /// The vertex array and index buffer are sized for `capacity` sprites up
    /// front. GPU buffers are created separately by [`start`](Self::start).
    pub fn new(capacity: usize, z_index: i32, max_texture_slots: usize) -> Self {
        let capacity = capacity.max(1);
        let max_texture_slots = max_texture_slots.max(1);
        Self {
            z_index,
            capacity,
            max_texture_slots,
            sprites: Vec::with_capacity(capacity),
            vertices: vec![SpriteVertex::default(); capacity * VERTICES_PER_QUAD],
            indices: quad_indices(capacity),
            textures: Vec::with_capacity(max_texture_slots),
            slot_units: texture_slot_units(max_texture_slots),
            buffers: None,
            needs_upload: false,
        }
    }

    /// Create an empty batch using the limits in `config`
    pub fn from_config(config: &RendererConfig, z_index: i32) -> Self {
        Self::new(config.max_batch_size, z_index, config.max_texture_slots)
    }

    /// Allocate the GPU vertex buffer and upload the static index buffer
    pub fn start(&mut self, backend: &mut dyn RenderBackend) -> RenderResult<()> {
        let vertex_bytes: &[u8] = bytemuck::cast_slice(&self.vertices);
        let vertex = backend.create_vertex_buffer(vertex_bytes.len())?;
        let index = backend.create_index_buffer(&self.indices)?;
        self.buffers = Some(GpuBuffers { vertex, index });
        log::debug!(
            "Started batch z={} ({} sprites, {} vertex bytes)",
            self.z_index,
            self.capacity,
            vertex_bytes.len()
        );
        Ok(())
    }

    /// Assign `sprite` (owned by game object `id`) to the next free slot
    ///
    /// The slot's vertices are computed immediately and the sprite is marked
    /// clean; the next [`render`](Self::render) uploads them.
    pub fn add_sprite(
        &mut self,
        id: GameObjectId,
        sprite: &mut SpriteRenderer,
        transform: &Transform,
    ) -> BatchResult<usize> {
        if !self.has_room() {
            return Err(BatchError::BatchFull { capacity: self.capacity });
        }
        if let Some(texture) = sprite.texture() {
            if !self.has_texture(texture) {
                if !self.has_texture_room() {
                    return Err(BatchError::TextureSlotsFull { max_slots: self.max_texture_slots });
                }
                self.textures.push(texture);
            }
        }

        let slot = self.sprites.len();
        self.sprites.push(id);
        let tex_slot = sprite.texture().and_then(|t| self.texture_slot(t)).unwrap_or(0);
        self.load_vertex_properties(slot, sprite, transform, tex_slot);
        sprite.clean();
        self.needs_upload = true;

        log::trace!("Batch z={} assigned slot {} to {:?}", self.z_index, slot, id);
        Ok(slot)
    }

    /// Refresh dirty sprites, re-upload if needed, and draw the batch
    pub fn render(
        &mut self,
        objects: &mut SlotMap<GameObjectId, GameObject>,
        ctx: &mut GraphicsContext,
        camera: &Camera,
    ) -> RenderResult<BatchRenderStats> {
        let buffers = self.buffers.ok_or(RenderError::BatchNotStarted { z_index: self.z_index })?;
        let GraphicsContext { backend, shader, textures } = ctx;
        let mut stats = BatchRenderStats::default();

        for slot in 0..self.sprites.len() {
            let Some(object) = objects.get_mut(self.sprites[slot]) else {
                continue;
            };
            let Some((transform, sprite)) = object.sprite_render_state_mut() else {
                continue;
            };
            if sprite.is_dirty() {
                let tex_slot = self.texture_slot_for(sprite.texture(), textures);
                self.load_vertex_properties(slot, sprite, &transform, tex_slot);
                sprite.clean();
                stats.sprites_rebuilt += 1;
            }
        }

        if stats.sprites_rebuilt > 0 || self.needs_upload {
            backend.upload_vertices(buffers.vertex, bytemuck::cast_slice(&self.vertices))?;
            self.needs_upload = false;
            stats.uploaded = true;
            log::debug!("Batch z={} re-uploaded ({} sprites rebuilt)", self.z_index, stats.sprites_rebuilt);
        }

        if self.sprites.is_empty() {
            return Ok(stats);
        }

        // Resolve every texture before touching GPU state
        let bound = self
            .textures
            .iter()
            .map(|&handle| textures.require(handle))
            .collect::<RenderResult<Vec<&dyn Texture>>>()?;

        shader.bind();
        shader.upload_mat4(UNIFORM_PROJECTION, &camera.projection_matrix());
        shader.upload_mat4(UNIFORM_VIEW, &camera.view_matrix());
        for (unit, texture) in (1u32..).zip(&bound) {
            texture.bind(unit);
        }
        shader.upload_int_array(UNIFORM_TEXTURES, &self.slot_units);

        let index_count = (self.sprites.len() * INDICES_PER_QUAD) as u32;
        let drawn = backend.draw_indexed(buffers.vertex, buffers.index, index_count);

        for (unit, texture) in (1u32..).zip(&bound) {
            texture.unbind(unit);
        }
        shader.detach();
        drawn?;

        stats.sprites_drawn = self.sprites.len();
        stats.drew = true;
        Ok(stats)
    }

    /// Recompute the four vertices of `slot`
    fn load_vertex_properties(&mut self, slot: usize, sprite: &SpriteRenderer, transform: &Transform, tex_slot: usize) {
        let tex_slot = tex_slot as f32;
        let c = sprite.color();
        let color = [c.x, c.y, c.z, c.w];
        let tex_coords = sprite.tex_coords();

        let base = slot * VERTICES_PER_QUAD;
        for (j, [x_add, y_add]) in QUAD_CORNERS.into_iter().enumerate() {
            self.vertices[base + j] = SpriteVertex {
                position: [
                    transform.position.x + x_add * transform.scale.x,
                    transform.position.y + y_add * transform.scale.y,
                ],
                color,
                tex_coords: [tex_coords[j].x, tex_coords[j].y],
                tex_slot,
            };
        }
    }

    /// 1-based texture slot for `texture`, registering it if room remains
    ///
    /// A sprite re-textured after assignment to a batch whose slots are all
    /// taken, or re-textured with a handle `registry` does not know, falls
    /// back to slot 0 (drawn untextured).
    fn texture_slot_for(&mut self, texture: Option<TextureHandle>, registry: &TextureRegistry) -> usize {
        let Some(texture) = texture else {
            return 0;
        };
        if let Some(slot) = self.texture_slot(texture) {
            return slot;
        }
        if !registry.contains(texture) {
            log::error!(
                "Batch z={} refused unregistered texture {:?}; drawing untextured",
                self.z_index,
                texture
            );
            return 0;
        }
        if self.has_texture_room() {
            self.textures.push(texture);
            return self.textures.len();
        }
        log::warn!(
            "Batch z={} has no free texture slot for {:?}; drawing untextured",
            self.z_index,
            texture
        );
        0
    }

    /// Whether a sprite with `texture` can be added to this batch
    pub fn accepts(&self, texture: Option<TextureHandle>) -> bool {
        self.has_room() && texture.map_or(true, |t| self.has_texture(t) || self.has_texture_room())
    }

    /// Whether a free sprite slot remains
    pub fn has_room(&self) -> bool {
        self.sprites.len() < self.capacity
    }

    /// Whether a free texture slot remains
    pub fn has_texture_room(&self) -> bool {
        self.textures.len() < self.max_texture_slots
    }

    /// Whether `texture` already occupies a slot
    pub fn has_texture(&self, texture: TextureHandle) -> bool {
        self.textures.contains(&texture)
    }

    /// 1-based slot of `texture`, if present
    pub fn texture_slot(&self, texture: TextureHandle) -> Option<usize> {
        self.textures.iter().position(|&t| t == texture).map(|i| i + 1)
    }

    /// Layer shared by every sprite in the batch
    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    /// Maximum number of sprites
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of assigned sprites
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Whether no sprite is assigned
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Game objects assigned to the batch, in slot order
    pub fn sprites(&self) -> &[GameObjectId] {
        &self.sprites
    }

    /// Textures in slot order (slot 1 first)
    pub fn textures(&self) -> &[TextureHandle] {
        &self.textures
    }

    /// Vertices for the whole capacity
    pub fn vertices(&self) -> &[SpriteVertex] {
        &self.vertices
    }

    /// Vertices for the whole capacity as a flat float array
    pub fn vertex_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Static index buffer contents
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Whether [`start`](Self::start) has created the GPU buffers
    pub fn is_started(&self) -> bool {
        self.buffers.is_some()
    }
}
