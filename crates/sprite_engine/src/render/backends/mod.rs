//! Backend abstraction traits for the sprite renderer
//!
//! This module defines the buffer-level operations a graphics API must
//! provide so batches can mirror their vertex data on the GPU and issue
//! indexed draws. Context creation and pipeline setup stay with the
//! application.

use crate::render::RenderError;

pub mod headless;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Opaque GPU buffer identifier issued by a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(pub u32);

/// Buffer plumbing required by [`RenderBatch`](crate::render::RenderBatch)
///
/// All calls are synchronous: when a method returns `Ok`, the operation has
/// completed from the caller's point of view.
pub trait RenderBackend {
    /// Allocate a dynamic vertex buffer of `size_bytes` bytes
    fn create_vertex_buffer(&mut self, size_bytes: usize) -> BackendResult<BufferId>;

    /// Allocate and fill a static index buffer
    fn create_index_buffer(&mut self, indices: &[u32]) -> BackendResult<BufferId>;

    /// Overwrite a vertex buffer from offset 0 with `data`
    fn upload_vertices(&mut self, buffer: BufferId, data: &[u8]) -> BackendResult<()>;

    /// Draw `index_count` indices as triangles
    fn draw_indexed(
        &mut self,
        vertex_buffer: BufferId,
        index_buffer: BufferId,
        index_count: u32,
    ) -> BackendResult<()>;
}
