//! Per-frame rendering statistics

/// What a single batch did during one `render()` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchRenderStats {
    /// Sprites covered by the draw call
    pub sprites_drawn: usize,
    /// Sprites whose vertices were recomputed because they were dirty
    pub sprites_rebuilt: usize,
    /// Whether the vertex buffer was re-uploaded
    pub uploaded: bool,
    /// Whether a draw call was issued
    pub drew: bool,
}

/// Statistics for one frame of batch rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Batches that issued a draw call
    pub batches_drawn: usize,
    /// Total sprites drawn
    pub sprites_drawn: usize,
    /// Total sprites whose vertices were recomputed
    pub sprites_rebuilt: usize,
    /// Vertex buffer uploads performed
    pub buffer_uploads: usize,
    /// Draw calls issued
    pub draw_calls: usize,
}

impl RenderStats {
    /// Fold one batch's results into the frame totals
    pub fn record(&mut self, batch: &BatchRenderStats) {
        self.sprites_drawn += batch.sprites_drawn;
        self.sprites_rebuilt += batch.sprites_rebuilt;
        if batch.uploaded {
            self.buffer_uploads += 1;
        }
        if batch.drew {
            self.batches_drawn += 1;
            self.draw_calls += 1;
        }
    }

    /// Calculate average sprites per drawn batch
    pub fn avg_sprites_per_batch(&self) -> f32 {
        if self.batches_drawn == 0 {
            0.0
        } else {
            self.sprites_drawn as f32 / self.batches_drawn as f32
        }
    }
}
