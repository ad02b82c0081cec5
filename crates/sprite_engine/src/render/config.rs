//! Renderer configuration for batch allocation
//!
//! This module provides the limits the renderer applies when packing sprites
//! into batches, so applications can tune them without touching the
//! allocation code.

use serde::{Deserialize, Serialize};

/// Default number of sprites a single batch can hold
pub const DEFAULT_MAX_BATCH_SIZE: usize = 1000;

/// Default number of distinct textures a single batch can bind
///
/// Eight matches the minimum number of fragment texture units guaranteed by
/// common GPU targets.
pub const DEFAULT_MAX_TEXTURE_SLOTS: usize = 8;

/// Configuration for the sprite renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Maximum sprites per batch (vertex capacity is four times this)
    pub max_batch_size: usize,
    /// Maximum distinct textures per batch (slot 0 is reserved for "none")
    pub max_texture_slots: usize,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            max_texture_slots: DEFAULT_MAX_TEXTURE_SLOTS,
        }
    }
}

impl RendererConfig {
    /// Set maximum sprites per batch
    pub fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = max_batch_size.max(1);
        self
    }

    /// Set maximum distinct textures per batch
    pub fn with_max_texture_slots(mut self, max_texture_slots: usize) -> Self {
        self.max_texture_slots = max_texture_slots.max(1);
        self
    }
}
