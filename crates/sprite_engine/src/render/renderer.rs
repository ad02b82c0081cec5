//! # Sprite Renderer
//!
//! Owns every [`RenderBatch`] and decides which batch a newly registered
//! sprite lands in.
//!
//! ## Allocation policy
//!
//! First fit over the batches in draw order: a sprite joins the first batch
//! on its z-layer that has a free slot and either already holds the sprite's
//! texture or still has a free texture slot. Otherwise a new batch is created
//! and inserted after every batch with a lower or equal z-index. Batches are
//! never merged or rebalanced and sprites never migrate between batches.

use crate::ecs::GameObject;
use crate::foundation::collections::{GameObjectId, SlotMap};
use crate::render::{
    Camera, GraphicsContext, RenderBatch, RenderError, RenderResult, RenderStats, RendererConfig,
};

/// Batch allocator and per-frame draw driver
#[derive(Debug, Default)]
pub struct Renderer {
    config: RendererConfig,
    batches: Vec<RenderBatch>,
    stats: RenderStats,
}

impl Renderer {
    /// Create a renderer with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom limits
    pub fn with_config(config: RendererConfig) -> Self {
        Self {
            config,
            batches: Vec::new(),
            stats: RenderStats::default(),
        }
    }

    /// Register the sprite renderer of `object` with a batch
    ///
    /// Returns `Ok(false)` when the object has no sprite renderer. Fails with
    /// [`RenderError::MissingTexture`] if the sprite references a texture the
    /// context does not know; the object is then left unregistered.
    pub fn add(
        &mut self,
        id: GameObjectId,
        object: &mut GameObject,
        ctx: &mut GraphicsContext,
    ) -> RenderResult<bool> {
        let z_index = object.z_index();
        let name = object.name().to_string();
        let Some((transform, sprite)) = object.sprite_render_state_mut() else {
            return Ok(false);
        };

        let texture = sprite.texture();
        if let Some(handle) = texture {
            if !ctx.textures.contains(handle) {
                log::error!("'{}' references unregistered texture {:?}", name, handle);
                return Err(RenderError::MissingTexture(handle));
            }
        }

        let index = match self
            .batches
            .iter()
            .position(|batch| batch.z_index() == z_index && batch.accepts(texture))
        {
            Some(index) => index,
            None => self.create_batch(z_index, ctx)?,
        };

        self.batches[index].add_sprite(id, sprite, &transform).map_err(|err| {
            log::error!("Batch {} refused '{}' after allocation: {}", index, name, err);
            RenderError::from(err)
        })?;
        Ok(true)
    }

    fn create_batch(&mut self, z_index: i32, ctx: &mut GraphicsContext) -> RenderResult<usize> {
        let mut batch = RenderBatch::from_config(&self.config, z_index);
        batch.start(ctx.backend.as_mut())?;

        let index = self.batches.partition_point(|b| b.z_index() <= z_index);
        self.batches.insert(index, batch);
        log::info!(
            "Created render batch z={} (capacity {}, {} batches total)",
            z_index,
            self.config.max_batch_size,
            self.batches.len()
        );
        Ok(index)
    }

    /// Render every batch in ascending z-index order
    pub fn render(
        &mut self,
        objects: &mut SlotMap<GameObjectId, GameObject>,
        ctx: &mut GraphicsContext,
        camera: &Camera,
    ) -> RenderResult<RenderStats> {
        let mut stats = RenderStats::default();
        for batch in &mut self.batches {
            let batch_stats = batch.render(objects, ctx, camera)?;
            stats.record(&batch_stats);
        }
        self.stats = stats;
        log::trace!("Frame rendered: {:?}", stats);
        Ok(stats)
    }

    /// Batches in draw order
    pub fn batches(&self) -> &[RenderBatch] {
        &self.batches
    }

    /// Number of batches
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Statistics of the last rendered frame
    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Allocation limits
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::SpriteRenderer;
    use crate::foundation::collections::TextureHandle;
    use crate::foundation::math::{color, Transform, Vec2};
    use crate::render::backends::headless::HeadlessTexture;
    use crate::render::Sprite;

    struct Fixture {
        renderer: Renderer,
        objects: SlotMap<GameObjectId, GameObject>,
        ctx: GraphicsContext,
    }

    impl Fixture {
        fn new(config: RendererConfig) -> Self {
            let (ctx, _log) = GraphicsContext::headless();
            Self { renderer: Renderer::with_config(config), objects: SlotMap::with_key(), ctx }
        }

        fn add(&mut self, z_index: i32, sprite: SpriteRenderer) -> RenderResult<GameObjectId> {
            let mut object = GameObject::new("obj", Transform::default(), z_index).with_component(sprite);
            object.start();
            let id = self.objects.insert(object);
            self.renderer.add(id, &mut self.objects[id], &mut self.ctx)?;
            Ok(id)
        }

        fn texture(&mut self) -> TextureHandle {
            let log = crate::render::backends::headless::CommandLog::new();
            self.ctx.register_texture(HeadlessTexture::new("tex", 16, 16, log))
        }
    }

    #[test]
    fn test_object_without_sprite_is_skipped() {
        let mut fx = Fixture::new(RendererConfig::default());
        let mut object = GameObject::named("empty");
        let id = fx.objects.insert(GameObject::named("placeholder"));

        assert!(!fx.renderer.add(id, &mut object, &mut fx.ctx).unwrap());
        assert_eq!(fx.renderer.batch_count(), 0);
    }

    #[test]
    fn test_same_layer_sprites_share_a_batch() {
        let mut fx = Fixture::new(RendererConfig::default());
        for _ in 0..50 {
            fx.add(0, SpriteRenderer::from_color(color::white())).unwrap();
        }
        assert_eq!(fx.renderer.batch_count(), 1);
        assert_eq!(fx.renderer.batches()[0].len(), 50);
    }

    #[test]
    fn test_capacity_overflow_opens_second_batch_on_same_layer() {
        let mut fx = Fixture::new(RendererConfig::default().with_max_batch_size(4));
        for _ in 0..5 {
            fx.add(3, SpriteRenderer::default()).unwrap();
        }
        let batches = fx.renderer.batches();
        assert_eq!(batches.len(), 2);
        assert_eq!((batches[0].len(), batches[1].len()), (4, 1));
        assert!(batches.iter().all(|b| b.z_index() == 3));
    }

    #[test]
    fn test_texture_overflow_opens_second_batch() {
        let mut fx = Fixture::new(RendererConfig::default());
        let textures: Vec<_> = (0..9).map(|_| fx.texture()).collect();
        for &texture in &textures {
            fx.add(0, SpriteRenderer::from_sprite(Sprite::new(texture))).unwrap();
        }

        let batches = fx.renderer.batches();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].textures(), &textures[..8]);
        assert_eq!(batches[1].textures(), &textures[8..]);

        // Untextured sprites still fit into the texture-full first batch
        fx.add(0, SpriteRenderer::default()).unwrap();
        assert_eq!(fx.renderer.batches()[0].len(), 9);
    }

    #[test]
    fn test_batches_stay_sorted_by_z_index() {
        let mut fx = Fixture::new(RendererConfig::default().with_max_batch_size(1));
        for z in [5, -1, 3, 5, -7, 0, 3] {
            fx.add(z, SpriteRenderer::default()).unwrap();
        }
        let order: Vec<i32> = fx.renderer.batches().iter().map(RenderBatch::z_index).collect();
        assert_eq!(order, vec![-7, -1, 0, 3, 3, 5, 5]);
    }

    #[test]
    fn test_equal_z_batches_keep_creation_order() {
        let mut fx = Fixture::new(RendererConfig::default().with_max_batch_size(1));
        let first = fx.add(2, SpriteRenderer::default()).unwrap();
        fx.add(0, SpriteRenderer::default()).unwrap();
        let second = fx.add(2, SpriteRenderer::default()).unwrap();

        let batches = fx.renderer.batches();
        assert_eq!(batches[1].sprites(), &[first]);
        assert_eq!(batches[2].sprites(), &[second]);
    }

    #[test]
    fn test_unregistered_texture_is_rejected() {
        let mut fx = Fixture::new(RendererConfig::default());
        let foreign = TextureHandle::default();
        let result = fx.add(0, SpriteRenderer::from_sprite(Sprite::new(foreign)));

        assert!(matches!(result, Err(RenderError::MissingTexture(_))));
        assert_eq!(fx.renderer.batch_count(), 0);
    }

    #[test]
    fn test_render_draws_every_batch_and_records_stats() {
        let mut fx = Fixture::new(RendererConfig::default().with_max_batch_size(2));
        for z in [1, 0, 1] {
            fx.add(z, SpriteRenderer::default()).unwrap();
        }
        let camera = Camera::new(Vec2::zeros());

        let stats = fx.renderer.render(&mut fx.objects, &mut fx.ctx, &camera).unwrap();
        assert_eq!(stats.draw_calls, 2);
        assert_eq!(stats.sprites_drawn, 3);
        assert_eq!(stats.buffer_uploads, 2);
        assert_eq!(fx.renderer.stats(), &stats);

        let again = fx.renderer.render(&mut fx.objects, &mut fx.ctx, &camera).unwrap();
        assert_eq!(again.buffer_uploads, 0);
        assert_eq!(again.sprites_rebuilt, 0);
    }
}
