//! Sprite sandbox
//!
//! Runs a small level-editor style scene on the headless backend and logs
//! what the batch renderer did each second of simulated time.
//!
//! Usage: `sprite_sandbox [engine.toml|engine.ron]`

use sprite_engine::config::{Config, EngineConfig};
use sprite_engine::foundation::logging;
use sprite_engine::prelude::*;
use sprite_engine::render::backends::headless::{CommandLog, HeadlessTexture};
use sprite_engine::scene::SceneResult;

const FRAME_TIME: f32 = 1.0 / 60.0;
const FRAME_COUNT: u64 = 120;

/// Bounces its owner horizontally between two x positions
struct Patrol {
    speed: f32,
    min_x: f32,
    max_x: f32,
}

impl Component for Patrol {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Custom("patrol")
    }

    fn update(&mut self, dt: f32, owner: &mut ObjectContext<'_>) {
        owner.transform.translate(Vec2::new(self.speed * dt, 0.0));
        let x = owner.transform.position.x;
        if x > self.max_x || x < self.min_x {
            self.speed = -self.speed;
            log::debug!("'{}' turned around at x={:.1}", owner.name, x);
        }
    }
}

/// Inspector that tints whatever it is shown a little bluer each call
struct TintPicker;

impl Inspector for TintPicker {
    fn color_edit(&mut self, label: &str, rgba: &mut [f32; 4]) -> bool {
        log::trace!("{}: {:?}", label, rgba);
        rgba[2] = (rgba[2] + 0.25).min(1.0);
        true
    }
}

struct LevelEditor {
    log: CommandLog,
}

impl SceneLoader for LevelEditor {
    fn name(&self) -> &str {
        "level_editor"
    }

    fn init(&mut self, scene: &mut Scene, ctx: &mut GraphicsContext) -> SceneResult<()> {
        scene.camera_mut().set_position(Vec2::new(-20.0, -30.0));

        let atlas = ctx.register_texture(HeadlessTexture::new("spritesheet.png", 256, 256, self.log.clone()));
        let sheet = Spritesheet::from_registry(&ctx.textures, atlas, 16, 16, 26, 0)?;

        let backdrop = GameObject::new(
            "Object 1",
            Transform::new(Vec2::new(200.0, 100.0), Vec2::new(256.0, 256.0)),
            -1,
        )
        .with_component(SpriteRenderer::from_color(color::rgba(1.0, 0.0, 0.0, 1.0)));
        let backdrop = scene.add_game_object(backdrop, ctx)?;

        let hero = GameObject::new(
            "Object 2",
            Transform::new(Vec2::new(400.0, 100.0), Vec2::new(256.0, 256.0)),
            2,
        )
        .with_component(Patrol { speed: 120.0, min_x: 300.0, max_x: 600.0 })
        .with_component(SpriteRenderer::from_sprite(sheet.sprite(15).unwrap_or_default()));
        scene.add_game_object(hero, ctx)?;

        // A static tile row sharing the atlas
        for i in 0..20 {
            let tile = GameObject::new(
                format!("Tile {i}"),
                Transform::new(Vec2::new(i as f32 * 32.0, 0.0), Vec2::new(32.0, 32.0)),
                0,
            )
            .with_component(SpriteRenderer::from_sprite(sheet.sprite(i % sheet.len()).unwrap_or_default()));
            scene.add_game_object(tile, ctx)?;
        }

        scene.set_active_game_object(Some(backdrop));
        Ok(())
    }
}

fn load_config() -> EngineConfig {
    match std::env::args().nth(1) {
        Some(path) => match EngineConfig::load_from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to load config '{path}': {err}; using defaults");
                EngineConfig::default()
            }
        },
        None => EngineConfig::default(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config();
    logging::init_with_level(&config.log_level);
    log::info!("Starting sprite sandbox");

    let (mut ctx, log) = GraphicsContext::headless();
    let mut manager = SceneManager::new(config);
    manager.load_scene(LevelEditor { log: log.clone() }, &mut ctx)?;

    let mut timer = Timer::new();
    let mut totals = RenderStats::default();
    for frame in 1..=FRAME_COUNT {
        timer.tick();

        if frame % 30 == 0 {
            if let Some(scene) = manager.current_scene_mut() {
                scene.inspect_active(&mut TintPicker);
            }
        }

        let Some(stats) = manager.update(FRAME_TIME, &mut ctx)? else {
            break;
        };
        totals.batches_drawn += stats.batches_drawn;
        totals.sprites_drawn += stats.sprites_drawn;
        totals.sprites_rebuilt += stats.sprites_rebuilt;
        totals.buffer_uploads += stats.buffer_uploads;
        totals.draw_calls += stats.draw_calls;

        if frame % 60 == 0 {
            log::info!(
                "Frame {}: {} draw calls, {} sprites, {:.1} sprites/batch, {} rebuilt",
                frame,
                stats.draw_calls,
                stats.sprites_drawn,
                stats.avg_sprites_per_batch(),
                stats.sprites_rebuilt
            );
        }
    }

    log::info!(
        "Finished {} frames in {:.3}s: {} draw calls, {} uploads, {} sprite rebuilds, {} backend commands",
        timer.frame_count(),
        timer.total_time(),
        totals.draw_calls,
        totals.buffer_uploads,
        totals.sprites_rebuilt,
        log.len()
    );
    Ok(())
}
