use crate::api::types::{EntityId, GameEvent};
use crate::components::mesh::SDFColor;
use crate::core::scene::Scene;
use crate::core::surface::{Rect, Surface};
use crate::input::queue::{InputEvent, InputQueue};
use crate::systems::rng::Rng;
use crate::systems::shooting_stars::{ShootingStars, StarConfig};
#[cfg(feature = "vectors")]
use crate::systems::vector::VectorState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Initial viewport width in pixels, used until the host reports one.
    pub world_width: f32,
    /// Initial viewport height in pixels.
    pub world_height: f32,
    /// Largest frame delta the simulation will accept, in seconds (default: 10/60).
    pub max_frame_dt: f32,
    /// Maximum number of SDF instances (visual handles) per frame (default: 64).
    pub max_sdf_instances: usize,
    /// Maximum number of simultaneously active shooting stars (default: 8).
    pub max_stars: usize,
    /// Maximum number of game events per frame (default: 16).
    pub max_events: usize,
    /// Maximum number of vector vertices per frame (default: 16384).
    #[cfg(feature = "vectors")]
    pub max_vector_vertices: usize,
    /// Shooting-star tuning. `None` disables stars.
    pub stars: Option<StarConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 1200.0,
            world_height: 800.0,
            max_frame_dt: 10.0 / 60.0,
            max_sdf_instances: 64,
            max_stars: 8,
            max_events: 16,
            #[cfg(feature = "vectors")]
            max_vector_vertices: 16384,
            stars: Some(StarConfig::default()),
        }
    }
}

/// The contract every backdrop must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the initial handles.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One frame. `dt` is the clamped frame delta in seconds.
    /// Surface input has already been applied to `ctx.surface`.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32);

    /// The host view is being torn down.
    fn shutdown(&mut self, _ctx: &mut EngineContext) {}
}

/// Mutable engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub surface: Surface,
    pub stars: ShootingStars,
    pub rng: Rng,
    pub events: Vec<GameEvent>,
    /// Page background color reported to the host.
    pub clear_color: SDFColor,
    #[cfg(feature = "vectors")]
    pub vectors: VectorState,
    max_events: usize,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default(), 42)
    }

    /// Create a context sized for `config` with an explicit RNG seed.
    pub fn with_config(config: &GameConfig, seed: u64) -> Self {
        Self {
            scene: Scene::with_capacity(config.max_sdf_instances),
            surface: Surface::new(config.world_width, config.world_height),
            stars: ShootingStars::new(config.stars, config.max_stars),
            rng: Rng::new(seed),
            events: Vec::with_capacity(config.max_events),
            clear_color: SDFColor::WHITE,
            #[cfg(feature = "vectors")]
            vectors: VectorState::with_capacity(config.max_vector_vertices),
            max_events: config.max_events,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit an event for the presentational layer.
    /// Events beyond `max_events` in one frame are dropped.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() < self.max_events {
            self.events.push(event);
        }
    }

    /// Clear per-frame transient data (events, vector geometry).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        #[cfg(feature = "vectors")]
        self.vectors.clear();
    }

    /// Apply surface-level input (viewport, container, pointer, star
    /// animation ends) in arrival order.
    pub fn apply_input(&mut self, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerMove { x, y } => self.surface.pointer_moved(x, y),
                InputEvent::Resize { width, height } => self.surface.resize(width, height),
                InputEvent::ContainerRect { left, top, width, height } => {
                    self.surface.set_container(Rect::new(left, top, width, height));
                }
                InputEvent::AnimationEnd { id } => {
                    self.stars.finish(id);
                }
                InputEvent::Custom { .. } => {}
            }
        }
    }

    /// Advance the shooting-star scheduler.
    pub fn tick_stars(&mut self, dt: f32) {
        self.stars.tick(dt, &mut self.rng);
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
