use orbit_engine::bridge::protocol::{self, HEADER_FLOATS};
use orbit_engine::{
    build_sdf_buffer, EngineContext, FrameClock, Game, GameConfig, InputEvent, InputQueue,
    ProtocolLayout, SDFBuffer,
};

/// Generic runner that wires a backdrop into the host's frame loop.
///
/// Each concrete backdrop creates a `thread_local!` GameRunner and exports
/// free functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    clock: FrameClock,
    config: GameConfig,
    layout: ProtocolLayout,
    sdf_buffer: SDFBuffer,
    /// Flat star records, rebuilt when the active set changes.
    star_buffer: Vec<f32>,
    star_revision: Option<u32>,
    header: [f32; HEADER_FLOATS],
    running: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G, seed: u64) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            ctx: EngineContext::with_config(&config, seed),
            input: InputQueue::new(),
            clock: FrameClock::new(config.max_frame_dt),
            sdf_buffer: SDFBuffer::with_capacity(config.max_sdf_instances),
            star_buffer: Vec::with_capacity(layout.star_data_floats),
            star_revision: None,
            header: [0.0; HEADER_FLOATS],
            game,
            layout,
            config,
            running: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.running = true;
        self.publish();
    }

    /// Stop the loop: no further frames, stars or events are produced and
    /// every handle is released.
    pub fn shutdown(&mut self) {
        if !self.running {
            return;
        }
        self.game.shutdown(&mut self.ctx);
        self.running = false;
        self.input.drain();
        self.ctx.scene.clear();
        self.ctx.stars.clear();
        self.ctx.clear_frame_data();
        self.publish();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Queue an input event for the next frame. Ignored once shut down.
    pub fn push_input(&mut self, event: InputEvent) {
        if self.running {
            self.input.push(event);
        }
    }

    /// Run one frame: apply input, update the game, advance stars, then
    /// rebuild the buffers the host reads.
    pub fn tick(&mut self, raw_dt: f32) {
        if !self.running {
            return;
        }

        self.ctx.clear_frame_data();
        let dt = self.clock.advance(raw_dt);

        self.ctx.apply_input(&self.input);
        self.game.update(&mut self.ctx, &self.input, dt);
        // Star timeouts follow wall time, not the clamped simulation step
        self.ctx.tick_stars(self.clock.wall_dt());
        self.input.drain();

        self.publish();
    }

    /// Rebuild instance/star buffers and the header from current state.
    fn publish(&mut self) {
        build_sdf_buffer(self.ctx.scene.iter(), &mut self.sdf_buffer);

        let revision = self.ctx.stars.revision();
        if self.star_revision != Some(revision) {
            self.ctx.stars.write_floats(&mut self.star_buffer);
            self.star_revision = Some(revision);
        } else {
            // Ages change every frame even when membership doesn't
            for (record, star) in self
                .star_buffer
                .chunks_exact_mut(protocol::STAR_FLOATS)
                .zip(self.ctx.stars.iter())
            {
                record.copy_from_slice(&star.to_floats());
            }
        }

        let viewport = self.ctx.surface.viewport();
        let vector_count = self.vector_vertex_count() as f32;
        let h = &mut self.header;
        h[protocol::HEADER_FRAME_COUNTER] = protocol::encode_counter(self.clock.frame());
        h[protocol::HEADER_PROTOCOL_VERSION] = protocol::PROTOCOL_VERSION;
        h[protocol::HEADER_WORLD_WIDTH] = viewport.x;
        h[protocol::HEADER_WORLD_HEIGHT] = viewport.y;
        h[protocol::HEADER_MAX_SDF_INSTANCES] = self.layout.max_sdf_instances as f32;
        h[protocol::HEADER_SDF_INSTANCE_COUNT] = self.sdf_buffer.instance_count() as f32;
        h[protocol::HEADER_MAX_STARS] = self.layout.max_stars as f32;
        h[protocol::HEADER_STAR_COUNT] = self.ctx.stars.len() as f32;
        h[protocol::HEADER_STAR_REVISION] = protocol::encode_counter(revision as u64);
        h[protocol::HEADER_MAX_EVENTS] = self.layout.max_events as f32;
        h[protocol::HEADER_EVENT_COUNT] = self.ctx.events.len() as f32;
        h[protocol::HEADER_MAX_VECTOR_VERTICES] = self.layout.max_vector_vertices as f32;
        h[protocol::HEADER_VECTOR_VERTEX_COUNT] = vector_count;
        h[protocol::HEADER_CLEAR_R] = self.ctx.clear_color.r;
        h[protocol::HEADER_CLEAR_G] = self.ctx.clear_color.g;
        h[protocol::HEADER_CLEAR_B] = self.ctx.clear_color.b;
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    // ---- Pointer accessors for host reads ----

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn sdf_instances_ptr(&self) -> *const f32 {
        self.sdf_buffer.instances_ptr()
    }

    pub fn sdf_instance_count(&self) -> u32 {
        self.sdf_buffer.instance_count() as u32
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.star_buffer.as_ptr()
    }

    pub fn stars(&self) -> &[f32] {
        &self.star_buffer
    }

    pub fn star_count(&self) -> u32 {
        (self.star_buffer.len() / protocol::STAR_FLOATS) as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.ctx.vectors.buffer_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertex_count(&self) -> u32 {
        self.ctx.vectors.vertex_count() as u32
    }

    #[cfg(not(feature = "vectors"))]
    pub fn vector_vertex_count(&self) -> u32 {
        0
    }

    pub fn world_width(&self) -> f32 {
        self.ctx.surface.viewport().x
    }

    pub fn world_height(&self) -> f32 {
        self.ctx.surface.viewport().y
    }

    // ---- Capacity accessors ----

    pub fn max_sdf_instances(&self) -> u32 {
        self.layout.max_sdf_instances as u32
    }

    pub fn max_stars(&self) -> u32 {
        self.layout.max_stars as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn max_vector_vertices(&self) -> u32 {
        self.layout.max_vector_vertices as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn max_frame_dt(&self) -> f32 {
        self.config.max_frame_dt
    }
}
