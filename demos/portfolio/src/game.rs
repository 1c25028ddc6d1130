//! Portfolio backdrop: orbiting planets with moons behind the page content.
//!
//! Pure SDF handles + thin vector rings. Shooting stars run in the engine.
//! Bodies are regenerated on every viewport resize; the theme only changes
//! cosmetic attributes.

use orbit_engine::*;
#[cfg(feature = "vectors")]
use glam::Vec2;

use crate::orbit::{self, CelestialBody};
use crate::profile::Profile;
use crate::theme::Theme;

// ── Handle layout ────────────────────────────────────────────────────

const PLANET_TAG: &str = "planet";
const MOON_TAG: &str = "moon";
/// Orbit ring stroke width in pixels.
const RING_WIDTH: f32 = 1.0;

// ── Custom event kinds from the host ─────────────────────────────────

const CUSTOM_TOGGLE_THEME: u32 = 1;
/// `a >= 0.5` selects dark.
const CUSTOM_SET_THEME: u32 = 2;

// ── Game event kinds to the host ─────────────────────────────────────

const EVENT_THEME: f32 = 1.0;
const EVENT_BODY_COUNT: f32 = 2.0;

/// Handles bound to one body, with the scene slots they were spawned into.
/// Index-aligned with `PortfolioBackdrop::bodies`.
#[derive(Debug, Clone, Copy)]
struct BodyHandles {
    planet: EntityId,
    planet_slot: usize,
    moon: EntityId,
    moon_slot: usize,
}

/// Ring geometry tessellated for one center and alpha, replayed every frame.
#[cfg(feature = "vectors")]
struct RingCache {
    geometry: VectorState,
    /// Center and alpha the geometry was built for. `None` forces a rebuild.
    key: Option<(Vec2, f32)>,
}

pub struct PortfolioBackdrop {
    theme: Theme,
    bodies: Vec<CelestialBody>,
    handles: Vec<BodyHandles>,
    profile: Profile,
    #[cfg(feature = "vectors")]
    rings: RingCache,
}

impl PortfolioBackdrop {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            bodies: Vec::new(),
            handles: Vec::new(),
            profile: Profile::default(),
            #[cfg(feature = "vectors")]
            rings: RingCache { geometry: VectorState::new(), key: None },
        }
    }

    /// Current profile as JSON. Empty string if serialization fails.
    pub fn profile_json(&self) -> String {
        self.profile.to_json().unwrap_or_else(|e| {
            log::warn!("portfolio: profile serialization failed: {}", e);
            String::new()
        })
    }

    /// Replace the profile from JSON. On a parse error the current profile
    /// is kept and `false` is returned.
    pub fn load_profile(&mut self, json: &str) -> bool {
        match Profile::from_json(json) {
            Ok(profile) => {
                log::info!("portfolio: profile loaded for {}", profile.name);
                self.profile = profile;
                true
            }
            Err(e) => {
                log::warn!("portfolio: profile rejected: {}", e);
                false
            }
        }
    }

    // ── Body set ───────────────────────────────────────────────────

    /// Atomically replace the body set and its handles for the current viewport.
    fn rebuild(&mut self, ctx: &mut EngineContext) {
        let viewport = ctx.surface.viewport();
        let count = orbit::planet_count_for_width(viewport.x);
        self.bodies = orbit::compute_planets(count, viewport.x, viewport.y, &mut ctx.rng);

        ctx.scene.despawn_tagged(PLANET_TAG);
        ctx.scene.despawn_tagged(MOON_TAG);
        self.handles.clear();

        for body in &self.bodies {
            let planet = ctx.next_id();
            let planet_slot = ctx.scene.spawn(
                Entity::new(planet)
                    .with_tag(PLANET_TAG)
                    .with_mesh(MeshComponent::sphere(body.size / 2.0, SDFColor::from_hex(body.color))),
            );
            let moon = ctx.next_id();
            let moon_slot = ctx.scene.spawn(
                Entity::new(moon)
                    .with_tag(MOON_TAG)
                    .with_mesh(MeshComponent::sphere(body.moon.size / 2.0, SDFColor::WHITE)),
            );
            self.handles.push(BodyHandles { planet, planet_slot, moon, moon_slot });
        }

        #[cfg(feature = "vectors")]
        {
            self.rings.key = None;
        }

        log::info!(
            "portfolio: {} bodies for {}x{} viewport",
            count, viewport.x, viewport.y
        );
    }

    // ── Input ──────────────────────────────────────────────────────

    fn handle_input(&mut self, input: &InputQueue) {
        for event in input.iter() {
            if let InputEvent::Custom { kind, a, .. } = *event {
                match kind {
                    CUSTOM_TOGGLE_THEME => self.theme = self.theme.toggled(),
                    CUSTOM_SET_THEME => self.theme = Theme::from_dark(a >= 0.5),
                    _ => {}
                }
            }
        }
    }

    // ── Per-frame writes ───────────────────────────────────────────

    /// Write position and look into every bound handle. Handles that no
    /// longer exist in the scene are skipped.
    fn write_handles(&self, ctx: &mut EngineContext) {
        let center = ctx.surface.center();
        let pointer = ctx.surface.pointer();
        let look = self.theme.look();

        for (i, (body, handles)) in self.bodies.iter().zip(&self.handles).enumerate() {
            let planet_pos = body.position(i, center, pointer);
            let color = SDFColor::from_hex(body.color);

            if let Some(entity) = ctx.scene.get_mut_at(handles.planet_slot, handles.planet) {
                entity.pos = planet_pos;
                if let Some(mesh) = entity.mesh.as_mut() {
                    mesh.set_radius(body.size / 2.0);
                    mesh.color = color;
                    mesh.glow = Glow { radius: look.planet_glow, color, alpha: 1.0 };
                    mesh.opacity = look.planet_opacity;
                }
            }

            if let Some(entity) = ctx.scene.get_mut_at(handles.moon_slot, handles.moon) {
                entity.pos = body.moon.position(planet_pos);
                if let Some(mesh) = entity.mesh.as_mut() {
                    mesh.set_radius(body.moon.size / 2.0);
                    mesh.color = SDFColor::WHITE;
                    mesh.glow = Glow {
                        radius: look.moon_glow,
                        color: SDFColor::WHITE,
                        alpha: look.moon_glow_alpha,
                    };
                    mesh.opacity = look.moon_opacity;
                }
            }
        }
    }

    /// One faint ring per planet orbit around the (unshifted) center.
    /// Tessellated only when the body set, center or theme changes.
    #[cfg(feature = "vectors")]
    fn draw_rings(&mut self, ctx: &mut EngineContext) {
        let key = (ctx.surface.center(), self.theme.look().ring_alpha);
        if self.rings.key != Some(key) {
            let (center, alpha) = key;
            let color = VectorColor::WHITE.with_alpha(alpha);
            self.rings.geometry.clear();
            for body in &self.bodies {
                self.rings.geometry.stroke_circle(center, body.orbit_radius, RING_WIDTH, color);
            }
            self.rings.key = Some(key);
        }
        ctx.vectors.append(&self.rings.geometry);
    }

    fn emit_status(&self, ctx: &mut EngineContext) {
        let dark = if self.theme.is_dark() { 1.0 } else { 0.0 };
        ctx.emit_event(GameEvent::new(EVENT_THEME, dark, 0.0, 0.0));
        ctx.emit_event(GameEvent::new(EVENT_BODY_COUNT, self.bodies.len() as f32, 0.0, 0.0));
    }
}

impl Default for PortfolioBackdrop {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for PortfolioBackdrop {
    fn config(&self) -> GameConfig {
        GameConfig {
            // Nine planets and nine moons at the widest breakpoint
            max_sdf_instances: 32,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.rebuild(ctx);
        self.write_handles(ctx);
        ctx.clear_color = SDFColor::from_hex(self.theme.look().background);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32) {
        let previous_theme = self.theme;
        self.handle_input(input);
        if self.theme != previous_theme {
            log::info!("portfolio: theme -> {}", self.theme.name());
        }

        // Same-frame resizes collapse into one rebuild
        if input.resized() {
            self.rebuild(ctx);
        }

        for body in &mut self.bodies {
            body.advance(dt);
        }

        self.write_handles(ctx);

        #[cfg(feature = "vectors")]
        self.draw_rings(ctx);

        ctx.clear_color = SDFColor::from_hex(self.theme.look().background);
        self.emit_status(ctx);
    }

    fn shutdown(&mut self, ctx: &mut EngineContext) {
        ctx.scene.despawn_tagged(PLANET_TAG);
        ctx.scene.despawn_tagged(MOON_TAG);
        self.bodies.clear();
        self.handles.clear();
        #[cfg(feature = "vectors")]
        {
            self.rings.geometry.clear();
            self.rings.key = None;
        }
        log::info!("portfolio: shut down");
    }
}
