//! Orbital body generation and motion.
//!
//! Angles stay f64 and are never wrapped, so advancing is exactly additive.
//! Only convert to f32 at the final screen-coordinate step.

use glam::Vec2;
use orbit_engine::Rng;
use std::f64::consts::TAU;

/// Planet palette, cycled by body index.
pub const PALETTE: [u32; 8] = [
    0xFF00A8, // magenta
    0x9D00FF, // violet
    0x00E0FF, // sky
    0xFFC300, // amber
    0x007BFF, // blue
    0xFF4500, // orange-red
    0x39FF14, // neon green
    0x00FFFF, // cyan
];

/// Viewport widths (px) where the body count steps up.
pub const BREAKPOINT_SM: f32 = 576.0;
pub const BREAKPOINT_LG: f32 = 992.0;

pub const PLANET_SIZE_MIN: f32 = 8.0;
pub const PLANET_SIZE_MAX: f32 = 80.0;
pub const MOON_SIZE_MIN: f32 = 4.0;

/// Sampling bands for the random orbital parameters.
pub const PLANET_SPEED: (f64, f64) = (0.02, 0.04);
pub const MOON_SPEED: (f64, f64) = (0.03, 0.05);
pub const MOON_ORBIT: (f64, f64) = (10.0, 50.0);
pub const MOON_SIZE_FACTOR: (f64, f64) = (0.18, 0.43);

/// Radians per second per unit of angular speed.
pub const ANGULAR_SCALE: f64 = TAU * 0.2;

/// A moon on a circular orbit around its planet's current position.
#[derive(Debug, Clone, PartialEq)]
pub struct Moon {
    pub angle: f64,
    pub orbit_radius: f32,
    pub size: f32,
    pub angular_speed: f64,
}

impl Moon {
    pub fn advance(&mut self, dt: f32) {
        self.angle += self.angular_speed * dt as f64 * ANGULAR_SCALE;
    }

    /// Offset from the parent planet's center.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(
            (self.angle.cos() * self.orbit_radius as f64) as f32,
            (self.angle.sin() * self.orbit_radius as f64) as f32,
        )
    }

    pub fn position(&self, parent: Vec2) -> Vec2 {
        parent + self.offset()
    }
}

/// One planet with its moon. Position is never stored; it is derived from
/// angle, radius, center and parallax every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub angle: f64,
    pub orbit_radius: f32,
    /// Diameter in pixels, within [PLANET_SIZE_MIN, PLANET_SIZE_MAX].
    pub size: f32,
    /// Packed 0xRRGGBB from `PALETTE`.
    pub color: u32,
    pub angular_speed: f64,
    pub moon: Moon,
}

impl CelestialBody {
    /// Advance planet and moon by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.angle += self.angular_speed * dt as f64 * ANGULAR_SCALE;
        self.moon.advance(dt);
    }

    /// Pointer-driven depth offset. Outer and faster bodies shift more.
    pub fn parallax(&self, index: usize, pointer: Vec2) -> Vec2 {
        let i = index as f32;
        let speed = self.angular_speed as f32;
        Vec2::new(
            pointer.x * (20.0 + 6.0 * i) * speed,
            pointer.y * (12.0 + 4.0 * i) * speed,
        )
    }

    /// Screen position for body `index` around `center`.
    pub fn position(&self, index: usize, center: Vec2, pointer: Vec2) -> Vec2 {
        let orbit = Vec2::new(
            (self.angle.cos() * self.orbit_radius as f64) as f32,
            (self.angle.sin() * self.orbit_radius as f64) as f32,
        );
        center + orbit + self.parallax(index, pointer)
    }
}

/// Responsive body count for a viewport width.
pub fn planet_count_for_width(width: f32) -> usize {
    if width < BREAKPOINT_SM {
        4
    } else if width < BREAKPOINT_LG {
        6
    } else {
        9
    }
}

/// Generate `count` bodies scaled to the smaller viewport dimension.
/// Angles, speeds and moon parameters are drawn from `rng`.
pub fn compute_planets(count: usize, width: f32, height: f32, rng: &mut Rng) -> Vec<CelestialBody> {
    let min = width.min(height).max(0.0) as f64;

    (0..count)
        .map(|i| {
            let orbit_radius = (min * (0.12 + 0.065 * i as f64)).round() as f32;
            let raw_size = (min * (0.02 + 0.006 * (i % 4) as f64)).round();
            let size = (raw_size as f32).clamp(PLANET_SIZE_MIN, PLANET_SIZE_MAX);

            // Moon size follows the unclamped planet size
            let moon = Moon {
                angle: rng.range(0.0, TAU),
                orbit_radius: rng.range(MOON_ORBIT.0, MOON_ORBIT.1) as f32,
                size: ((raw_size * rng.range(MOON_SIZE_FACTOR.0, MOON_SIZE_FACTOR.1)).round() as f32)
                    .max(MOON_SIZE_MIN),
                angular_speed: rng.range(MOON_SPEED.0, MOON_SPEED.1),
            };

            CelestialBody {
                angle: rng.range(0.0, TAU),
                orbit_radius,
                size,
                color: PALETTE[i % PALETTE.len()],
                angular_speed: rng.range(PLANET_SPEED.0, PLANET_SPEED.1),
                moon,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn count_and_ranges_hold_for_many_viewports() {
        let mut rng = Rng::new(1);
        for &(w, h) in &[(320.0, 640.0), (800.0, 600.0), (1200.0, 800.0), (3840.0, 2160.0), (1.0, 1.0)] {
            for count in [0usize, 1, 4, 6, 9, 12] {
                let bodies = compute_planets(count, w, h, &mut rng);
                assert_eq!(bodies.len(), count);
                for b in &bodies {
                    assert!((PLANET_SIZE_MIN..=PLANET_SIZE_MAX).contains(&b.size), "size {}", b.size);
                    assert!(b.orbit_radius >= 0.0);
                    assert!((0.0..TAU).contains(&b.angle));
                    assert!((0.02..0.04).contains(&b.angular_speed));
                    assert!((10.0..=50.0).contains(&b.moon.orbit_radius));
                    assert!(b.moon.size >= MOON_SIZE_MIN);
                    assert!((0.03..0.05).contains(&b.moon.angular_speed));
                }
            }
        }
    }

    #[test]
    fn scenario_1200_by_800() {
        let mut rng = Rng::new(2);
        let bodies = compute_planets(9, 1200.0, 800.0, &mut rng);
        assert_eq!(bodies[0].orbit_radius, 96.0);
        assert_eq!(bodies[8].orbit_radius, 512.0);
        // round(800 * 0.02) = 16, round(800 * 0.038) = 30
        assert_eq!(bodies[0].size, 16.0);
        assert_eq!(bodies[3].size, 30.0);
        assert_eq!(bodies[4].size, 16.0);
        assert_eq!(bodies[0].color, PALETTE[0]);
        assert_eq!(bodies[8].color, PALETTE[0]);
    }

    #[test]
    fn tiny_viewport_clamps_sizes_up() {
        let mut rng = Rng::new(3);
        let bodies = compute_planets(4, 100.0, 100.0, &mut rng);
        assert!(bodies.iter().all(|b| b.size == PLANET_SIZE_MIN));
        assert!(bodies.iter().all(|b| b.moon.size == MOON_SIZE_MIN));
    }

    #[test]
    fn huge_viewport_clamps_sizes_down() {
        let mut rng = Rng::new(3);
        let bodies = compute_planets(4, 10_000.0, 10_000.0, &mut rng);
        assert!(bodies.iter().all(|b| b.size == PLANET_SIZE_MAX));
    }

    #[test]
    fn zero_viewport_gives_degenerate_but_finite_bodies() {
        let mut rng = Rng::new(4);
        let bodies = compute_planets(4, 0.0, 0.0, &mut rng);
        for (i, b) in bodies.iter().enumerate() {
            assert_eq!(b.orbit_radius, 0.0);
            let p = b.position(i, Vec2::ZERO, Vec2::new(1.0, -1.0));
            assert!(p.is_finite());
            assert!(b.moon.position(p).is_finite());
        }
    }

    #[test]
    fn breakpoints() {
        assert_eq!(planet_count_for_width(0.0), 4);
        assert_eq!(planet_count_for_width(575.0), 4);
        assert_eq!(planet_count_for_width(576.0), 6);
        assert_eq!(planet_count_for_width(577.0), 6);
        assert_eq!(planet_count_for_width(991.0), 6);
        assert_eq!(planet_count_for_width(992.0), 9);
    }

    #[test]
    fn zero_step_changes_nothing() {
        let mut rng = Rng::new(5);
        let mut body = compute_planets(3, 1200.0, 800.0, &mut rng).remove(2);
        let center = Vec2::new(600.0, 400.0);
        let pointer = Vec2::new(0.3, -0.2);
        let before = (body.position(2, center, pointer), body.clone());
        body.advance(0.0);
        assert_eq!(body, before.1);
        assert_eq!(body.position(2, center, pointer), before.0);
    }

    #[test]
    fn advance_is_additive() {
        let mut rng = Rng::new(6);
        let template = compute_planets(1, 1200.0, 800.0, &mut rng).remove(0);
        for &(dt1, dt2) in &[(0.016_f32, 0.017_f32), (0.5, 0.25), (0.0, 0.1), (1.0, 3.0)] {
            let mut split = template.clone();
            split.advance(dt1);
            split.advance(dt2);
            let mut once = template.clone();
            once.advance(dt1 + dt2);
            assert!((split.angle - once.angle).abs() < 1e-6);
            assert!((split.moon.angle - once.moon.angle).abs() < 1e-6);
        }
    }

    #[test]
    fn advance_uses_scaled_speed() {
        let mut rng = Rng::new(7);
        let mut body = compute_planets(1, 1200.0, 800.0, &mut rng).remove(0);
        let start = body.angle;
        body.advance(1.0);
        assert!(close(body.angle - start, body.angular_speed * TAU * 0.2));
    }

    #[test]
    fn moon_tracks_current_parent_position() {
        let mut rng = Rng::new(8);
        let mut bodies = compute_planets(6, 900.0, 700.0, &mut rng);
        let center = Vec2::new(450.0, 350.0);
        for frame in 0..120 {
            let pointer = Vec2::new((frame as f32 * 0.1).sin(), (frame as f32 * 0.07).cos());
            for (i, b) in bodies.iter_mut().enumerate() {
                b.advance(1.0 / 60.0);
                let planet = b.position(i, center, pointer);
                let moon = b.moon.position(planet);
                assert!((moon - planet - b.moon.offset()).length() < 1e-3);
                assert!(((moon - planet).length() - b.moon.orbit_radius).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn parallax_grows_with_index_and_vanishes_at_rest() {
        let mut rng = Rng::new(9);
        let mut body = compute_planets(1, 1200.0, 800.0, &mut rng).remove(0);
        body.angular_speed = 0.03;
        assert_eq!(body.parallax(3, Vec2::ZERO), Vec2::ZERO);
        let near = body.parallax(0, Vec2::ONE);
        let far = body.parallax(8, Vec2::ONE);
        assert!((near.x - 0.6).abs() < 1e-6 && (near.y - 0.36).abs() < 1e-6);
        assert!(far.x > near.x && far.y > near.y);
    }
}
