//! Periodic shooting stars.
//!
//! The engine only schedules stars and tracks their lifetime; the host draws
//! each one as a CSS-animated streak and reports when its animation ends.
//! A star leaves the active set on whichever comes first: its lifetime
//! running out here, or the host's animation-end signal.

use crate::systems::rng::Rng;

/// Tuning for star spawning. All times in seconds, angles in degrees,
/// positions in percent of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarConfig {
    /// Seconds between spawns.
    pub interval: f32,
    /// Hard removal timeout measured from spawn.
    pub lifetime: f32,
    /// Fall animation duration range.
    pub duration: (f32, f32),
    /// Streak rotation range.
    pub angle: (f32, f32),
    /// Horizontal spawn band.
    pub left: (f32, f32),
    /// Vertical spawn band (upper part of the viewport).
    pub top: (f32, f32),
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            interval: 2.2,
            lifetime: 1.6,
            duration: (0.8, 1.7),
            angle: (-60.0, -20.0),
            left: (0.0, 100.0),
            top: (0.0, 40.0),
        }
    }
}

/// One active star with its spawn parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShootingStar {
    pub id: u32,
    pub left: f32,
    pub top: f32,
    pub duration: f32,
    pub angle: f32,
    /// Seconds since spawn.
    pub age: f32,
}

impl ShootingStar {
    /// Floats per star on the wire: id, left, top, duration, angle, age.
    pub const FLOATS: usize = 6;

    pub fn to_floats(&self) -> [f32; Self::FLOATS] {
        [self.id as f32, self.left, self.top, self.duration, self.angle, self.age]
    }
}

/// Scheduler and active set. Stars stay ordered by spawn time.
#[derive(Debug, Clone)]
pub struct ShootingStars {
    config: Option<StarConfig>,
    stars: Vec<ShootingStar>,
    capacity: usize,
    timer: f32,
    next_id: u32,
    revision: u32,
}

impl ShootingStars {
    /// `None` disables spawning entirely.
    pub fn new(config: Option<StarConfig>, capacity: usize) -> Self {
        Self {
            config,
            stars: Vec::with_capacity(capacity),
            capacity,
            timer: 0.0,
            next_id: 1,
            revision: 0,
        }
    }

    /// Age active stars, expire the ones past their lifetime, and spawn one
    /// star per elapsed interval.
    ///
    /// `dt` is wall time. After a long gap each owed star starts with the age
    /// it would have by now, so stars that would already have expired never
    /// appear.
    pub fn tick(&mut self, dt: f32, rng: &mut Rng) {
        let config = match self.config {
            Some(c) => c,
            None => return,
        };

        for star in &mut self.stars {
            star.age += dt;
        }
        let before = self.stars.len();
        self.stars.retain(|s| s.age < config.lifetime);
        if self.stars.len() != before {
            self.revision = self.revision.wrapping_add(1);
        }

        if config.interval <= 0.0 {
            return;
        }
        self.timer += dt;
        while self.timer >= config.interval {
            self.timer -= config.interval;
            // Time since this star's scheduled spawn
            let age = self.timer;
            if age < config.lifetime {
                self.spawn(&config, age, rng);
            }
        }
    }

    fn spawn(&mut self, config: &StarConfig, age: f32, rng: &mut Rng) {
        if self.stars.len() >= self.capacity {
            log::debug!("shooting star skipped: {} active", self.stars.len());
            return;
        }
        let star = ShootingStar {
            id: self.next_id,
            left: rng.range_f32(config.left.0, config.left.1),
            top: rng.range_f32(config.top.0, config.top.1),
            duration: rng.range_f32(config.duration.0, config.duration.1),
            angle: rng.range_f32(config.angle.0, config.angle.1),
            age,
        };
        self.next_id = self.next_id.wrapping_add(1).max(1);
        self.stars.push(star);
        self.revision = self.revision.wrapping_add(1);
    }

    /// Remove star `id` because its animation finished.
    /// Returns false if it was already gone.
    pub fn finish(&mut self, id: u32) -> bool {
        match self.stars.iter().position(|s| s.id == id) {
            Some(idx) => {
                self.stars.remove(idx);
                self.revision = self.revision.wrapping_add(1);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShootingStar> {
        self.stars.iter()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.stars.iter().any(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bumped on every add or remove.
    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// Write active stars as flat floats, replacing `out`'s contents.
    pub fn write_floats(&self, out: &mut Vec<f32>) {
        out.clear();
        for star in &self.stars {
            out.extend_from_slice(&star.to_floats());
        }
    }

    pub fn clear(&mut self) {
        if !self.stars.is_empty() {
            self.stars.clear();
            self.revision = self.revision.wrapping_add(1);
        }
        self.timer = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn run(stars: &mut ShootingStars, rng: &mut Rng, seconds: f32) {
        let frames = (seconds / FRAME).round() as usize;
        for _ in 0..frames {
            stars.tick(FRAME, rng);
        }
    }

    #[test]
    fn spawns_once_per_interval() {
        let mut stars = ShootingStars::new(Some(StarConfig::default()), 8);
        let mut rng = Rng::new(1);
        run(&mut stars, &mut rng, 2.1);
        assert!(stars.is_empty());
        run(&mut stars, &mut rng, 0.2);
        assert_eq!(stars.len(), 1);
    }

    #[test]
    fn spawn_parameters_in_range() {
        let config = StarConfig::default();
        let mut stars = ShootingStars::new(Some(config), 8);
        let mut rng = Rng::new(99);
        for _ in 0..50 {
            stars.tick(config.interval, &mut rng);
            let s = *stars.iter().last().unwrap();
            assert!((0.0..100.0).contains(&s.left));
            assert!((0.0..40.0).contains(&s.top), "top {} outside upper band", s.top);
            assert!((0.8..1.7).contains(&s.duration));
            assert!((-60.0..-20.0).contains(&s.angle));
            stars.finish(s.id);
        }
    }

    #[test]
    fn star_gone_after_lifetime_window() {
        let mut stars = ShootingStars::new(Some(StarConfig::default()), 8);
        let mut rng = Rng::new(5);
        stars.tick(2.2, &mut rng); // spawn at T
        let id = stars.iter().next().unwrap().id;
        run(&mut stars, &mut rng, 1.7);
        assert!(!stars.contains(id));
    }

    #[test]
    fn long_gap_only_spawns_stars_still_inside_their_lifetime() {
        let mut stars = ShootingStars::new(Some(StarConfig::default()), 8);
        let mut rng = Rng::new(8);
        // 10 intervals elapse at once, the last one 0.5 s ago
        stars.tick(2.2 * 10.0 + 0.5, &mut rng);
        assert_eq!(stars.len(), 1);
        let star = *stars.iter().next().unwrap();
        assert!((star.age - 0.5).abs() < 1e-3, "age {}", star.age);
        assert_eq!(star.id, 1);

        stars.tick(1.2, &mut rng);
        assert!(stars.is_empty());
    }

    #[test]
    fn finish_is_idempotent() {
        let mut stars = ShootingStars::new(Some(StarConfig::default()), 8);
        let mut rng = Rng::new(5);
        stars.tick(2.2, &mut rng);
        let id = stars.iter().next().unwrap().id;

        assert!(stars.finish(id));
        let rev = stars.revision();
        assert!(!stars.finish(id));
        assert_eq!(stars.revision(), rev);

        // The timeout firing later must not disturb anything either
        run(&mut stars, &mut rng, 1.7);
        assert!(!stars.contains(id));
    }

    #[test]
    fn capacity_limits_active_stars() {
        let config = StarConfig { lifetime: 100.0, ..StarConfig::default() };
        let mut stars = ShootingStars::new(Some(config), 2);
        let mut rng = Rng::new(3);
        for _ in 0..5 {
            stars.tick(config.interval, &mut rng);
        }
        assert_eq!(stars.len(), 2);
    }

    #[test]
    fn disabled_config_never_spawns() {
        let mut stars = ShootingStars::new(None, 8);
        let mut rng = Rng::new(3);
        stars.tick(100.0, &mut rng);
        assert!(stars.is_empty());
    }

    #[test]
    fn write_floats_matches_wire_layout() {
        let mut stars = ShootingStars::new(Some(StarConfig::default()), 8);
        let mut rng = Rng::new(11);
        stars.tick(2.2, &mut rng);
        let mut out = vec![123.0];
        stars.write_floats(&mut out);
        assert_eq!(out.len(), ShootingStar::FLOATS);
        assert_eq!(out[0], 1.0);
        assert_eq!(out[5], 0.0);
    }
}
