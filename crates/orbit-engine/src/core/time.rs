/// Variable-step frame clock.
///
/// Clamps each host frame delta to `[0, max_dt]` so a tab resumed from the
/// background advances by at most one capped step instead of jumping.
/// The unclamped wall delta is kept for timers that must follow real time.
pub struct FrameClock {
    max_dt: f32,
    /// Engine time in seconds (sum of clamped deltas).
    elapsed: f64,
    /// Last frame's wall delta: finite and non-negative, never clamped above.
    wall_dt: f32,
    frame: u64,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt: max_dt.max(0.0),
            elapsed: 0.0,
            wall_dt: 0.0,
            frame: 0,
        }
    }

    /// Register one host frame. Returns the delta the simulation should use.
    pub fn advance(&mut self, raw_dt: f32) -> f32 {
        self.wall_dt = if raw_dt.is_finite() { raw_dt.max(0.0) } else { 0.0 };
        let dt = self.wall_dt.min(self.max_dt);
        self.elapsed += dt as f64;
        self.frame += 1;
        dt
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Wall-clock delta of the last frame.
    pub fn wall_dt(&self) -> f32 {
        self.wall_dt
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }
}
