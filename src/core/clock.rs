use std::time::Instant;

/// Longest step handed to the scene, in seconds
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Frame clock - delta time per tick plus total running time
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }

    /// Seconds since the previous tick, capped at [`MAX_FRAME_DELTA`]
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta.min(MAX_FRAME_DELTA)
    }

    /// Seconds since the clock was created, never decreasing
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Forget time spent since the last tick
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
