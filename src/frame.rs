/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Deterministic frames with a constant delta, for headless playback
/// Use this in a loop: `for frame in FixedStepFrames::new(1.0 / 60.0, 600) { ... }`
#[derive(Debug, Clone)]
pub struct FixedStepFrames {
    delta: f32,
    remaining: u64,
    frame_number: u64,
}

impl FixedStepFrames {
    pub fn new(delta: f32, count: u64) -> Self {
        Self {
            delta,
            remaining: count,
            frame_number: 0,
        }
    }
}

impl Iterator for FixedStepFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.frame_number += 1;

        // Multiply instead of accumulating so long runs don't drift
        let time = self.frame_number as f32 * self.delta;
        Some(FrameInfo::new(self.frame_number, time, self.delta))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
