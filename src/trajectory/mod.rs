//! Keyframe trajectories: a closed loop of control points played back with
//! linear interpolation.

mod error;
mod persistence;
pub mod shapes;

pub use error::{Result, TrajectoryError};
pub use persistence::{format_points, parse_points, trajectory_file_name};
pub use shapes::Shape;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Shortest travel time a segment may have, in seconds
pub const MIN_SEGMENT_DURATION: f32 = 1.0e-3;

/// Travel time used when no duration is given
pub const DEFAULT_SEGMENT_DURATION: f32 = 1.0;

/// A single keyframe: where to be, and how long it takes to reach the next one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    position: Vec3,
    duration: f32,
}

impl ControlPoint {
    /// Zero, negative and non-finite durations become [`MIN_SEGMENT_DURATION`]
    pub fn new(position: Vec3, duration: f32) -> Self {
        Self {
            position,
            duration: clamp_duration(duration),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Seconds spent travelling from this point to the next one
    pub fn duration(&self) -> f32 {
        self.duration
    }
}

impl Default for ControlPoint {
    fn default() -> Self {
        Self::new(Vec3::ZERO, DEFAULT_SEGMENT_DURATION)
    }
}

fn clamp_duration(duration: f32) -> f32 {
    if duration.is_finite() {
        duration.max(MIN_SEGMENT_DURATION)
    } else {
        MIN_SEGMENT_DURATION
    }
}

/// Coarse playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    Idle,
    Playing,
}

/// Ordered, cyclic sequence of control points plus its playback cursor.
///
/// Segment `i` travels from point `i` to point `(i + 1) % len`, so the last
/// segment closes the loop back to the first point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    points: Vec<ControlPoint>,
    elapsed: f32,
    current: usize,
    running: bool,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an idle trajectory from existing points
    pub fn from_points(points: impl IntoIterator<Item = ControlPoint>) -> Self {
        Self {
            points: points.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Append a keyframe. Playback state is left alone, even mid-playback.
    pub fn add_control_point(&mut self, position: Vec3, duration: f32) {
        self.points.push(ControlPoint::new(position, duration));
    }

    pub fn clear_control_points(&mut self) {
        self.points.clear();
        self.reset_playback();
    }

    /// Begin playback from the first segment. Needs at least two points,
    /// otherwise nothing happens.
    pub fn start(&mut self) {
        if self.points.len() < 2 {
            log::debug!(
                "Ignoring start: trajectory has {} point(s), needs 2",
                self.points.len()
            );
            return;
        }

        self.running = true;
        self.elapsed = 0.0;
        self.current = 0;
    }

    /// Pause in place. `resume` continues from here, `start` rewinds.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Continue from where `stop` left off
    pub fn resume(&mut self) {
        if self.points.len() >= 2 {
            self.running = true;
        }
    }

    /// Advance playback by `delta` seconds.
    ///
    /// Time overflowing a segment carries into the following ones, so one
    /// large step ends where many small steps would.
    pub fn update(&mut self, delta: f32) {
        if !self.running || self.points.len() < 2 {
            return;
        }
        if !delta.is_finite() || delta <= 0.0 {
            return;
        }

        self.elapsed += delta;

        // A full loop returns to the same segment, so whole loops can be dropped
        let total = self.total_duration();
        if self.elapsed >= total {
            self.elapsed %= total;
        }

        while self.elapsed >= self.points[self.current].duration {
            self.elapsed -= self.points[self.current].duration;
            self.current = (self.current + 1) % self.points.len();
        }
    }

    /// Interpolated position. Always defined: zero when empty, the only
    /// point when there is one.
    pub fn current_position(&self) -> Vec3 {
        match self.points.len() {
            0 => Vec3::ZERO,
            1 => self.points[0].position,
            len => {
                let from = &self.points[self.current];
                let to = &self.points[(self.current + 1) % len];
                from.position.lerp(to.position, self.segment_progress())
            }
        }
    }

    /// Fraction of the current segment already travelled, in `[0, 1]`
    pub fn segment_progress(&self) -> f32 {
        match self.points.get(self.current) {
            Some(point) => (self.elapsed / point.duration).clamp(0.0, 1.0),
            None => 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> PlaybackState {
        if self.running {
            PlaybackState::Playing
        } else {
            PlaybackState::Idle
        }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn control_points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn control_point(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    pub fn current_segment(&self) -> usize {
        self.current
    }

    /// Seconds spent in the current segment
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Duration of one full loop
    pub fn total_duration(&self) -> f32 {
        self.points.iter().map(|p| p.duration).sum()
    }

    pub fn snapshot(&self) -> TrajectorySnapshot {
        TrajectorySnapshot {
            points: self.points.clone(),
            state: self.state(),
            current_segment: self.current,
            elapsed: self.elapsed,
            total_duration: self.total_duration(),
            position: self.current_position(),
        }
    }

    /// Swap in a new point list and rewind to idle
    fn replace_points(&mut self, points: Vec<ControlPoint>) {
        self.points = points;
        self.reset_playback();
    }

    fn reset_playback(&mut self) {
        self.elapsed = 0.0;
        self.current = 0;
        self.running = false;
    }
}

/// Serializable view of a trajectory for reports and JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySnapshot {
    pub points: Vec<ControlPoint>,
    pub state: PlaybackState,
    pub current_segment: usize,
    pub elapsed: f32,
    pub total_duration: f32,
    pub position: Vec3,
}
