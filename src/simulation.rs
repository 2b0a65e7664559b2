//! Headless playback: drive a scene object through fixed-step frames and
//! record where it ends up each frame.

use glam::Vec3;
use serde::Serialize;

use crate::frame::FixedStepFrames;
use crate::scene::{Geometry, SceneObject};
use crate::trajectory::Trajectory;

/// One recorded frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub frame: u64,
    pub time: f32,
    pub segment: usize,
    pub position: Vec3,
}

/// Start `trajectory` and sample it for `frames` steps of `delta` seconds.
/// A trajectory that cannot play yields samples at its fixed position.
pub fn simulate(trajectory: Trajectory, delta: f32, frames: u64) -> Vec<Sample> {
    let mut object = SceneObject::new("simulation", Geometry::default());
    object.trajectory = trajectory;
    object.trajectory.start();
    object.position = object.trajectory.current_position();

    if !object.trajectory.is_running() {
        log::warn!(
            "Trajectory has {} point(s), it will not move",
            object.trajectory.point_count()
        );
    }

    FixedStepFrames::new(delta, frames)
        .map(|frame| {
            object.update(frame.delta);
            Sample {
                frame: frame.number,
                time: frame.time,
                segment: object.trajectory.current_segment(),
                position: object.position,
            }
        })
        .collect()
}
