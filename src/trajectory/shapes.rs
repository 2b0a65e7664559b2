//! Ready-made closed trajectories on the XZ plane

use clap::ValueEnum;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::Trajectory;

pub const CIRCLE_RADIUS: f32 = 3.0;
pub const CIRCLE_POINTS: usize = 8;
pub const CIRCLE_SEGMENT_DURATION: f32 = 1.0;

pub const SQUARE_SIZE: f32 = 2.0;
pub const SQUARE_SEGMENT_DURATION: f32 = 2.0;

pub const TRIANGLE_SIZE: f32 = 2.0;
pub const TRIANGLE_SEGMENT_DURATION: f32 = 1.5;

/// Regular polygon with `count` vertices on a circle of `radius`,
/// starting on +X and turning towards +Z
pub fn circle(radius: f32, count: usize, duration: f32) -> Trajectory {
    let mut trajectory = Trajectory::new();
    for i in 0..count {
        let angle = TAU * i as f32 / count as f32;
        trajectory.add_control_point(
            Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin()),
            duration,
        );
    }
    trajectory
}

/// Square with corners at `(±size, 0, ±size)`
pub fn square(size: f32, duration: f32) -> Trajectory {
    let mut trajectory = Trajectory::new();
    trajectory.add_control_point(Vec3::new(-size, 0.0, -size), duration);
    trajectory.add_control_point(Vec3::new(size, 0.0, -size), duration);
    trajectory.add_control_point(Vec3::new(size, 0.0, size), duration);
    trajectory.add_control_point(Vec3::new(-size, 0.0, size), duration);
    trajectory
}

pub fn triangle(size: f32, duration: f32) -> Trajectory {
    let mut trajectory = Trajectory::new();
    trajectory.add_control_point(Vec3::new(0.0, 0.0, size), duration);
    trajectory.add_control_point(Vec3::new(-size, 0.0, -size), duration);
    trajectory.add_control_point(Vec3::new(size, 0.0, -size), duration);
    trajectory
}

/// Preset shapes bound to the editor's number keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
}

impl Shape {
    /// Build the shape with its preset size and timing
    pub fn build(self) -> Trajectory {
        match self {
            Shape::Circle => circle(CIRCLE_RADIUS, CIRCLE_POINTS, CIRCLE_SEGMENT_DURATION),
            Shape::Square => square(SQUARE_SIZE, SQUARE_SEGMENT_DURATION),
            Shape::Triangle => triangle(TRIANGLE_SIZE, TRIANGLE_SEGMENT_DURATION),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Triangle => "triangle",
        }
    }
}
