use glam::{Mat4, Vec3};

use crate::core::controller::{Button, Controller};
use crate::types::CameraUniform;

pub const CAMERA_SPEED: f32 = 2.5;
pub const MOUSE_SENSITIVITY: f32 = 0.1;
pub const PITCH_LIMIT: f32 = 89.0;

pub const FIELD_OF_VIEW: f32 = 45.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Camera movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Button that moves the camera this way while held
    pub const fn button(self) -> Button {
        match self {
            Direction::Forward => Button::KeyW,
            Direction::Backward => Button::KeyS,
            Direction::Left => Button::KeyA,
            Direction::Right => Button::KeyD,
            Direction::Up => Button::Space,
            Direction::Down => Button::Shift,
        }
    }
}

/// First-person fly camera. Yaw and pitch are in degrees.
#[derive(Debug, Clone)]
pub struct FirstPersonCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
}

impl FirstPersonCamera {
    pub fn new(position: Vec3) -> Self {
        let mut camera = Self {
            position,
            yaw: -90.0,
            pitch: 0.0,
            speed: CAMERA_SPEED,
            sensitivity: MOUSE_SENSITIVITY,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        };
        camera.update_vectors();
        camera
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Point `distance` units straight ahead
    pub fn point_ahead(&self, distance: f32) -> Vec3 {
        self.position + self.front * distance
    }

    pub fn process_keyboard(&mut self, direction: Direction, delta: f32) {
        let velocity = self.speed * delta;
        self.position += match direction {
            Direction::Forward => self.front * velocity,
            Direction::Backward => -self.front * velocity,
            Direction::Left => -self.right * velocity,
            Direction::Right => self.right * velocity,
            Direction::Up => Vec3::Y * velocity,
            Direction::Down => -Vec3::Y * velocity,
        };
    }

    /// Move along every direction whose button is held
    pub fn process_controller(&mut self, controller: &dyn Controller, delta: f32) {
        for direction in Direction::ALL {
            if controller.is_down(direction.button()) {
                self.process_keyboard(direction, delta);
            }
        }
    }

    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.sensitivity;
        self.pitch += y_offset * self.sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(FIELD_OF_VIEW.to_radians(), aspect_ratio, NEAR_PLANE, FAR_PLANE)
    }

    pub fn to_uniform(&self, aspect_ratio: f32) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
            projection: self.projection_matrix(aspect_ratio).to_cols_array_2d(),
            position: self.position.to_array(),
            _pad: 0.0,
        }
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize();
        self.right = self.front.cross(Vec3::Y).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 5.0))
    }
}
