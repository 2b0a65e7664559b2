use glam::{Mat4, Quat, Vec3};
use std::path::PathBuf;

use crate::trajectory::Trajectory;
use crate::types::{ObjectUniform, RotationAxis};

/// Tint of the small cubes drawn at control points
pub const MARKER_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// Handle to geometry uploaded by the renderer. Opaque to the scene.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Geometry {
    pub id: u32,
    pub vertex_count: u32,
    pub texture_path: Option<PathBuf>,
}

impl Geometry {
    /// 12 triangles, no texture
    pub fn unit_cube() -> Self {
        Self {
            id: 0,
            vertex_count: 36,
            texture_path: None,
        }
    }
}

/// Renderable entity whose position is set by hand or by its trajectory
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub geometry: Geometry,
    pub trajectory: Trajectory,
    pub position: Vec3,
    /// Euler angles in radians, applied X then Y then Z
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            name: name.into(),
            geometry,
            trajectory: Trajectory::new(),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Advance the trajectory and follow it. Idle trajectories leave the
    /// position untouched.
    pub fn update(&mut self, delta: f32) {
        if !self.trajectory.is_running() {
            return;
        }
        self.trajectory.update(delta);
        self.position = self.trajectory.current_position();
    }

    /// `translate * base rotation * spin * scale`
    pub fn model_matrix(&self, spin_angle: f32, spin_axis: RotationAxis) -> Mat4 {
        let base = Quat::from_euler(glam::EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(
            self.scale,
            base * spin_axis.rotation(spin_angle),
            self.position,
        )
    }
}

/// Scene objects plus editor selection and marker visibility
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    selected: usize,
    show_control_points: bool,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    pub fn add_object(&mut self, object: SceneObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [SceneObject] {
        &mut self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&SceneObject> {
        self.objects.get(self.selected)
    }

    pub fn selected_mut(&mut self) -> Option<&mut SceneObject> {
        self.objects.get_mut(self.selected)
    }

    /// Move the selection forward, wrapping to the first object
    pub fn select_next(&mut self) -> Option<&SceneObject> {
        if self.objects.is_empty() {
            return None;
        }
        self.selected = (self.selected + 1) % self.objects.len();
        self.objects.get(self.selected)
    }

    pub fn show_control_points(&self) -> bool {
        self.show_control_points
    }

    /// Flip marker visibility and return the new value
    pub fn toggle_control_points(&mut self) -> bool {
        self.show_control_points = !self.show_control_points;
        self.show_control_points
    }

    /// Per-frame step: playing objects follow their trajectories
    pub fn update(&mut self, delta: f32) {
        for object in &mut self.objects {
            object.update(delta);
            if object.trajectory.is_running() {
                log::trace!("{} at {:?}", object.name, object.position);
            }
        }
    }

    pub fn object_uniforms(&self, spin_angle: f32, spin_axis: RotationAxis) -> Vec<ObjectUniform> {
        self.objects
            .iter()
            .map(|object| ObjectUniform::textured(object.model_matrix(spin_angle, spin_axis)))
            .collect()
    }

    /// Markers for the selected object's control points, empty when hidden
    pub fn control_point_markers(&self) -> Vec<ObjectUniform> {
        if !self.show_control_points {
            return Vec::new();
        }

        self.selected()
            .map(|object| {
                object
                    .trajectory
                    .control_points()
                    .iter()
                    .map(|point| ObjectUniform::flat(Mat4::from_translation(point.position()), MARKER_COLOR))
                    .collect()
            })
            .unwrap_or_default()
    }
}
