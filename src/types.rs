use glam::{Mat4, Quat, Vec3};

/// Camera matrices for the vertex stage
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad: f32,
}

/// Per-object model matrix plus a flat tint for markers
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub textured: f32, // 1.0 samples the object's texture, 0.0 uses color
}

impl ObjectUniform {
    pub fn textured(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [1.0, 1.0, 1.0],
            textured: 1.0,
        }
    }

    pub fn flat(model: Mat4, color: [f32; 3]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color,
            textured: 0.0,
        }
    }

    pub fn translation(&self) -> Vec3 {
        Mat4::from_cols_array_2d(&self.model).w_axis.truncate()
    }
}

/// Axis the selected spin animation turns around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum RotationAxis {
    #[default]
    None,
    X,
    Y,
    Z,
}

impl RotationAxis {
    pub fn rotation(self, angle: f32) -> Quat {
        match self {
            RotationAxis::None => Quat::IDENTITY,
            RotationAxis::X => Quat::from_rotation_x(angle),
            RotationAxis::Y => Quat::from_rotation_y(angle),
            RotationAxis::Z => Quat::from_rotation_z(angle),
        }
    }
}
