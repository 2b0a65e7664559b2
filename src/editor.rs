//! Editor state and the discrete commands that mutate it.
//!
//! All process-wide state of the editor lives in [`EditorState`], which is
//! handed by reference to input handling and to the per-frame update.

use glam::Vec3;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::camera::FirstPersonCamera;
use crate::core::controller::Controller;
use crate::scene::Scene;
use crate::trajectory::{trajectory_file_name, ControlPoint, PlaybackState, Result, Shape};
use crate::types::{CameraUniform, ObjectUniform, RotationAxis};

/// Distance ahead of the camera for points added from the keyboard
pub const KEY_POINT_DISTANCE: f32 = 2.0;
/// Distance ahead of the camera for points added with a click
pub const CLICK_POINT_DISTANCE: f32 = 3.0;
/// Segment duration given to interactively added points
pub const INTERACTIVE_POINT_DURATION: f32 = 2.0;

/// Discrete input events understood by the editor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorCommand {
    ToggleTrajectoryMode,
    SelectNextObject,
    TogglePointVisualization,
    SetRotation(RotationAxis),
    AddPoint { position: Vec3, duration: f32 },
    AddPointAhead { distance: f32, duration: f32 },
    Start,
    Stop,
    TogglePlayback,
    Clear,
    Save,
    Load,
    ApplyShape(Shape),
    Info,
}

impl EditorCommand {
    /// Editing commands only act while trajectory mode is on
    pub fn requires_trajectory_mode(&self) -> bool {
        !matches!(
            self,
            EditorCommand::ToggleTrajectoryMode
                | EditorCommand::SelectNextObject
                | EditorCommand::TogglePointVisualization
                | EditorCommand::SetRotation(_)
        )
    }
}

/// What applying a command did
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Applied,
    /// Not applicable right now (wrong mode, nothing selected, too few points)
    Ignored,
    Report(TrajectoryReport),
}

/// Summary of the selected object's trajectory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryReport {
    pub object: String,
    pub point_count: usize,
    pub state: PlaybackState,
    pub points: Vec<ControlPoint>,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone)]
pub struct FrameUniforms {
    pub camera: CameraUniform,
    pub objects: Vec<ObjectUniform>,
    pub markers: Vec<ObjectUniform>,
}

#[derive(Debug, Clone)]
pub struct EditorState {
    pub scene: Scene,
    pub camera: FirstPersonCamera,
    trajectory_mode: bool,
    rotation_axis: RotationAxis,
    trajectory_dir: PathBuf,
}

impl EditorState {
    pub fn new(scene: Scene, trajectory_dir: impl Into<PathBuf>) -> Self {
        Self {
            scene,
            camera: FirstPersonCamera::default(),
            trajectory_mode: false,
            rotation_axis: RotationAxis::None,
            trajectory_dir: trajectory_dir.into(),
        }
    }

    pub fn trajectory_mode(&self) -> bool {
        self.trajectory_mode
    }

    pub fn rotation_axis(&self) -> RotationAxis {
        self.rotation_axis
    }

    pub fn trajectory_dir(&self) -> &Path {
        &self.trajectory_dir
    }

    /// File the selected object saves to and loads from
    pub fn selected_trajectory_path(&self) -> Option<PathBuf> {
        self.scene
            .selected()
            .map(|object| self.trajectory_dir.join(trajectory_file_name(&object.name)))
    }

    /// Apply one input event. I/O failures from save and load are returned
    /// and leave the scene untouched.
    pub fn apply(&mut self, command: EditorCommand) -> Result<CommandOutcome> {
        if command.requires_trajectory_mode() && !self.trajectory_mode {
            log::debug!("Ignoring {:?} outside trajectory mode", command);
            return Ok(CommandOutcome::Ignored);
        }

        match command {
            EditorCommand::ToggleTrajectoryMode => {
                self.trajectory_mode = !self.trajectory_mode;
                log::info!(
                    "Trajectory mode {}",
                    if self.trajectory_mode { "on" } else { "off" }
                );
                if let Some(object) = self.scene.selected() {
                    log::info!("Selected object: {}", object.name);
                }
                Ok(CommandOutcome::Applied)
            }
            EditorCommand::SelectNextObject => match self.scene.select_next() {
                Some(object) => {
                    log::info!("Selected object: {}", object.name);
                    Ok(CommandOutcome::Applied)
                }
                None => Ok(CommandOutcome::Ignored),
            },
            EditorCommand::TogglePointVisualization => {
                let shown = self.scene.toggle_control_points();
                log::info!("Control points {}", if shown { "shown" } else { "hidden" });
                Ok(CommandOutcome::Applied)
            }
            EditorCommand::SetRotation(axis) => {
                self.rotation_axis = axis;
                Ok(CommandOutcome::Applied)
            }
            EditorCommand::AddPointAhead { distance, duration } => {
                let position = self.camera.point_ahead(distance);
                self.apply_to_selected(EditorCommand::AddPoint { position, duration })
            }
            other => self.apply_to_selected(other),
        }
    }

    fn apply_to_selected(&mut self, command: EditorCommand) -> Result<CommandOutcome> {
        let path = self.selected_trajectory_path();
        let (Some(object), Some(path)) = (self.scene.selected_mut(), path) else {
            log::debug!("Ignoring {:?}: no object selected", command);
            return Ok(CommandOutcome::Ignored);
        };
        let trajectory = &mut object.trajectory;

        match command {
            EditorCommand::AddPoint { position, duration } => {
                trajectory.add_control_point(position, duration);
                log::info!(
                    "Point added at {:?}, {} total",
                    position,
                    trajectory.point_count()
                );
            }
            EditorCommand::Start => {
                trajectory.start();
                if !trajectory.is_running() {
                    return Ok(CommandOutcome::Ignored);
                }
                log::info!("Trajectory of {} started", object.name);
            }
            EditorCommand::Stop => {
                trajectory.stop();
                log::info!("Trajectory of {} stopped", object.name);
            }
            EditorCommand::TogglePlayback => {
                if trajectory.is_running() {
                    trajectory.stop();
                    log::info!("Trajectory of {} stopped", object.name);
                } else {
                    trajectory.start();
                    if !trajectory.is_running() {
                        return Ok(CommandOutcome::Ignored);
                    }
                    log::info!("Trajectory of {} started", object.name);
                }
            }
            EditorCommand::Clear => {
                trajectory.clear_control_points();
                log::info!("Trajectory of {} cleared", object.name);
            }
            EditorCommand::Save => {
                trajectory.save_to_file(&path)?;
                log::info!("Trajectory saved to {:?}", path);
            }
            EditorCommand::Load => {
                trajectory.load_from_file(&path)?;
                log::info!(
                    "Trajectory loaded from {:?}, {} points",
                    path,
                    trajectory.point_count()
                );
            }
            EditorCommand::ApplyShape(shape) => {
                *trajectory = shape.build();
                log::info!(
                    "{} trajectory created with {} points",
                    shape.name(),
                    trajectory.point_count()
                );
            }
            EditorCommand::Info => {
                let report = TrajectoryReport {
                    object: object.name.clone(),
                    point_count: trajectory.point_count(),
                    state: trajectory.state(),
                    points: trajectory.control_points().to_vec(),
                };
                return Ok(CommandOutcome::Report(report));
            }
            EditorCommand::ToggleTrajectoryMode
            | EditorCommand::SelectNextObject
            | EditorCommand::TogglePointVisualization
            | EditorCommand::SetRotation(_)
            | EditorCommand::AddPointAhead { .. } => return Ok(CommandOutcome::Ignored),
        }

        Ok(CommandOutcome::Applied)
    }

    /// Per-frame step: held buttons and mouse look move the camera, then
    /// playing trajectories advance
    pub fn advance(&mut self, delta: f32, controller: &dyn Controller) {
        self.camera.process_controller(controller, delta);

        let (dx, dy) = controller.mouse_delta();
        if dx != 0.0 || dy != 0.0 {
            // Screen y grows downward, pitch grows upward
            self.camera.process_mouse_movement(dx, -dy, true);
        }

        self.scene.update(delta);
    }

    pub fn frame_uniforms(&self, time: f32, aspect_ratio: f32) -> FrameUniforms {
        FrameUniforms {
            camera: self.camera.to_uniform(aspect_ratio),
            objects: self.scene.object_uniforms(time, self.rotation_axis),
            markers: self.scene.control_point_markers(),
        }
    }
}
