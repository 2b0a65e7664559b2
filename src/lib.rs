pub mod app;
pub mod camera;
pub mod cli;
pub mod core;
pub mod editor;
pub mod frame;
pub mod scene;
pub mod simulation;
pub mod trajectory;
pub mod types;

pub use camera::{Direction, FirstPersonCamera};
pub use editor::{CommandOutcome, EditorCommand, EditorState};
pub use scene::{Geometry, Scene, SceneObject};
pub use trajectory::{ControlPoint, PlaybackState, Shape, Trajectory, TrajectoryError};
