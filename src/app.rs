//! Interactive editor window. Input and timing come from winit; the frame's
//! uniforms are produced for a renderer but nothing is drawn here.

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::core::{Clock, WinitController};
use crate::editor::{CommandOutcome, EditorCommand, EditorState};
use crate::scene::{Geometry, Scene, SceneObject};

const INITIAL_WINDOW_WIDTH: u32 = 1000;
const INITIAL_WINDOW_HEIGHT: u32 = 1000;

pub const CONTROLS: &str = "\
T - toggle trajectory mode
P / left click - add control point ahead of the camera (trajectory mode)
Space - start/stop trajectory (trajectory mode)
C - clear trajectory (trajectory mode)
S / L - save / load trajectory file (trajectory mode)
1 / 2 / 3 - circle / square / triangle trajectory (trajectory mode)
I - print trajectory info (trajectory mode)
O - select next object
V - show/hide control points
X / Y / Z - spin axis
WASD, Space/Shift - move camera; mouse - look around
Escape - quit";

pub struct App {
    editor: EditorState,
    controller: WinitController,
    clock: Clock,
    window: Option<Arc<Window>>,
    title: String,
}

impl App {
    pub fn new(editor: EditorState) -> Self {
        Self {
            editor,
            controller: WinitController::new(),
            clock: Clock::new(),
            window: None,
            title: String::new(),
        }
    }

    fn handle_command(&mut self, command: EditorCommand) {
        let mode_before = self.editor.trajectory_mode();

        match self.editor.apply(command) {
            Ok(CommandOutcome::Report(report)) => match serde_json::to_string_pretty(&report) {
                Ok(text) => log::info!("Trajectory info:\n{}", text),
                Err(e) => log::warn!("Failed to format trajectory info: {}", e),
            },
            Ok(CommandOutcome::Applied) | Ok(CommandOutcome::Ignored) => {}
            Err(e) => log::warn!("{:?} failed: {}", command, e),
        }

        if mode_before != self.editor.trajectory_mode() {
            self.update_cursor();
        }
    }

    /// Free cursor for clicking points in trajectory mode, captured otherwise
    fn update_cursor(&self) {
        let Some(window) = &self.window else {
            return;
        };

        let free = self.editor.trajectory_mode();
        let grab = if free {
            window.set_cursor_grab(CursorGrabMode::None)
        } else {
            window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        };
        if let Err(e) = grab {
            log::debug!("Cursor grab unavailable: {}", e);
        }
        window.set_cursor_visible(free);
    }

    fn redraw(&mut self) {
        let Some(window) = self.window.clone() else {
            return;
        };

        let delta = self.clock.tick();
        self.editor.advance(delta, &self.controller);
        self.controller.reset_deltas();

        let size = window.inner_size();
        let aspect_ratio = size.width.max(1) as f32 / size.height.max(1) as f32;
        let uniforms = self.editor.frame_uniforms(self.clock.elapsed(), aspect_ratio);
        log::trace!(
            "Frame: {} objects, {} markers",
            uniforms.objects.len(),
            uniforms.markers.len()
        );

        self.update_title(&window);
    }

    /// Window title doubles as a status line
    fn update_title(&mut self, window: &Window) {
        let mode = if self.editor.trajectory_mode() { "trajectory" } else { "camera" };
        let title = match self.editor.scene.selected() {
            Some(object) => format!(
                "Trajectory Editor [{}] {} ({:.2}, {:.2}, {:.2}) {} pts {:?}",
                mode,
                object.name,
                object.position.x,
                object.position.y,
                object.position.z,
                object.trajectory.point_count(),
                object.trajectory.state(),
            ),
            None => format!("Trajectory Editor [{}]", mode),
        };

        if title != self.title {
            window.set_title(&title);
            self.title = title;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Trajectory Editor")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.update_cursor();
        self.clock.reset();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(),
            event => {
                if let Some(command) = self.controller.process_event(&event) {
                    self.handle_command(command);
                }
            }
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        // Look only while the cursor is captured
        if !self.editor.trajectory_mode() {
            self.controller.process_device_event(&event);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Build a scene with one cube per name and run the editor until closed
pub fn run(object_names: Vec<String>, trajectory_dir: PathBuf) -> Result<()> {
    let scene = object_names
        .into_iter()
        .enumerate()
        .fold(Scene::new(), |scene, (id, name)| {
            let geometry = Geometry {
                id: id as u32,
                ..Geometry::unit_cube()
            };
            scene.with_object(SceneObject::new(name, geometry))
        });

    let event_loop = EventLoop::new()?;
    let mut app = App::new(EditorState::new(scene, trajectory_dir));

    log::info!("Controls:\n{}", CONTROLS);
    event_loop.run_app(&mut app)?;

    Ok(())
}
