use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};
use crate::editor::{
    EditorCommand, CLICK_POINT_DISTANCE, INTERACTIVE_POINT_DURATION, KEY_POINT_DISTANCE,
};
use crate::trajectory::Shape;
use crate::types::RotationAxis;

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Current mouse position (relative to window)
    mouse_position: Option<(f32, f32)>,
    /// Mouse movement delta since last reset
    mouse_delta: (f32, f32),
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pressed_vec: Vec::new(),
            mouse_position: None,
            mouse_delta: (0.0, 0.0),
        }
    }

    /// Track held buttons and cursor motion. Returns the discrete editor
    /// command for a fresh key or mouse press, if any.
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<EditorCommand> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(keycode) = event.physical_key else {
                    return None;
                };
                if let Some(button) = keycode_to_button(keycode) {
                    self.set_button(button, event.state);
                }
                if event.state == ElementState::Pressed && !event.repeat {
                    command_for_key(keycode)
                } else {
                    None
                }
            }
            WindowEvent::MouseInput { state: ElementState::Pressed, button, .. } => {
                command_for_mouse(*button)
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x as f32, position.y as f32));
                None
            }
            WindowEvent::Focused(false) => {
                // Releases are lost while unfocused
                self.release_all();
                None
            }
            _ => None,
        }
    }

    /// Feed raw pointer motion from the device. Unlike cursor positions it
    /// keeps arriving when the cursor is locked or pinned at a window edge.
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.mouse_motion(*dx as f32, *dy as f32);
        }
    }

    /// Accumulate look motion until the next `reset_deltas`
    pub fn mouse_motion(&mut self, dx: f32, dy: f32) {
        self.mouse_delta.0 += dx;
        self.mouse_delta.1 += dy;
    }

    /// Reset per-frame state (mouse delta)
    /// Call this at the end of each frame after processing input
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
    }

    /// Get current mouse position (if available)
    pub fn mouse_position(&self) -> Option<(f32, f32)> {
        self.mouse_position
    }

    fn set_button(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                }
            }
        }
    }

    fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }

    fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }
}

/// Map Winit KeyCode to a held Button
pub fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
    match keycode {
        KeyCode::KeyW => Some(Button::KeyW),
        KeyCode::KeyA => Some(Button::KeyA),
        KeyCode::KeyS => Some(Button::KeyS),
        KeyCode::KeyD => Some(Button::KeyD),
        KeyCode::Space => Some(Button::Space),
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
        _ => None,
    }
}

/// Editor key bindings. Some keys double as held camera buttons (S, Space).
pub fn command_for_key(keycode: KeyCode) -> Option<EditorCommand> {
    let command = match keycode {
        KeyCode::KeyT => EditorCommand::ToggleTrajectoryMode,
        KeyCode::KeyP => EditorCommand::AddPointAhead {
            distance: KEY_POINT_DISTANCE,
            duration: INTERACTIVE_POINT_DURATION,
        },
        KeyCode::Space => EditorCommand::TogglePlayback,
        KeyCode::KeyC => EditorCommand::Clear,
        KeyCode::KeyS => EditorCommand::Save,
        KeyCode::KeyL => EditorCommand::Load,
        KeyCode::KeyO => EditorCommand::SelectNextObject,
        KeyCode::KeyV => EditorCommand::TogglePointVisualization,
        KeyCode::KeyI => EditorCommand::Info,
        KeyCode::Digit1 => EditorCommand::ApplyShape(Shape::Circle),
        KeyCode::Digit2 => EditorCommand::ApplyShape(Shape::Square),
        KeyCode::Digit3 => EditorCommand::ApplyShape(Shape::Triangle),
        KeyCode::KeyX => EditorCommand::SetRotation(RotationAxis::X),
        KeyCode::KeyY => EditorCommand::SetRotation(RotationAxis::Y),
        KeyCode::KeyZ => EditorCommand::SetRotation(RotationAxis::Z),
        _ => return None,
    };
    Some(command)
}

pub fn command_for_mouse(button: MouseButton) -> Option<EditorCommand> {
    match button {
        MouseButton::Left => Some(EditorCommand::AddPointAhead {
            distance: CLICK_POINT_DISTANCE,
            duration: INTERACTIVE_POINT_DURATION,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit KeyEvent has private fields, so these go through the mapping
    // functions and the internal helpers instead of synthesized events

    #[test]
    fn test_new_controller_empty() {
        let controller = WinitController::new();
        assert!(!controller.is_down(Button::KeyW));
        assert_eq!(controller.get_down_keys().len(), 0);
        assert_eq!(controller.mouse_position(), None);
        assert_eq!(controller.mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_buttons_press_and_release() {
        let mut controller = WinitController::new();
        controller.set_button(Button::KeyW, ElementState::Pressed);
        controller.set_button(Button::KeyW, ElementState::Pressed);
        controller.set_button(Button::Shift, ElementState::Pressed);
        assert_eq!(controller.get_down_keys(), &[Button::KeyW, Button::Shift]);

        controller.set_button(Button::KeyW, ElementState::Released);
        assert!(!controller.is_down(Button::KeyW));
        assert!(controller.is_down(Button::Shift));

        controller.release_all();
        assert!(controller.get_down_keys().is_empty());
    }

    #[test]
    fn test_mouse_motion_accumulates_and_resets() {
        let mut controller = WinitController::new();
        controller.mouse_motion(10.0, -5.0);
        controller.mouse_motion(5.0, -5.0);
        assert_eq!(controller.mouse_delta(), (15.0, -10.0));

        controller.reset_deltas();
        assert_eq!(controller.mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_raw_motion_drives_look() {
        let mut controller = WinitController::new();
        // The same motion keeps arriving with the cursor pinned in place
        for _ in 0..3 {
            controller.process_device_event(&DeviceEvent::MouseMotion { delta: (40.0, 2.0) });
        }
        assert_eq!(controller.mouse_delta(), (120.0, 6.0));
        assert_eq!(controller.mouse_position(), None);

        controller.process_device_event(&DeviceEvent::Added);
        assert_eq!(controller.mouse_delta(), (120.0, 6.0));
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(command_for_key(KeyCode::KeyT), Some(EditorCommand::ToggleTrajectoryMode));
        assert_eq!(command_for_key(KeyCode::Space), Some(EditorCommand::TogglePlayback));
        assert_eq!(
            command_for_key(KeyCode::Digit2),
            Some(EditorCommand::ApplyShape(Shape::Square))
        );
        assert_eq!(
            command_for_key(KeyCode::KeyP),
            Some(EditorCommand::AddPointAhead { distance: 2.0, duration: 2.0 })
        );
        assert_eq!(command_for_key(KeyCode::KeyW), None);
    }

    #[test]
    fn test_mouse_bindings() {
        assert_eq!(
            command_for_mouse(MouseButton::Left),
            Some(EditorCommand::AddPointAhead { distance: 3.0, duration: 2.0 })
        );
        assert_eq!(command_for_mouse(MouseButton::Right), None);
        assert_eq!(keycode_to_button(KeyCode::ShiftRight), Some(Button::Shift));
        assert_eq!(keycode_to_button(KeyCode::Escape), None);
    }
}
