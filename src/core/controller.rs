/// Input button identifier for held (continuous) input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
    Shift,
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    /// Mouse movement since the last frame, screen space (y grows downward)
    fn mouse_delta(&self) -> (f32, f32) {
        (0.0, 0.0)
    }
}

/// Controller with nothing pressed, for headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleController;

impl Controller for IdleController {
    fn is_down(&self, _button: Button) -> bool {
        false
    }

    fn get_down_keys(&self) -> &[Button] {
        &[]
    }
}
