// Game action definitions and default key bindings

use winit::keyboard::KeyCode;

/// Everything the player can ask the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Pause,
    Quit,
}

/// Default keyboard bindings: arrows plus WASD, space to jump
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::ArrowRight, Action::MoveRight),
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::Space, Action::Jump),
        (KeyCode::ArrowUp, Action::Jump),
        (KeyCode::KeyW, Action::Jump),
        (KeyCode::KeyP, Action::Pause),
        (KeyCode::Escape, Action::Quit),
    ]
}
