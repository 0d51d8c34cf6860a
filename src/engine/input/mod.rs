// Input handling: action mapping plus edge-triggered key state
//
// Held direction keys are polled every frame; jump is edge-triggered so
// holding the key down does not jump again.

pub mod action;
pub mod state;

pub use action::Action;
pub use state::InputState;
