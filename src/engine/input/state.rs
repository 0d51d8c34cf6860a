// Edge-triggered input state fed by winit keyboard events

use super::action::{default_bindings, Action};
use std::collections::{HashMap, HashSet};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Held and just-pressed action state for the local player.
///
/// Press events are edge-triggered: `just_pressed` reports an action for
/// exactly one frame per physical key press, so holding jump does not
/// repeat the jump. OS key-repeat events are ignored.
#[derive(Debug)]
pub struct InputState {
    bindings: HashMap<KeyCode, Action>,
    pressed: HashSet<Action>,
    just_pressed: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            bindings: default_bindings().into_iter().collect(),
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_key_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let Some(&action) = self.bindings.get(&code) else {
            return;
        };

        match event.state {
            ElementState::Pressed => {
                if !event.repeat {
                    self.press(action);
                }
            }
            ElementState::Released => {
                self.release(action);
            }
        }
    }

    /// Register an action press directly (tests, alternate sources)
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release directly
    pub fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Whether the action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Whether the action was pressed since the last `end_frame`
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Take an edge: reports and clears it in one call, so an action
    /// handled once per redraw cannot fire again on a later redraw that
    /// ran no simulation steps
    pub fn consume(&mut self, action: Action) -> bool {
        self.just_pressed.remove(&action)
    }

    /// Clear edge-triggered state; call once per simulation step
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }

    /// Drop all input state (e.g. on focus loss)
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_edge_triggered() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        assert!(input.is_pressed(Action::Jump));
        assert!(input.just_pressed(Action::Jump));

        input.end_frame();
        assert!(input.is_pressed(Action::Jump));
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_repeated_press_while_held_does_not_retrigger() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        input.end_frame();

        // A second press without a release (key repeat) is swallowed
        input.press(Action::Jump);
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_then_press_retriggers() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        input.end_frame();
        input.release(Action::Jump);
        input.press(Action::Jump);
        assert!(input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_consume_takes_the_edge_once() {
        let mut input = InputState::new();
        input.press(Action::Pause);
        assert!(input.consume(Action::Pause));
        // The edge is gone, the held state is not
        assert!(!input.consume(Action::Pause));
        assert!(!input.just_pressed(Action::Pause));
        assert!(input.is_pressed(Action::Pause));
    }

    #[test]
    fn test_consumed_edge_does_not_survive_a_frame_without_end_frame() {
        // A redraw that runs zero simulation steps never calls
        // end_frame; a handled edge must still not fire again there
        let mut input = InputState::new();
        input.press(Action::Pause);
        assert!(input.consume(Action::Pause));
        assert!(!input.consume(Action::Pause));
    }

    #[test]
    fn test_consume_leaves_other_edges_buffered() {
        let mut input = InputState::new();
        input.press(Action::Pause);
        input.press(Action::Jump);
        input.consume(Action::Pause);
        assert!(input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_held_directions_are_continuous() {
        let mut input = InputState::new();
        input.press(Action::MoveLeft);
        input.end_frame();
        input.end_frame();
        assert!(input.is_pressed(Action::MoveLeft));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut input = InputState::new();
        input.press(Action::MoveRight);
        input.reset();
        assert!(!input.is_pressed(Action::MoveRight));
        assert!(!input.just_pressed(Action::MoveRight));
    }
}
