use serde::{Deserialize, Serialize};

/// Neutral per-tick input record shared by every input source.
///
/// `left`, `right` and `jump` are level-triggered (held). `jump_pressed` is
/// edge-triggered: producers raise it on a released→pressed transition and
/// the simulation clears it with [`InputState::consume_jump_press`] once per
/// tick. Producers never clear it themselves, so a press from any source
/// (keyboard, touch, script) survives until the next tick consumes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub jump_pressed: bool,
}

impl InputState {
    pub fn set_left(&mut self, held: bool) {
        self.left = held;
    }

    pub fn set_right(&mut self, held: bool) {
        self.right = held;
    }

    /// Update the held jump flag, latching `jump_pressed` on the press edge.
    pub fn set_jump_held(&mut self, held: bool) {
        if held && !self.jump {
            self.jump_pressed = true;
        }
        self.jump = held;
    }

    /// Horizontal intent: -1 (left), 0 (both or neither), +1 (right).
    pub fn horizontal_axis(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    /// Return and clear the jump press edge.
    pub fn consume_jump_press(&mut self) -> bool {
        std::mem::take(&mut self.jump_pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_edge_only_on_transition() {
        let mut input = InputState::default();
        input.set_jump_held(true);
        assert!(input.jump_pressed);
        assert!(input.consume_jump_press());

        // Still held: no new edge.
        input.set_jump_held(true);
        assert!(!input.jump_pressed);

        input.set_jump_held(false);
        assert!(!input.jump_pressed);
        input.set_jump_held(true);
        assert!(input.jump_pressed);
    }

    #[test]
    fn consume_clears_exactly_once() {
        let mut input = InputState::default();
        input.set_jump_held(true);
        assert!(input.consume_jump_press());
        assert!(!input.consume_jump_press());
        assert!(input.jump, "held flag is untouched by consumption");
    }

    #[test]
    fn edge_latches_across_release_before_consume() {
        // Tap shorter than a frame: pressed and released between two ticks.
        let mut input = InputState::default();
        input.set_jump_held(true);
        input.set_jump_held(false);
        assert!(!input.jump);
        assert!(input.consume_jump_press());
    }

    #[test]
    fn horizontal_axis_cancels() {
        let mut input = InputState::default();
        assert_eq!(input.horizontal_axis(), 0.0);
        input.set_left(true);
        assert_eq!(input.horizontal_axis(), -1.0);
        input.set_right(true);
        assert_eq!(input.horizontal_axis(), 0.0);
        input.set_left(false);
        assert_eq!(input.horizontal_axis(), 1.0);
    }
}
