//! Player physics
//!
//! Fixed-step integration of the runner: constant horizontal speed, a
//! variable-height jump (impulse plus held force for a limited number of
//! ticks) and gravity with a hard ground clamp.

use super::state::Player;
use crate::consts::*;

impl Player {
    /// Begin a jump. Ignored unless grounded.
    ///
    /// Returns true if the jump actually started.
    pub fn start_jump(&mut self) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.jump.active = true;
        self.jump.duration = 0;
        self.vy = INITIAL_JUMP_VELOCITY;
        true
    }

    /// Stop adding held-jump force. Residual upward velocity is kept.
    pub fn end_jump(&mut self) {
        self.jump.active = false;
    }

    /// Advance one tick at the given horizontal speed
    pub fn advance(&mut self, game_speed: f32) {
        self.x += game_speed;

        if self.jump.active && self.jump.duration < MAX_JUMP_DURATION {
            self.vy += JUMP_FORCE;
            self.jump.duration += 1;
        }
        self.vy += GRAVITY;
        self.y += self.vy;

        // Ground contact
        if self.y < 0.0 {
            self.y = 0.0;
            self.vy = 0.0;
        }
    }
}
