//! Entity motion and despawning

use super::state::{Enemy, GameState};
use crate::consts::*;

impl Enemy {
    /// One patrol step. Speed is re-derived from the current tier so a
    /// level-up affects enemies that are already on screen.
    pub fn patrol(&mut self, speed: f32) {
        let dir = if self.vx < 0.0 { -1.0 } else { 1.0 };
        self.vx = dir * speed;
        self.x += self.vx;

        if (self.x - self.initial_x).abs() >= ENEMY_MOVE_RANGE {
            self.x = self.initial_x + dir * ENEMY_MOVE_RANGE;
            self.vx = -self.vx;
        }
    }
}

/// Move enemies, toggle their mouths, then drop everything that scrolled
/// out behind the camera
pub fn advance_and_prune(state: &mut GameState, enemy_speed: f32) {
    let toggle_mouth = state.frame_count % ENEMY_MOUTH_ANIM_RATE == 0;
    for enemy in &mut state.enemies {
        enemy.patrol(enemy_speed);
        if toggle_mouth {
            enemy.mouth_open = !enemy.mouth_open;
        }
    }

    prune(state);
}

/// Remove entities whose despawn margin is fully behind the camera
pub fn prune(state: &mut GameState) {
    let camera_x = state.camera_x;
    state.obstacles.retain(|o| o.x > camera_x - OBSTACLE_WIDTH);
    state.coins.retain(|c| c.x > camera_x - COIN_SIZE);
    // Wider margin: a patrolling enemy can swing back into view
    state
        .enemies
        .retain(|e| e.x > camera_x - (ENEMY_SIZE + 2.0 * ENEMY_MOVE_RANGE));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Coin, Obstacle};

    fn enemy_at(x: f32, vx: f32) -> Enemy {
        Enemy {
            id: 1,
            x,
            y: 0.0,
            initial_x: x,
            vx,
            mouth_open: true,
        }
    }

    #[test]
    fn test_patrol_turns_at_range() {
        let mut enemy = enemy_at(500.0, -2.0);
        for _ in 0..40 {
            enemy.patrol(2.0);
        }
        assert_eq!(enemy.x, 500.0 - ENEMY_MOVE_RANGE);
        assert!(enemy.vx > 0.0);

        for _ in 0..500 {
            enemy.patrol(2.0);
            assert!((enemy.x - enemy.initial_x).abs() <= ENEMY_MOVE_RANGE);
        }
    }

    #[test]
    fn test_patrol_clamps_overshoot() {
        let mut enemy = enemy_at(0.0, -3.0);
        enemy.x = -79.0;
        enemy.patrol(3.0);
        assert_eq!(enemy.x, -ENEMY_MOVE_RANGE);
        assert_eq!(enemy.vx, 3.0);
    }

    #[test]
    fn test_patrol_speed_follows_level() {
        let mut enemy = enemy_at(0.0, -1.5);
        enemy.patrol(3.5);
        assert_eq!(enemy.vx, -3.5);
        assert_eq!(enemy.x, -3.5);
    }

    #[test]
    fn test_mouth_toggles_on_anim_rate() {
        let mut state = GameState::new(1);
        state.enemies.push(enemy_at(1000.0, -1.5));

        state.frame_count = ENEMY_MOUTH_ANIM_RATE - 1;
        advance_and_prune(&mut state, 1.5);
        assert!(state.enemies[0].mouth_open);

        state.frame_count = ENEMY_MOUTH_ANIM_RATE;
        advance_and_prune(&mut state, 1.5);
        assert!(!state.enemies[0].mouth_open);
    }

    #[test]
    fn test_prune_margins() {
        let mut state = GameState::new(1);
        state.camera_x = 1000.0;
        state.obstacles = vec![
            Obstacle { id: 1, x: 1000.0 - OBSTACLE_WIDTH, height: 60.0 },
            Obstacle { id: 2, x: 1000.0 - OBSTACLE_WIDTH + 1.0, height: 60.0 },
        ];
        state.coins = vec![
            Coin { id: 3, x: 1000.0 - COIN_SIZE, y: 120.0 },
            Coin { id: 4, x: 1000.0 - COIN_SIZE + 1.0, y: 120.0 },
        ];
        let margin = ENEMY_SIZE + 2.0 * ENEMY_MOVE_RANGE;
        state.enemies = vec![
            Enemy { id: 5, ..enemy_at(1000.0 - margin, -1.0) },
            Enemy { id: 6, ..enemy_at(1000.0 - margin + 1.0, -1.0) },
        ];

        prune(&mut state);

        assert_eq!(state.obstacles.iter().map(|o| o.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(state.coins.iter().map(|c| c.id).collect::<Vec<_>>(), vec![4]);
        assert_eq!(state.enemies.iter().map(|e| e.id).collect::<Vec<_>>(), vec![6]);
    }

    #[test]
    fn test_prune_empty_is_noop() {
        let mut state = GameState::new(1);
        state.camera_x = 5000.0;
        prune(&mut state);
        assert_eq!(state.entity_count(), 0);
    }
}
