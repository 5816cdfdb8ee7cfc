//! Procedural spawning
//!
//! Each entity kind spawns on a fixed tick cadence taken from the active
//! tier. New entities appear just past the right edge of the viewport.
//! IDs come from the state's monotonic counter so several kinds spawning
//! on the same tick never share one.

use rand::Rng;

use super::state::{Coin, Enemy, GameState, Obstacle};
use crate::consts::*;
use crate::levels::LevelConfig;

/// Entity kinds the spawner produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    Obstacle,
    Coin,
    Enemy,
}

impl SpawnKind {
    pub const ALL: [SpawnKind; 3] = [SpawnKind::Obstacle, SpawnKind::Coin, SpawnKind::Enemy];

    /// Tick interval for this kind in the given tier
    pub fn spawn_rate(self, config: &LevelConfig) -> u32 {
        match self {
            SpawnKind::Obstacle => config.obstacle_spawn_rate,
            SpawnKind::Coin => config.coin_spawn_rate,
            SpawnKind::Enemy => config.enemy_spawn_rate,
        }
    }

    /// True if this kind spawns on `frame_count`
    pub fn is_due(self, frame_count: u64, config: &LevelConfig) -> bool {
        let rate = u64::from(self.spawn_rate(config));
        rate > 0 && frame_count % rate == 0
    }
}

/// Spawn every kind that is due this tick
pub fn maybe_spawn(state: &mut GameState, config: &LevelConfig) {
    for kind in SpawnKind::ALL {
        if kind.is_due(state.frame_count, config) {
            spawn(state, kind, config);
        }
    }
}

/// Spawn one entity of `kind` at the right edge of the viewport
pub fn spawn(state: &mut GameState, kind: SpawnKind, config: &LevelConfig) {
    let id = state.next_entity_id();
    let x = state.camera_x + VIEWPORT_WIDTH;

    match kind {
        SpawnKind::Obstacle => {
            let height = state.rng.random_range(OBSTACLE_MIN_HEIGHT..OBSTACLE_MAX_HEIGHT);
            state.obstacles.push(Obstacle { id, x, height });
        }
        SpawnKind::Coin => {
            let y = state.rng.random_range(COIN_MIN_Y..COIN_MAX_Y);
            state.coins.push(Coin { id, x, y });
        }
        SpawnKind::Enemy => {
            state.enemies.push(Enemy {
                id,
                x,
                y: 0.0,
                initial_x: x,
                vx: -config.enemy_speed,
                mouth_open: true,
            });
        }
    }

    log::debug!(
        "Spawned {:?} #{} at x={:.1} (tick {})",
        kind,
        id,
        x,
        state.frame_count
    );
}
