//! Game state and core simulation types
//!
//! Everything the tick mutates lives in `GameState`. Presentation only ever
//! sees a `Snapshot` built from it after a tick completes.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    /// Title screen, waiting for the first jump
    Start,
    /// Active simulation
    Playing,
    /// Hit an obstacle or enemy
    GameOver,
    /// Reached the final tier's score threshold
    Win,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Win)
    }
}

/// Held-jump bookkeeping
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JumpState {
    /// Jump input is held and still allowed to add force
    pub active: bool,
    /// Ticks the held-jump force has been applied
    pub duration: u32,
}

/// The player (world space, y is height above ground)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    pub jump: JumpState,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: PLAYER_X_POS,
            y: 0.0,
            vy: 0.0,
            jump: JumpState::default(),
        }
    }
}

impl Player {
    pub fn is_grounded(&self) -> bool {
        self.y == 0.0
    }
}

/// A static brick standing on the ground
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Obstacle {
    pub id: u32,
    pub x: f32,
    pub height: f32,
}

/// A floating coin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coin {
    pub id: u32,
    pub x: f32,
    /// Height above ground
    pub y: f32,
}

/// A ground-level germ patrolling around its spawn point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Enemy {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    /// Patrol centre
    pub initial_x: f32,
    /// Signed patrol speed
    pub vx: f32,
    pub mouth_open: bool,
}

/// Things that happened during a tick, for logging and presentation cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CoinsCollected { count: u32 },
    LevelUp { level: u32 },
    GameOver { score: u64 },
    Win { score: u64 },
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the current session's RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    /// Coins collected this session (score is always `coins_collected * COIN_VALUE`)
    pub coins_collected: u64,
    /// 1-based index into the level table
    pub level: u32,
    /// Ticks since the last reset
    pub frame_count: u64,
    pub camera_x: f32,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh state on the title screen
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            score: 0,
            coins_collected: 0,
            level: 1,
            frame_count: 0,
            camera_x: 0.0,
            player: Player::default(),
            obstacles: Vec::new(),
            coins: Vec::new(),
            enemies: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Reset every session value to its initial state, re-seeding the RNG.
    /// The phase is left untouched; the caller decides what comes next.
    pub fn reset(&mut self, seed: u64) {
        let phase = self.phase;
        *self = Self::new(seed);
        self.phase = phase;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn entity_count(&self) -> usize {
        self.obstacles.len() + self.coins.len() + self.enemies.len()
    }
}
