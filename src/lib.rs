//! Capy Run - A side-scrolling capybara runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `levels`: Data-driven difficulty tiers
//! - `session`: Frame driver, input queue and level-up banner timer
//! - `highscores`: Persisted all-time high score
//! - `settings`: Runtime configuration

pub mod error;
pub mod highscores;
pub mod levels;
pub mod session;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{ConfigError, LevelTableError};
pub use highscores::{HighScore, HighScoreStore, MemoryStore};
pub use levels::{LevelConfig, LevelTable};
pub use session::{FrameStatus, InputEdge, InputQueue, Session};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Visible world width; spawns appear just past the right edge
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 400.0;
    /// Distance between world y = 0 and the rendered ground line
    pub const GROUND_Y: f32 = 30.0;

    /// Player physics (per tick, y is up)
    pub const GRAVITY: f32 = -0.7;
    pub const INITIAL_JUMP_VELOCITY: f32 = 15.0;
    /// Extra upward force per tick while the jump is held
    pub const JUMP_FORCE: f32 = 0.6;
    /// Max ticks the held-jump force is applied
    pub const MAX_JUMP_DURATION: u32 = 15;

    /// Fixed screen-space x of the player; the camera chases `player.x - PLAYER_X_POS`
    pub const PLAYER_X_POS: f32 = 50.0;
    pub const CAMERA_SMOOTHING: f32 = 0.1;

    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    pub const OBSTACLE_WIDTH: f32 = 50.0;
    pub const COIN_SIZE: f32 = 32.0;
    pub const ENEMY_SIZE: f32 = 40.0;

    /// Obstacle height range [min, max)
    pub const OBSTACLE_MIN_HEIGHT: f32 = 50.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 150.0;
    /// Coin height-above-ground range [min, max)
    pub const COIN_MIN_Y: f32 = 100.0;
    pub const COIN_MAX_Y: f32 = 250.0;

    /// Pixels an enemy patrols left/right of its spawn point
    pub const ENEMY_MOVE_RANGE: f32 = 80.0;
    /// Enemy mouth toggles every N ticks
    pub const ENEMY_MOUTH_ANIM_RATE: u64 = 20;

    pub const COIN_VALUE: u64 = 10;

    /// Wall-clock lifetime of the level-up banner
    pub const LEVEL_UP_BANNER_MS: f64 = 2000.0;
}
