//! Read model published to presentation after each completed tick
//!
//! All positions are camera-relative (screen x, height above ground).

use serde::Serialize;

use super::camera::to_screen_x;
use super::state::{GamePhase, GameState};
use crate::levels::LevelTable;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    pub grounded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObstacleView {
    pub id: u32,
    pub x: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub mouth_open: bool,
}

/// Immutable view of one completed tick
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(rename = "gameState")]
    pub phase: GamePhase,
    pub score: u64,
    pub level: u32,
    pub level_name: String,
    pub high_score: u64,
    pub show_level_up: bool,
    pub frame_count: u64,
    /// World scroll offset (for parallax backgrounds)
    pub camera_x: f32,
    pub player: PlayerView,
    pub obstacles: Vec<ObstacleView>,
    pub coins: Vec<CoinView>,
    pub enemies: Vec<EnemyView>,
}

impl Snapshot {
    pub fn capture(
        state: &GameState,
        levels: &LevelTable,
        high_score: u64,
        show_level_up: bool,
    ) -> Self {
        let cam = state.camera_x;
        Self {
            phase: state.phase,
            score: state.score,
            level: state.level,
            level_name: levels.get(state.level).name.clone(),
            high_score,
            show_level_up,
            frame_count: state.frame_count,
            camera_x: cam,
            player: PlayerView {
                x: to_screen_x(state.player.x, cam),
                y: state.player.y,
                vy: state.player.vy,
                grounded: state.player.is_grounded(),
            },
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    x: to_screen_x(o.x, cam),
                    height: o.height,
                })
                .collect(),
            coins: state
                .coins
                .iter()
                .map(|c| CoinView {
                    id: c.id,
                    x: to_screen_x(c.x, cam),
                    y: c.y,
                })
                .collect(),
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyView {
                    id: e.id,
                    x: to_screen_x(e.x, cam),
                    y: e.y,
                    mouth_open: e.mouth_open,
                })
                .collect(),
        }
    }
}
