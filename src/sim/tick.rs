//! Fixed-step simulation tick
//!
//! Core game loop that advances the simulation deterministically: one call
//! is one frame, no sub-stepping and no catch-up.

use super::state::{GamePhase, GameState};
use super::{camera, collision, entities, progression, spawn};
use crate::levels::LevelTable;

/// A logical input edge. Key, pointer and touch sources all map to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEdge {
    JumpStart,
    JumpEnd,
}

/// Input edges captured since the previous tick, in arrival order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub edges: Vec<InputEdge>,
}

impl TickInput {
    pub fn jump_start() -> Self {
        Self {
            edges: vec![InputEdge::JumpStart],
        }
    }

    pub fn jump_end() -> Self {
        Self {
            edges: vec![InputEdge::JumpEnd],
        }
    }
}

/// Whether the driver should request another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Stop,
}

/// Advance the game state by one tick.
///
/// Order: input edges, player, camera, enemies and despawn, spawns,
/// collisions, score/level. Does nothing outside `Playing`.
pub fn tick(state: &mut GameState, input: &TickInput, levels: &LevelTable) -> FrameStatus {
    state.events.clear();

    if state.phase != GamePhase::Playing {
        return FrameStatus::Stop;
    }

    for edge in &input.edges {
        match edge {
            InputEdge::JumpStart => {
                state.player.start_jump();
            }
            InputEdge::JumpEnd => state.player.end_jump(),
        }
    }

    state.frame_count += 1;
    let config = levels.get(state.level);

    state.player.advance(config.game_speed);
    state.camera_x = camera::follow(state.camera_x, state.player.x);

    entities::advance_and_prune(state, config.enemy_speed);
    spawn::maybe_spawn(state, config);

    match collision::resolve(state) {
        collision::CollisionOutcome::Hit(hazard) => {
            log::debug!("Player hit {:?}", hazard);
            progression::game_over(state);
        }
        collision::CollisionOutcome::Clear { coins } => {
            progression::award_coins(state, coins);
            progression::evaluate(state, levels);
        }
    }

    if state.phase == GamePhase::Playing {
        FrameStatus::Continue
    } else {
        FrameStatus::Stop
    }
}
