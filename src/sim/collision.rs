//! Collision detection and response
//!
//! Everything is an axis-aligned box in world space with y measured up
//! from the bottom of the viewport (so ground-level entities sit at
//! `GROUND_Y`). Hazards end the run on the first overlap; coins are
//! collected in one batch per tick.

use glam::Vec2;

use super::state::{Coin, Enemy, GameState, Obstacle, Player};
use crate::consts::*;

/// Axis-aligned bounding box (bottom-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && a_max.x > other.min.x
            && self.min.y < b_max.y
            && a_max.y > other.min.y
    }
}

impl Player {
    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.x, self.y + GROUND_Y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

impl Obstacle {
    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.x, GROUND_Y, OBSTACLE_WIDTH, self.height)
    }
}

impl Coin {
    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.x, self.y + GROUND_Y, COIN_SIZE, COIN_SIZE)
    }
}

impl Enemy {
    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.x, self.y + GROUND_Y, ENEMY_SIZE, ENEMY_SIZE)
    }
}

/// What the player ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hazard {
    Obstacle { id: u32 },
    Enemy { id: u32 },
}

/// Result of resolving one tick's collisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// No hazard hit; `coins` were collected (possibly zero)
    Clear { coins: u32 },
    /// Hit a hazard; nothing else was processed
    Hit(Hazard),
}

/// First hazard overlapping the player, if any
pub fn find_hazard(player: &Aabb, obstacles: &[Obstacle], enemies: &[Enemy]) -> Option<Hazard> {
    if let Some(o) = obstacles.iter().find(|o| player.overlaps(&o.hitbox())) {
        return Some(Hazard::Obstacle { id: o.id });
    }
    enemies
        .iter()
        .find(|e| player.overlaps(&e.hitbox()))
        .map(|e| Hazard::Enemy { id: e.id })
}

/// Check the player against every entity.
///
/// A hazard hit returns immediately without touching coins. Otherwise all
/// overlapping coins are removed and counted; the caller awards score.
pub fn resolve(state: &mut GameState) -> CollisionOutcome {
    let player = state.player.hitbox();

    if let Some(hazard) = find_hazard(&player, &state.obstacles, &state.enemies) {
        return CollisionOutcome::Hit(hazard);
    }

    let before = state.coins.len();
    state.coins.retain(|c| !player.overlaps(&c.hitbox()));
    let coins = (before - state.coins.len()) as u32;

    CollisionOutcome::Clear { coins }
}
