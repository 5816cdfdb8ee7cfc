//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick step only
//! - Seeded RNG only
//! - Entity IDs from a monotonic counter
//! - No rendering, storage or wall-clock dependencies

pub mod camera;
pub mod collision;
pub mod entities;
pub mod physics;
pub mod progression;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, CollisionOutcome, Hazard};
pub use snapshot::Snapshot;
pub use spawn::SpawnKind;
pub use state::{Coin, Enemy, GameEvent, GamePhase, GameState, Obstacle, Player};
pub use tick::{FrameStatus, InputEdge, TickInput, tick};
