//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick-driven only, dt supplied by the caller
//! - Seeded RNG only
//! - Fixed entity order (paddle-left, paddle-right, ball)
//! - No rendering or platform dependencies; side effects surface as events

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{crossed_face, paddle_collision, reflected_x};
pub use state::{Ball, Control, EntityId, GameEvent, Paddle, PlayerSide, Score, World};
