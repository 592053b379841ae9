//! Duel Pong - a classic two-paddle ball game simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle/ball physics, collisions, scoring)
//! - `render`: Drawing and score-display collaborator interface
//! - `audio`: Fire-and-forget sound collaborator interface
//! - `input`: Key routing table and dispatcher
//! - `driver`: Frame loop with an injected time source
//! - `settings`: Data-driven configuration

pub mod audio;
pub mod driver;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{Difficulty, Settings};

use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Field extent on both axes, in percent of play-field width/height
    pub const FIELD_SIZE: f32 = 100.0;
    /// Field center on both axes
    pub const FIELD_CENTER: f32 = 50.0;

    /// Ball serve speed, percent per millisecond
    pub const BALL_SPEED_BASE: f32 = 0.04;
    /// Speed amplification per paddle collision (multiplicative)
    pub const BALL_SPEED_GROWTH: f32 = 1.03;
    /// Round-reset wait/flash duration, milliseconds
    pub const RESET_DURATION_MS: f32 = 600.0;
    /// Width of one flash band, milliseconds
    pub const FLASH_BAND_MS: f32 = 100.0;
    /// Fraction of paddle vertical momentum transferred to the ball on hit
    pub const PADDLE_MOMENTUM_TRANSFER: f32 = 0.2;

    /// Paddle defaults, percent units
    pub const BAR_WIDTH: f32 = 2.0;
    pub const BAR_HEIGHT: f32 = 20.0;
}

/// Random serve-direction sign: +1 or -1 with equal probability
#[inline]
pub fn random_sign<R: Rng>(rng: &mut R) -> f32 {
    if rng.random::<bool>() { 1.0 } else { -1.0 }
}
