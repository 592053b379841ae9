//! Game settings and configuration
//!
//! Data-driven setup for a match: difficulty per side, paddle geometry,
//! key bindings, and the RNG seed. Serialized as JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Paddle control difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Default,
    Hard,
}

/// Motion tuning derived from a difficulty preset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlTuning {
    /// Speed cap, percent per millisecond
    pub max_speed: f32,
    /// Velocity gained per tick while a control is held
    pub acceleration: f32,
    /// Per-millisecond multiplicative velocity decay base
    pub drag: f32,
    /// Momentum preserved when bouncing off a wall
    pub bounciness: f32,
}

impl Difficulty {
    /// Parse a preset name. Unrecognized names fall back to the default
    /// preset silently; this is documented behavior, not an error.
    pub fn from_name(name: &str) -> Self {
        match name {
            "baby" | "easy" => {
                log::info!("Baby mode");
                Difficulty::Easy
            }
            "hard" | "difficult" => {
                log::info!("Hard mode");
                Difficulty::Hard
            }
            "default" => Difficulty::Default,
            other => {
                log::warn!("Unknown difficulty {:?}, using default", other);
                Difficulty::Default
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Default => "default",
            Difficulty::Hard => "hard",
        }
    }

    pub fn tuning(&self) -> ControlTuning {
        match self {
            Difficulty::Easy => ControlTuning {
                max_speed: 0.2,
                acceleration: 0.1,
                drag: 0.9,
                bounciness: 0.1,
            },
            Difficulty::Hard => ControlTuning {
                max_speed: 0.2,
                acceleration: 0.01,
                drag: 0.999,
                bounciness: 0.9,
            },
            Difficulty::Default => ControlTuning {
                max_speed: 0.15,
                acceleration: 0.05,
                drag: 0.995,
                bounciness: 0.3,
            },
        }
    }
}

/// Key names bound to paddle movement controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    pub left_up: String,
    pub left_down: String,
    pub right_up: String,
    pub right_down: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: "w".into(),
            left_down: "s".into(),
            right_up: "ArrowUp".into(),
            right_down: "ArrowDown".into(),
        }
    }
}

/// Match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Difficulty preset name for the left paddle (silent fallback)
    pub difficulty_left: String,
    /// Difficulty preset name for the right paddle (silent fallback)
    pub difficulty_right: String,
    /// Paddle width, field percent
    pub bar_width: f32,
    /// Paddle height, field percent
    pub bar_height: f32,
    pub bindings: KeyBindings,
    /// Seed for the serve-direction RNG
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty_left: "default".into(),
            difficulty_right: "default".into(),
            bar_width: BAR_WIDTH,
            bar_height: BAR_HEIGHT,
            bindings: KeyBindings::default(),
            seed: 0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, falling back to defaults on any error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to parse settings ({}), using defaults", e);
                Self::default()
            }
        }
    }
}
