//! Game state and core simulation types
//!
//! Construction and small state helpers live here; per-tick physics is in
//! [`super::tick`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::random_sign;
use crate::settings::{ControlTuning, Difficulty, Settings};

/// Which player a paddle or a point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSide {
    Left,
    Right,
}

impl PlayerSide {
    pub fn opponent(&self) -> PlayerSide {
        match self {
            PlayerSide::Left => PlayerSide::Right,
            PlayerSide::Right => PlayerSide::Left,
        }
    }
}

/// The closed set of drawable entities, in registration (draw) order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityId {
    PaddleLeft,
    PaddleRight,
    Ball,
}

/// Paddle movement controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Up,
    Down,
}

/// Side effects produced by a tick, dispatched outside the sim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit,
    /// A point was scored by the given side
    PointScored(PlayerSide),
}

/// Score tally; counters only ever go up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: PlayerSide) {
        match side {
            PlayerSide::Left => self.left += 1,
            PlayerSide::Right => self.right += 1,
        }
    }
}

/// The white bar controlled by one player
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Horizontal position, fixed for the paddle's lifetime
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,
    /// Input flags, written only by the input dispatcher
    pub pressed_up: bool,
    pub pressed_down: bool,
    pub tuning: ControlTuning,
}

impl Paddle {
    pub fn new(x: f32, width: f32, height: f32, difficulty: Difficulty) -> Self {
        Self {
            x,
            y: FIELD_CENTER,
            vy: 0.0,
            width,
            height,
            pressed_up: false,
            pressed_down: false,
            tuning: difficulty.tuning(),
        }
    }

    /// Set an input flag. Physics reads these at the next tick.
    pub fn set_input(&mut self, control: Control, pressed: bool) {
        match control {
            Control::Up => self.pressed_up = pressed,
            Control::Down => self.pressed_down = pressed,
        }
    }

    /// Lowest center position that keeps the paddle on the field
    #[inline]
    pub fn top_limit(&self) -> f32 {
        self.height / 2.0
    }

    /// Highest center position that keeps the paddle on the field
    #[inline]
    pub fn bottom_limit(&self) -> f32 {
        FIELD_SIZE - self.height / 2.0
    }
}

/// The ball: position, velocity, and the round-reset timers
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed_base: f32,
    pub speed_growth: f32,
    /// Milliseconds left in the post-score Waiting state
    pub wait_timer: f32,
    /// Milliseconds left in the visibility-flash overlay
    pub flash_timer: f32,
    pub flash_band: f32,
    pub reset_duration: f32,
    pub visible: bool,
}

impl Ball {
    pub fn new<R: rand::Rng>(width: f32, height: f32, rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(FIELD_CENTER, FIELD_CENTER),
            vel: Vec2::new(
                random_sign(rng) * BALL_SPEED_BASE,
                random_sign(rng) * BALL_SPEED_BASE,
            ),
            width,
            height,
            speed_base: BALL_SPEED_BASE,
            speed_growth: BALL_SPEED_GROWTH,
            wait_timer: RESET_DURATION_MS,
            flash_timer: RESET_DURATION_MS,
            flash_band: FLASH_BAND_MS,
            reset_duration: RESET_DURATION_MS,
            visible: false,
        }
    }

    /// Waiting means inert: no motion, no collisions, until the timer runs out
    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.wait_timer > 0.0
    }
}

/// Complete match state: both paddles, the ball, the tally, and the flags
#[derive(Debug, Clone)]
pub struct World {
    /// Entities in registration order: left paddle, right paddle
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    pub score: Score,
    /// While true, ticks are no-ops and nothing is drawn
    pub paused: bool,
    /// True only during the start routine, before the first input
    pub started: bool,
    pub music_muted: bool,
    pub(crate) rng: Pcg32,
}

impl World {
    pub fn new(settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let left = Paddle::new(
            2.0 * settings.bar_width,
            settings.bar_width,
            settings.bar_height,
            Difficulty::from_name(&settings.difficulty_left),
        );
        let right = Paddle::new(
            FIELD_SIZE - 2.0 * settings.bar_width,
            settings.bar_width,
            settings.bar_height,
            Difficulty::from_name(&settings.difficulty_right),
        );
        // Square ball, sized off the bar width
        let ball = Ball::new(settings.bar_width, settings.bar_width, &mut rng);

        log::info!(
            "World created: difficulties {}/{}, seed {}",
            Difficulty::from_name(&settings.difficulty_left).as_str(),
            Difficulty::from_name(&settings.difficulty_right).as_str(),
            settings.seed
        );

        Self {
            paddles: [left, right],
            ball,
            score: Score::default(),
            paused: true,
            started: true,
            music_muted: true,
            rng,
        }
    }

    pub fn paddle(&self, side: PlayerSide) -> &Paddle {
        match side {
            PlayerSide::Left => &self.paddles[0],
            PlayerSide::Right => &self.paddles[1],
        }
    }

    pub fn paddle_mut(&mut self, side: PlayerSide) -> &mut Paddle {
        match side {
            PlayerSide::Left => &mut self.paddles[0],
            PlayerSide::Right => &mut self.paddles[1],
        }
    }

    /// Ambient audio gate: plays iff unpaused and unmuted
    #[inline]
    pub fn ambient_playing(&self) -> bool {
        !self.paused && !self.music_muted
    }

    /// Flip the pause flag. Entity timers only freeze for future ticks.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Flip the music flag; playback is still gated by `paused`
    pub fn toggle_music(&mut self) {
        self.music_muted = !self.music_muted;
    }

    /// One-shot start-routine dismissal, consumed by the first input
    pub fn dismiss_start(&mut self) {
        self.started = false;
        self.paused = false;
        self.music_muted = true;
    }
}
