//! Frame loop driver
//!
//! The sim never reads a clock; something outside calls [`Driver::frame`]
//! with a monotonic timestamp. The driver computes the elapsed dt, advances
//! the world, dispatches the tick's events to audio and the score display,
//! and draws. Timestamps keep flowing while paused, so dt stays honest and
//! unpausing never produces a catch-up jump.

use crate::audio::{AudioSink, SoundEffect};
use crate::render::Renderer;
use crate::sim::{GameEvent, World};

/// Drives the world from an external frame clock
#[derive(Debug, Default)]
pub struct Driver {
    /// Timestamp of the previous frame, milliseconds. None before the first.
    last_ms: Option<f64>,
}

impl Driver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one frame at the given timestamp (milliseconds, monotonic).
    ///
    /// The first frame establishes the baseline and ticks with dt = 0.
    /// Returns the dt that was applied.
    pub fn frame<R: Renderer, A: AudioSink>(
        &mut self,
        world: &mut World,
        renderer: &mut R,
        audio: &mut A,
        now_ms: f64,
    ) -> f32 {
        let dt = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);

        let events = world.tick(dt);
        let mut scored = false;
        for event in &events {
            match event {
                GameEvent::PaddleHit => audio.play(SoundEffect::PaddleHit),
                GameEvent::PointScored(_) => {
                    audio.play(SoundEffect::Score);
                    scored = true;
                }
            }
        }
        // One display refresh per frame even if both sides somehow scored
        if scored {
            renderer.refresh_score(world.score.left, world.score.right);
        }

        // A paused world keeps its last rendered frame
        if !world.paused {
            world.draw(renderer);
        }

        dt
    }
}
