//! Audio output seam
//!
//! The sim knows nothing about audio; the loop driver maps tick events onto
//! an [`AudioSink`]. Effects are fire-and-forget; the ambient track is a
//! level-set toggle the input dispatcher keeps in sync with the world flags.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// A point was scored
    Score,
}

/// Playback backend for effects and the ambient music track
pub trait AudioSink {
    /// Trigger a one-shot effect. Playback failures are the sink's problem;
    /// the game never waits on them.
    fn play(&mut self, effect: SoundEffect);

    /// Start or stop the ambient track. Idempotent: callers re-assert the
    /// desired state after every flag change rather than tracking edges.
    fn set_ambient(&mut self, playing: bool);
}

/// Sink that discards everything, for tests and headless runs
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
    fn set_ambient(&mut self, _playing: bool) {}
}

/// Sink that logs every request, for demos and debugging
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("sfx: {:?}", effect);
    }

    fn set_ambient(&mut self, playing: bool) {
        log::debug!("ambient: {}", if playing { "on" } else { "off" });
    }
}

/// Recording sink for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub effects: Vec<SoundEffect>,
    pub ambient: Vec<bool>,
}

#[cfg(test)]
impl AudioSink for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.effects.push(effect);
    }

    fn set_ambient(&mut self, playing: bool) {
        self.ambient.push(playing);
    }
}
