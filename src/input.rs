//! Keyboard input routing
//!
//! One dispatcher turns raw key up/down events into sim mutations. Paddle
//! controls are level-based (held flags); pause, music, and the start
//! dismissal are edge-based (keydown only). The dispatcher also owns keeping
//! the ambient audio track in sync with the world flags, so the sim never
//! talks to audio directly.

use crate::audio::AudioSink;
use crate::settings::KeyBindings;
use crate::sim::{Control, PlayerSide, World};

/// Key-name to paddle-control routing table, built once from the bindings
#[derive(Debug, Clone)]
pub struct InputMap {
    routes: Vec<(String, PlayerSide, Control)>,
}

impl InputMap {
    pub fn new(bindings: &KeyBindings) -> Self {
        Self {
            routes: vec![
                (bindings.left_up.clone(), PlayerSide::Left, Control::Up),
                (bindings.left_down.clone(), PlayerSide::Left, Control::Down),
                (bindings.right_up.clone(), PlayerSide::Right, Control::Up),
                (bindings.right_down.clone(), PlayerSide::Right, Control::Down),
            ],
        }
    }

    /// Look up the paddle control bound to a key name, if any
    pub fn route(&self, key: &str) -> Option<(PlayerSide, Control)> {
        self.routes
            .iter()
            .find(|(name, _, _)| name == key)
            .map(|(_, side, control)| (*side, *control))
    }

    /// Dispatch one key event.
    ///
    /// While the start routine is showing, the first keydown dismisses it
    /// and is consumed. After that: `p` or space toggles pause, `m` toggles
    /// music, bound keys drive their paddle, anything else is ignored.
    /// Ambient playback is re-asserted after every flag change.
    pub fn handle_key<A: AudioSink>(
        &self,
        world: &mut World,
        audio: &mut A,
        key: &str,
        pressed: bool,
    ) {
        if world.started {
            if pressed {
                world.dismiss_start();
                audio.set_ambient(world.ambient_playing());
                log::info!("Start routine dismissed");
            }
            return;
        }

        if pressed {
            match key {
                "p" | " " => {
                    world.toggle_pause();
                    audio.set_ambient(world.ambient_playing());
                    return;
                }
                "m" => {
                    world.toggle_music();
                    audio.set_ambient(world.ambient_playing());
                    return;
                }
                _ => {}
            }
        }

        if let Some((side, control)) = self.route(key) {
            world.paddle_mut(side).set_input(control, pressed);
        }
    }
}
