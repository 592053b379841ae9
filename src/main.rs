//! Headless entry point
//!
//! Runs a short synthetic match against the logging backends. Useful for
//! eyeballing the event stream; the real interface is the library.

use duel_pong::audio::LogAudio;
use duel_pong::driver::Driver;
use duel_pong::input::InputMap;
use duel_pong::render::LogRenderer;
use duel_pong::sim::World;
use duel_pong::Settings;

fn main() {
    env_logger::init();

    let settings = Settings::default();
    let input = InputMap::new(&settings.bindings);
    let mut world = World::new(&settings);
    let mut driver = Driver::new();
    let mut renderer = LogRenderer;
    let mut audio = LogAudio;

    // Dismiss the start routine the way a player would
    input.handle_key(&mut world, &mut audio, " ", true);

    // Ten simulated seconds at ~60fps, with the left paddle chasing the ball
    let frame_ms = 1000.0 / 60.0;
    for frame in 0..600 {
        let now = frame as f64 * frame_ms;

        let chasing_down = {
            let paddle = world.paddle(duel_pong::sim::PlayerSide::Left);
            world.ball.pos.y > paddle.y
        };
        input.handle_key(&mut world, &mut audio, "s", chasing_down);
        input.handle_key(&mut world, &mut audio, "w", !chasing_down);

        driver.frame(&mut world, &mut renderer, &mut audio, now);
    }

    log::info!(
        "Final score: {} - {}",
        world.score.left,
        world.score.right
    );
}
