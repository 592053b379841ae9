//! Per-tick physics
//!
//! Advances paddles and ball by one variable-length tick. `dt` is elapsed
//! milliseconds, supplied by the loop driver; all speeds are percent per
//! millisecond so behavior is frame-rate independent.

use glam::Vec2;
use rand::Rng;

use super::collision::{paddle_collision, reflected_x};
use super::state::{Ball, GameEvent, Paddle, PlayerSide, World};
use crate::consts::*;
use crate::random_sign;

impl Paddle {
    /// Update position and velocity for one tick
    pub fn update(&mut self, dt: f32) {
        // Accelerate while a control is held; both may apply in one tick
        if self.pressed_up {
            self.vy = (self.vy - self.tuning.acceleration).max(-self.tuning.max_speed);
        }
        if self.pressed_down {
            self.vy = (self.vy + self.tuning.acceleration).min(self.tuning.max_speed);
        }

        self.y += self.vy * dt;

        // Upper border: hold against it while pressing up, bounce otherwise
        if self.y <= self.top_limit() {
            if self.pressed_up {
                self.y = self.top_limit();
            } else {
                self.y = self.height - self.y;
                self.vy *= -self.tuning.bounciness;
            }
        }
        // Lower border, symmetric
        if self.y >= self.bottom_limit() {
            if self.pressed_down {
                self.y = self.bottom_limit();
            } else {
                self.y = 2.0 * FIELD_SIZE - self.height - self.y;
                self.vy *= -self.tuning.bounciness;
            }
        }

        // Continuous exponential decay, independent of frame rate
        self.vy *= self.tuning.drag.powf(dt);
    }
}

impl Ball {
    /// Update for one tick: motion, paddle and border collisions, scoring,
    /// and the flash overlay. Scoring and collisions surface as events.
    pub fn update<R: Rng>(
        &mut self,
        dt: f32,
        paddles: &[Paddle],
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) {
        if self.is_waiting() {
            self.wait_timer = (self.wait_timer - dt).max(0.0);
            // Waiting just ended: snap to center, resume motion next tick
            if self.wait_timer == 0.0 {
                self.pos = Vec2::new(FIELD_CENTER, FIELD_CENTER);
            }
        } else {
            self.pos += self.vel * dt;

            for paddle in paddles {
                let prev_x = self.pos.x - self.vel.x * dt;
                let size = Vec2::new(self.width, self.height);
                if paddle_collision(self.pos, prev_x, self.vel.x, size, paddle) {
                    self.pos.x = reflected_x(self.pos.x, self.vel.x, paddle, self.width);
                    // Reverse and amplify, plus partial momentum transfer
                    self.vel.x *= -self.speed_growth;
                    self.vel.y += PADDLE_MOMENTUM_TRANSFER * paddle.vy;
                    events.push(GameEvent::PaddleHit);
                }
            }

            // A side border exit concedes the point to the other player
            let conceded = if self.pos.x < self.width / 2.0 {
                Some(PlayerSide::Left)
            } else if self.pos.x > FIELD_SIZE - self.width / 2.0 {
                Some(PlayerSide::Right)
            } else {
                None
            };
            if let Some(side) = conceded {
                self.begin_reset(rng);
                // Re-serve away from the conceded border
                self.vel.x = match side {
                    PlayerSide::Left => self.speed_base,
                    PlayerSide::Right => -self.speed_base,
                };
                events.push(GameEvent::PointScored(side.opponent()));
            }

            // Top/bottom borders: pure elastic reflection, no scoring
            if self.pos.y < self.height / 2.0 {
                self.pos.y = self.height - self.pos.y;
                self.vel.y = -self.vel.y;
            } else if self.pos.y > FIELD_SIZE - self.height / 2.0 {
                self.pos.y = 2.0 * FIELD_SIZE - self.height - self.pos.y;
                self.vel.y = -self.vel.y;
            }
        }

        // Flash overlay runs regardless of Waiting/Active: visible during
        // two of every three bands of the countdown
        if self.flash_timer > 0.0 {
            self.flash_timer = (self.flash_timer - dt).max(0.0);
            let band = (self.flash_timer / self.flash_band).floor() as i64;
            self.visible = (band + 1) % 3 != 0;
        }
    }

    /// Arm the wait and flash timers for a round reset and re-roll the
    /// vertical serve direction. The caller picks the horizontal direction.
    fn begin_reset<R: Rng>(&mut self, rng: &mut R) {
        self.wait_timer = self.reset_duration;
        self.flash_timer = self.reset_duration;
        self.vel.y = random_sign(rng) * self.speed_base;
    }
}

impl World {
    /// Advance the whole world by one tick.
    ///
    /// No-op while paused: entities stay frozen and their timers do not
    /// advance. Entities update in registration order; the ball reads both
    /// paddle states for its collision tests. Returned events carry the
    /// tick's side effects; the score tally is already updated when a
    /// [`GameEvent::PointScored`] is returned.
    pub fn tick(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.paused {
            return events;
        }

        for paddle in &mut self.paddles {
            paddle.update(dt);
        }
        {
            let World {
                ref mut ball,
                ref paddles,
                ref mut rng,
                ..
            } = *self;
            ball.update(dt, paddles, rng, &mut events);
        }
        for event in &events {
            if let GameEvent::PointScored(side) = event {
                self.score.award(*side);
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Difficulty, Settings};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn world() -> World {
        World::new(&Settings::default())
    }

    /// A world with the ball already Active at field center
    fn active_world() -> World {
        let mut w = world();
        w.paused = false;
        w.started = false;
        w.ball.wait_timer = 0.0;
        w.ball.flash_timer = 0.0;
        w.ball.visible = true;
        w
    }

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    // === Paddle ===

    #[test]
    fn held_control_accelerates_up_to_cap() {
        let mut p = Paddle::new(4.0, 2.0, 20.0, Difficulty::Default);
        p.set_input(crate::sim::Control::Down, true);
        for _ in 0..10 {
            p.update(0.0);
        }
        // Capped at max_speed even after many ticks (dt=0 so drag is a no-op)
        assert!((p.vy - p.tuning.max_speed).abs() < 1e-6);
    }

    #[test]
    fn both_controls_apply_in_one_tick() {
        let mut p = Paddle::new(4.0, 2.0, 20.0, Difficulty::Default);
        p.pressed_up = true;
        p.pressed_down = true;
        p.update(0.0);
        // Two independent clamped adjustments cancel out
        assert!(p.vy.abs() < 1e-6);
    }

    #[test]
    fn holding_up_clamps_against_top_border() {
        let mut p = Paddle::new(4.0, 2.0, 20.0, Difficulty::Default);
        p.pressed_up = true;
        p.y = 11.0;
        p.vy = -0.2;
        p.update(16.0);
        assert_eq!(p.y, p.top_limit());
    }

    #[test]
    fn drifting_into_top_border_reflects_with_bounciness() {
        let mut p = Paddle::new(4.0, 2.0, 20.0, Difficulty::Default);
        p.y = 11.0;
        p.vy = -0.2; // drifting, no control held
        p.update(16.0);
        // y = 11 - 3.2 = 7.8 <= 10, reflected to 20 - 7.8 = 12.2
        assert!((p.y - 12.2).abs() < 1e-4);
        // Velocity reversed and damped by bounciness, then dragged
        assert!(p.vy > 0.0);
        assert!(p.vy < 0.2);
    }

    #[test]
    fn bottom_border_is_symmetric() {
        let mut p = Paddle::new(4.0, 2.0, 20.0, Difficulty::Default);
        p.y = 89.0;
        p.vy = 0.2;
        p.update(16.0);
        // y = 89 + 3.2 = 92.2 >= 90, reflected to 200 - 20 - 92.2 = 87.8
        assert!((p.y - 87.8).abs() < 1e-4);
        assert!(p.vy < 0.0);
    }

    proptest! {
        /// Drag never increases |vy| when no control is held and no border
        /// is touched.
        #[test]
        fn prop_drag_never_speeds_up(vy in -0.15f32..0.15, dt in 0.0f32..100.0) {
            let mut p = Paddle::new(4.0, 2.0, 20.0, Difficulty::Default);
            p.y = 50.0;
            p.vy = vy;
            let before = p.vy.abs();
            p.update(dt);
            // Interior position, |vy*dt| <= 15 keeps us off both borders
            prop_assert!(p.vy.abs() <= before + 1e-6);
        }

        /// Paddle center stays on the field after any single update.
        #[test]
        fn prop_paddle_stays_on_field(
            y in 10.0f32..90.0,
            vy in -0.2f32..0.2,
            dt in 0.0f32..100.0,
            up in any::<bool>(),
            down in any::<bool>(),
        ) {
            let mut p = Paddle::new(4.0, 2.0, 20.0, Difficulty::Default);
            p.y = y;
            p.vy = vy;
            p.pressed_up = up;
            p.pressed_down = down;
            p.update(dt);
            prop_assert!(p.y >= p.top_limit() - 1e-4);
            prop_assert!(p.y <= p.bottom_limit() + 1e-4);
        }
    }

    // === Ball: waiting and reset ===

    #[test]
    fn waiting_ball_does_not_move() {
        let mut w = world();
        w.paused = false;
        let pos = w.ball.pos;
        assert!(w.ball.is_waiting());
        w.tick(100.0);
        assert_eq!(w.ball.pos, pos);
    }

    #[test]
    fn waiting_expires_once_and_recenters() {
        let mut ball = {
            let mut r = rng();
            Ball::new(2.0, 2.0, &mut r)
        };
        ball.pos = Vec2::new(30.0, 70.0);
        ball.wait_timer = 600.0;
        let mut r = rng();
        let mut events = Vec::new();

        let mut transitions = 0;
        let mut elapsed = 0.0;
        while elapsed < 900.0 {
            let was_waiting = ball.is_waiting();
            ball.update(150.0, &[], &mut r, &mut events);
            elapsed += 150.0;
            if was_waiting && !ball.is_waiting() {
                transitions += 1;
                assert_eq!(ball.pos, Vec2::new(50.0, 50.0));
            }
        }
        assert_eq!(transitions, 1);
        assert!(events.is_empty());
    }

    // === Ball: collisions and scoring ===

    #[test]
    fn paddle_hit_reflects_amplifies_and_reports() {
        let mut w = active_world();
        let paddle = w.paddle_mut(PlayerSide::Left);
        paddle.x = 4.0;
        paddle.y = 50.0;
        paddle.vy = 0.0;
        // Face at 4 + (2+2)/2 = 6; cross it within one dt=10 tick
        w.ball.pos = Vec2::new(6.2, 50.0);
        w.ball.vel = Vec2::new(-0.05, 0.0);
        w.ball.speed_growth = 1.03;

        let events = w.tick(10.0);

        assert_eq!(events, vec![GameEvent::PaddleHit]);
        // Post-step x was 5.7; reflected to 2*4 + 2 - 5.7 + 2 = 6.3
        assert!((w.ball.pos.x - 6.3).abs() < 1e-4);
        assert!((w.ball.vel.x - 0.05 * 1.03).abs() < 1e-6);
    }

    #[test]
    fn paddle_motion_transfers_into_ball() {
        let mut w = active_world();
        let paddle = w.paddle_mut(PlayerSide::Left);
        paddle.x = 4.0;
        paddle.y = 50.0;
        w.ball.pos = Vec2::new(6.2, 50.0);
        w.ball.vel = Vec2::new(-0.05, 0.0);

        // Give the paddle upward motion during the contact tick
        w.paddle_mut(PlayerSide::Left).vy = -0.1;
        w.paddle_mut(PlayerSide::Left).y = 52.0;
        let before_vy = w.ball.vel.y;
        w.tick(10.0);
        // vy gained 0.2 * paddle.vy (paddle vy decays slightly within the tick)
        assert!(w.ball.vel.y < before_vy);
    }

    #[test]
    fn wall_bounce_leaves_horizontal_speed_untouched() {
        let mut w = active_world();
        w.ball.pos = Vec2::new(50.0, 1.4);
        w.ball.vel = Vec2::new(0.03, -0.05);
        let vx = w.ball.vel.x;

        let events = w.tick(10.0);

        assert!(events.is_empty());
        assert_eq!(w.ball.vel.x, vx);
        assert!(w.ball.vel.y > 0.0);
        // y = 1.4 - 0.5 = 0.9 < 1, reflected to 2 - 0.9 = 1.1
        assert!((w.ball.pos.y - 1.1).abs() < 1e-4);
    }

    #[test]
    fn speed_amplifies_monotonically_across_hits() {
        let mut ball = {
            let mut r = rng();
            Ball::new(2.0, 2.0, &mut r)
        };
        ball.wait_timer = 0.0;
        let paddle = Paddle::new(4.0, 2.0, 20.0, Difficulty::Default);
        let mut r = rng();
        let mut events = Vec::new();

        let mut speed = ball.speed_base;
        ball.vel = Vec2::new(-speed, 0.0);
        for _ in 0..5 {
            // Re-stage a leftward crossing of the face at x=6
            ball.pos = Vec2::new(6.0 + ball.vel.x.abs() * 10.0 - 0.1, 50.0);
            ball.vel.x = -ball.vel.x.abs();
            ball.update(10.0, &[paddle.clone()], &mut r, &mut events);
            let new_speed = ball.vel.x.abs();
            assert!(new_speed > speed);
            assert!((new_speed - speed * ball.speed_growth).abs() < 1e-6);
            speed = new_speed;
        }
        assert_eq!(events.len(), 5);
    }

    #[test]
    fn left_exit_scores_for_right_and_serves_again() {
        let mut w = active_world();
        w.ball.pos = Vec2::new(1.0, 50.0);
        w.ball.vel = Vec2::new(-0.05, 0.02);

        let events = w.tick(10.0);

        assert_eq!(events, vec![GameEvent::PointScored(PlayerSide::Right)]);
        assert_eq!(w.score.right, 1);
        assert_eq!(w.score.left, 0);
        // Waiting was skipped on the scoring tick, so the wait timer is
        // fully armed; the flash overlay already ran and took one dt off
        assert_eq!(w.ball.wait_timer, w.ball.reset_duration);
        assert_eq!(w.ball.flash_timer, w.ball.reset_duration - 10.0);
        // Re-serve away from the conceded border
        assert_eq!(w.ball.vel.x, w.ball.speed_base);
        assert_eq!(w.ball.vel.y.abs(), w.ball.speed_base);
    }

    #[test]
    fn right_exit_scores_for_left() {
        let mut w = active_world();
        w.ball.pos = Vec2::new(99.2, 50.0);
        w.ball.vel = Vec2::new(0.05, 0.0);

        let events = w.tick(10.0);

        assert_eq!(events, vec![GameEvent::PointScored(PlayerSide::Left)]);
        assert_eq!(w.score.left, 1);
        assert_eq!(w.ball.vel.x, -w.ball.speed_base);
    }

    proptest! {
        /// Every scoring event bumps exactly one counter by exactly one.
        #[test]
        fn prop_scoring_bumps_one_counter(seed in any::<u64>()) {
            let mut w = active_world();
            w.rng = Pcg32::seed_from_u64(seed);
            w.ball.pos = Vec2::new(1.0, 50.0);
            w.ball.vel = Vec2::new(-0.05, 0.0);
            let before = w.score;
            let events = w.tick(10.0);
            prop_assert_eq!(events.len(), 1);
            let total = w.score.left + w.score.right;
            prop_assert_eq!(total, before.left + before.right + 1);
            prop_assert_eq!(w.score.left, before.left);
        }
    }

    // === Flash overlay ===

    #[test]
    fn flash_pattern_is_two_visible_one_hidden() {
        let mut ball = {
            let mut r = rng();
            Ball::new(2.0, 2.0, &mut r)
        };
        // Full countdown: 600ms of flash, 100ms bands, ball held Waiting
        ball.wait_timer = f32::INFINITY;
        ball.flash_timer = 600.0;
        let mut r = rng();
        let mut events = Vec::new();

        let mut pattern = Vec::new();
        for _ in 0..6 {
            ball.update(100.0, &[], &mut r, &mut events);
            pattern.push(ball.visible);
        }
        // Bands 500,400,300,200,100,0 -> hidden, visible, visible, hidden,
        // visible, visible
        assert_eq!(pattern, vec![false, true, true, false, true, true]);
    }

    #[test]
    fn flash_runs_while_active_too() {
        let mut w = active_world();
        w.ball.flash_timer = 250.0;
        w.ball.pos = Vec2::new(50.0, 50.0);
        w.ball.vel = Vec2::new(0.01, 0.0);
        w.tick(100.0);
        // 150ms left: band 1, (1+1)%3 != 0 -> visible
        assert!(w.ball.visible);
        assert!(w.ball.pos.x > 50.0);
    }

    // === World ===

    #[test]
    fn paused_world_freezes_timers_and_motion() {
        let mut w = active_world();
        w.ball.pos = Vec2::new(40.0, 40.0);
        w.ball.wait_timer = 300.0;
        w.toggle_pause();
        assert!(w.paused);

        let events = w.tick(1000.0);
        assert!(events.is_empty());
        assert_eq!(w.ball.pos, Vec2::new(40.0, 40.0));
        assert_eq!(w.ball.wait_timer, 300.0);

        // Unpausing does not retroactively advance anything
        w.toggle_pause();
        assert_eq!(w.ball.wait_timer, 300.0);
    }

    #[test]
    fn initial_world_is_paused_at_start_routine() {
        let w = world();
        assert!(w.paused);
        assert!(w.started);
        assert!(w.music_muted);
        assert!(!w.ball.visible);
        assert!(w.ball.is_waiting());
    }

    #[test]
    fn dismiss_start_unpauses_once() {
        let mut w = world();
        w.dismiss_start();
        assert!(!w.started);
        assert!(!w.paused);
        assert!(w.music_muted);
    }

    #[test]
    fn ambient_gate_truth_table() {
        let mut w = world();
        for (paused, muted, playing) in [
            (false, false, true),
            (false, true, false),
            (true, false, false),
            (true, true, false),
        ] {
            w.paused = paused;
            w.music_muted = muted;
            assert_eq!(w.ambient_playing(), playing);
        }
    }
}
