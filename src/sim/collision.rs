//! Swept paddle-ball collision math
//!
//! The test is 1-D and axis-aligned, tuned for gameplay feel rather than
//! rigid-body accuracy. Comparing the pre-step and post-step positions
//! against the paddle face catches fast crossings that a pure overlap test
//! would miss, and only fires while crossing in the direction of travel, so
//! an overlapping ball cannot re-trigger.

use glam::Vec2;

use super::state::Paddle;

/// One-sided swept crossing test against a vertical face.
///
/// `new_x` is the post-step position; `prev_x` is where the ball was before
/// the step (`new_x - vx*dt`). For leftward motion the crossing fires when
/// the ball ends at or past the face having started beyond it; rightward is
/// symmetric.
#[inline]
pub fn crossed_face(new_x: f32, prev_x: f32, vx: f32, face: f32) -> bool {
    if vx < 0.0 {
        new_x <= face && prev_x > face
    } else {
        new_x >= face && prev_x < face
    }
}

/// Swept collision between the ball (at its post-step position) and a paddle.
///
/// The face sits half the combined widths away from the paddle center, on
/// the side the ball travels toward; the vertical band is half the combined
/// heights.
pub fn paddle_collision(
    pos: Vec2,
    prev_x: f32,
    vx: f32,
    ball_size: Vec2,
    paddle: &Paddle,
) -> bool {
    let avg_w = (paddle.width + ball_size.x) / 2.0;
    let avg_h = (paddle.height + ball_size.y) / 2.0;
    let face = if vx < 0.0 {
        paddle.x + avg_w
    } else {
        paddle.x - avg_w
    };
    crossed_face(pos.x, prev_x, vx, face) && (pos.y - paddle.y).abs() <= avg_h
}

/// Reposition by reflection after a paddle hit.
///
/// Mirrors the overshoot back across the face instead of just inverting the
/// velocity, so the ball never renders inside the paddle.
#[inline]
pub fn reflected_x(x: f32, vx: f32, paddle: &Paddle, ball_width: f32) -> f32 {
    if vx < 0.0 {
        2.0 * paddle.x + paddle.width - x + ball_width
    } else {
        2.0 * paddle.x - paddle.width - x - ball_width
    }
}
