//! Rendering seam
//!
//! The sim exposes its drawable state through [`World::draw`]; backends
//! implement [`Renderer`]. Coordinates and sizes are field percent, so a
//! backend scales once by its own viewport and nothing in the sim changes
//! when the window does.

use glam::Vec2;

use crate::sim::{EntityId, World};

/// Drawing backend. One `draw` call per entity per frame, centers and sizes
/// in field percent.
pub trait Renderer {
    fn draw(&mut self, id: EntityId, center: Vec2, size: Vec2, visible: bool);

    /// Update the score display. Called only when the tally changes, not
    /// every frame.
    fn refresh_score(&mut self, left: u32, right: u32);
}

/// Renderer that discards everything, for tests and headless runs
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _id: EntityId, _center: Vec2, _size: Vec2, _visible: bool) {}
    fn refresh_score(&mut self, _left: u32, _right: u32) {}
}

/// Renderer that logs draw calls, for demos and debugging
#[derive(Debug, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn draw(&mut self, id: EntityId, center: Vec2, size: Vec2, visible: bool) {
        log::trace!(
            "draw {:?} at ({:.1}, {:.1}) size ({:.1}, {:.1}) visible={}",
            id,
            center.x,
            center.y,
            size.x,
            size.y,
            visible
        );
    }

    fn refresh_score(&mut self, left: u32, right: u32) {
        log::info!("score: {} - {}", left, right);
    }
}

impl World {
    /// Emit one frame of draw calls, entities in registration order.
    ///
    /// The paddles are always visible; the ball carries its flash-overlay
    /// visibility with it.
    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        for (i, paddle) in self.paddles.iter().enumerate() {
            let id = if i == 0 {
                EntityId::PaddleLeft
            } else {
                EntityId::PaddleRight
            };
            renderer.draw(
                id,
                Vec2::new(paddle.x, paddle.y),
                Vec2::new(paddle.width, paddle.height),
                true,
            );
        }
        renderer.draw(
            EntityId::Ball,
            self.ball.pos,
            Vec2::new(self.ball.width, self.ball.height),
            self.ball.visible,
        );
    }
}
