//! Simulation module
//!
//! All gameplay logic lives here:
//! - Motion is in arena units per tick; one `Game::update` call is one tick
//! - Ball sizes and speeds come from a seeded RNG
//! - Iteration order over balls is the construction order
//! - Drawing goes through `RenderTarget` only, no platform dependencies

pub mod ball;
pub mod collision;
pub mod game;
pub mod input;
pub mod paddle;

pub use ball::Ball;
pub use collision::{deflect_off_paddles, hits_left_paddle, hits_right_paddle};
pub use game::Game;
pub use input::{InputState, keys};
pub use paddle::{Direction, Paddle};

use glam::Vec2;

/// The play field, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
