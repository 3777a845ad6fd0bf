//! Ball entity: motion and wall bounces

use glam::Vec2;
use rand::Rng;

use super::Arena;
use crate::config::GameConfig;
use crate::renderer::{Color, RenderTarget};

/// A bouncing ball
///
/// Radius and the magnitude of each velocity component are fixed at
/// construction; only position and the velocity signs change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    /// Units per tick
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, vel: Vec2, color: Color) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Random radius and speed from the configured ranges, spawned at `pos`
    ///
    /// Both velocity components start positive (moving right and down).
    pub fn spawn<R: Rng>(rng: &mut R, config: &GameConfig, pos: Vec2, color: Color) -> Self {
        let radius = rng.random_range(config.ball_radius_min..config.ball_radius_max);
        let speed_x = rng.random_range(config.ball_speed_min..config.ball_speed_max);
        let speed_y = rng.random_range(config.ball_speed_min..config.ball_speed_max);
        let vel = Vec2::new(speed_x, speed_y) * config.ball_speed_multiplier;
        Self::new(pos, radius, vel, color)
    }

    pub fn draw(&self, target: &mut dyn RenderTarget) {
        target.fill_circle(self.pos, self.radius, self.color);
    }

    /// Advance one tick, then bounce off the arena walls
    ///
    /// The position is never corrected, so a ball may overshoot a wall by up
    /// to one tick of travel before its velocity flips.
    pub fn move_step(&mut self, arena: Arena) {
        self.pos += self.vel;

        if self.pos.y - self.radius <= 0.0 || self.pos.y + self.radius >= arena.height {
            self.vel.y = -self.vel.y;
        }

        if self.pos.x - self.radius <= 0.0 || self.pos.x + self.radius >= arena.width {
            self.vel.x = -self.vel.x;
        }
    }

    /// Recenter and reverse horizontal direction
    ///
    /// Nothing in the game loop calls this yet.
    pub fn reset(&mut self, arena: Arena) {
        self.pos = arena.center();
        self.vel.x = -self.vel.x;
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}
