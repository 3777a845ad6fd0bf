//! Game orchestration: one tick of simulation and one frame of drawing

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::deflect_off_paddles;
use super::input::keys;
use super::{Arena, Ball, Direction, InputState, Paddle};
use crate::config::{GameConfig, TrackingPolicy};
use crate::error::ConfigError;
use crate::renderer::RenderTarget;

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    pub config: GameConfig,
    pub arena: Arena,
    /// Fixed order: draw order and AI tracking both depend on it
    pub balls: Vec<Ball>,
    /// Left paddle, driven by the arrow keys
    pub player: Paddle,
    /// Right paddle, driven by the tracking heuristic
    pub ai: Paddle,
    pub input: InputState,
    /// Seed the balls were generated from
    pub seed: u64,
    /// Simulation tick counter
    pub ticks: u64,
}

impl Game {
    /// Build a game from a validated config
    ///
    /// Balls all start at the arena center with random size and speed; ball
    /// `i` takes `palette[i]`. Both paddles start vertically centered.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let arena = Arena::new(config.arena_width, config.arena_height);
        let mut rng = Pcg32::seed_from_u64(seed);

        let balls = config
            .palette
            .iter()
            .take(config.ball_count)
            .map(|&color| Ball::spawn(&mut rng, &config, arena.center(), color))
            .collect();

        let paddle_y = arena.height / 2.0 - config.paddle_height / 2.0;
        let player = Paddle::new(
            0.0,
            paddle_y,
            config.paddle_width,
            config.paddle_height,
            true,
            config.paddle_speed,
        );
        let ai = Paddle::new(
            arena.width - config.paddle_width,
            paddle_y,
            config.paddle_width,
            config.paddle_height,
            false,
            config.paddle_speed,
        );

        log::debug!(
            "Game created: {} balls in {}x{} arena, seed {}",
            config.ball_count,
            arena.width,
            arena.height,
            seed
        );

        Ok(Self {
            config,
            arena,
            balls,
            player,
            ai,
            input: InputState::new(),
            seed,
            ticks: 0,
        })
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    /// Advance the simulation by one tick
    pub fn update(&mut self) {
        self.ticks += 1;

        for ball in &mut self.balls {
            ball.move_step(self.arena);
            let flips = deflect_off_paddles(ball, &self.player, &self.ai);
            if flips > 1 {
                log::trace!("Ball touched both paddles on tick {}", self.ticks);
            }
        }

        // Both keys held: up then down, applied one after the other
        if self.input.is_held(keys::ARROW_UP) {
            self.player.move_dir(Direction::Up, self.arena);
        }
        if self.input.is_held(keys::ARROW_DOWN) {
            self.player.move_dir(Direction::Down, self.arena);
        }

        if let Some(ball) = tracked_ball(self.config.tracking, &self.balls, &self.ai) {
            if self.config.ai_respects_bounds {
                if let Some(direction) = self.ai.tracking_direction(ball) {
                    self.ai.move_dir(direction, self.arena);
                }
            } else {
                self.ai.auto_move(ball);
            }
        }
    }

    /// Paint one frame: clear, balls in order, player paddle, AI paddle
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        target.clear(target.bounds());

        for ball in &self.balls {
            ball.draw(target);
        }

        self.player
            .draw(target, self.config.player_color, self.config.ai_color);
        self.ai
            .draw(target, self.config.player_color, self.config.ai_color);
    }
}

/// Ball the AI paddle should follow under the given policy
fn tracked_ball<'a>(
    policy: TrackingPolicy,
    balls: &'a [Ball],
    ai: &Paddle,
) -> Option<&'a Ball> {
    match policy {
        TrackingPolicy::FirstBall => balls.first(),
        TrackingPolicy::Nearest => balls.iter().min_by(|a, b| {
            let da = (ai.x - a.pos.x).abs();
            let db = (ai.x - b.pos.x).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        }),
    }
}
