//! Multiball Pong - five balls, two paddles, one rectangular arena
//!
//! Core modules:
//! - `sim`: Simulation (balls, paddles, input state, per-tick update)
//! - `renderer`: Render target contract plus Canvas 2D, WebGPU and recording backends
//! - `platform`: Fixed-timestep run loop and host drivers
//! - `config`: Injected game configuration

pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{GameConfig, RendererKind, TrackingPolicy};
pub use error::{ConfigError, StartupError};
pub use platform::{LoopState, RunLoop};
pub use renderer::{Color, Rect, RenderTarget};
pub use sim::{Ball, Direction, Game, InputState, Paddle};

/// Default tuning constants
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Number of balls spawned at construction
    pub const BALL_COUNT: usize = 5;
    /// Ball radius range, [min, max)
    pub const BALL_RADIUS_MIN: f32 = 10.0;
    pub const BALL_RADIUS_MAX: f32 = 30.0;
    /// Base speed range per axis, [min, max), before the speed multiplier
    pub const BALL_SPEED_MIN: f32 = 2.0;
    pub const BALL_SPEED_MAX: f32 = 6.0;
    /// Multiplier applied to the base speed at construction
    pub const BALL_SPEED_MULTIPLIER: f32 = 2.0;

    /// Paddle defaults (both paddles share geometry)
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 200.0;
    /// Paddle speed (units per tick)
    pub const PADDLE_SPEED: f32 = 9.0;

    /// Fixed simulation rate
    pub const TICK_RATE_HZ: f32 = 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Frame deltas above this are clamped (seconds)
    pub const MAX_FRAME_DELTA: f32 = 0.1;
}
