//! Platform abstraction layer
//!
//! - [`RunLoop`]: fixed-timestep scheduling, independent of the host refresh rate
//! - [`headless`]: synthetic-clock driver for native runs and tests
//! - `web`: browser bindings (wasm32 only)

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::HeadlessDriver;

use crate::config::GameConfig;
use crate::renderer::RenderTarget;
use crate::sim::Game;

/// Lifecycle of the run loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Constructed, no frames run yet
    Initialized,
    /// Frames advance the game and should be rescheduled
    Running,
    /// Frames are ignored until `start` is called again
    Stopped,
}

/// Drives `Game::update` at a fixed tick rate from host frame callbacks
///
/// Each host frame feeds elapsed wall time into an accumulator; whole ticks
/// are drained from it, up to `max_substeps` per frame. The game is drawn
/// once per frame regardless of how many ticks ran.
#[derive(Debug, Clone)]
pub struct RunLoop {
    state: LoopState,
    /// Seconds per tick
    sim_dt: f64,
    max_substeps: u32,
    /// Seconds
    max_frame_delta: f64,
    accumulator: f64,
    /// Host timestamp of the previous frame (ms)
    last_time: Option<f64>,
    frames: u64,
}

impl RunLoop {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            state: LoopState::Initialized,
            sim_dt: config.sim_dt() as f64,
            max_substeps: config.max_substeps,
            max_frame_delta: config.max_frame_delta as f64,
            accumulator: 0.0,
            last_time: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames processed while running
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn start(&mut self) {
        if self.state == LoopState::Running {
            return;
        }
        log::info!(
            "Run loop started ({:.0} Hz ticks, max {} substeps)",
            1.0 / self.sim_dt,
            self.max_substeps
        );
        self.state = LoopState::Running;
        // Time spent stopped must not turn into a burst of ticks
        self.last_time = None;
        self.accumulator = 0.0;
    }

    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            log::info!("Run loop stopped after {} frames", self.frames);
            self.state = LoopState::Stopped;
        }
    }

    /// Run the ticks that are due at host time `now_ms`; returns how many ran
    ///
    /// The first frame after `start` runs exactly one tick.
    pub fn advance(&mut self, now_ms: f64, game: &mut Game) -> u32 {
        if !self.is_running() {
            return 0;
        }

        let mut dt = match self.last_time {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0),
            None => self.sim_dt,
        };
        self.last_time = Some(now_ms);

        if dt > self.max_frame_delta {
            log::warn!(
                "Frame delta {:.0} ms clamped to {:.0} ms",
                dt * 1000.0,
                self.max_frame_delta * 1000.0
            );
            dt = self.max_frame_delta;
        }
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.sim_dt && substeps < self.max_substeps {
            game.update();
            self.accumulator -= self.sim_dt;
            substeps += 1;
        }

        if self.accumulator >= self.sim_dt {
            let dropped = (self.accumulator / self.sim_dt) as u64;
            log::warn!("Substep cap hit, dropping {} ticks", dropped);
            self.accumulator %= self.sim_dt;
        }

        substeps
    }

    /// One host frame: advance, then draw
    ///
    /// Returns whether the host should schedule another frame.
    pub fn frame(
        &mut self,
        now_ms: f64,
        game: &mut Game,
        target: &mut dyn RenderTarget,
    ) -> bool {
        if !self.is_running() {
            return false;
        }

        let ticks = self.advance(now_ms, game);
        target.begin_frame();
        game.draw(target);
        self.frames += 1;
        log::trace!("Frame {}: {} ticks", self.frames, ticks);

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawList;

    /// 64 Hz so tick and frame durations are exact in binary
    fn config() -> GameConfig {
        GameConfig {
            tick_rate_hz: 64.0,
            ..Default::default()
        }
    }

    const TICK_MS: f64 = 15.625;

    fn setup() -> (RunLoop, Game, DrawList) {
        let config = config();
        let run_loop = RunLoop::new(&config);
        let game = Game::new(config, 1).unwrap();
        (run_loop, game, DrawList::new(800.0, 600.0))
    }

    #[test]
    fn test_initialized_loop_does_nothing() {
        let (mut run_loop, mut game, mut target) = setup();
        assert_eq!(run_loop.state(), LoopState::Initialized);
        assert!(!run_loop.frame(0.0, &mut game, &mut target));
        assert_eq!(game.ticks, 0);
        assert!(target.commands.is_empty());
    }

    #[test]
    fn test_first_frame_runs_one_tick_and_draws() {
        let (mut run_loop, mut game, mut target) = setup();
        run_loop.start();
        assert!(run_loop.frame(1000.0, &mut game, &mut target));
        assert_eq!(game.ticks, 1);
        assert_eq!(target.last_frame().len(), 8);
        assert_eq!(run_loop.frames(), 1);
    }

    #[test]
    fn test_recorder_holds_only_latest_frame() {
        let (mut run_loop, mut game, mut target) = setup();
        run_loop.start();
        for i in 0..10 {
            run_loop.frame(i as f64 * TICK_MS, &mut game, &mut target);
        }
        // clear + 5 balls + 2 paddles
        assert_eq!(target.commands.len(), 8);
        assert_eq!(target.commands, target.last_frame());
    }

    #[test]
    fn test_ticks_follow_elapsed_time() {
        let (mut run_loop, mut game, _) = setup();
        run_loop.start();
        assert_eq!(run_loop.advance(0.0, &mut game), 1);
        assert_eq!(run_loop.advance(2.0 * TICK_MS, &mut game), 2);
        // Half a tick: nothing yet, then the remainder completes one
        assert_eq!(run_loop.advance(2.5 * TICK_MS, &mut game), 0);
        assert_eq!(run_loop.advance(3.0 * TICK_MS, &mut game), 1);
        assert_eq!(game.ticks, 4);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let (mut run_loop, mut game, _) = setup();
        run_loop.start();
        run_loop.advance(0.0, &mut game);
        // One second away, clamped to 100 ms = 6.4 ticks
        assert_eq!(run_loop.advance(1000.0, &mut game), 6);
    }

    #[test]
    fn test_substep_cap_drops_debt() {
        let config = GameConfig {
            max_substeps: 2,
            ..config()
        };
        let mut run_loop = RunLoop::new(&config);
        let mut game = Game::new(config, 1).unwrap();
        run_loop.start();
        run_loop.advance(0.0, &mut game);

        assert_eq!(run_loop.advance(5.0 * TICK_MS, &mut game), 2);
        // Debt was dropped, so a normal frame runs a single tick
        assert_eq!(run_loop.advance(6.0 * TICK_MS, &mut game), 1);
    }

    #[test]
    fn test_stop_and_restart() {
        let (mut run_loop, mut game, mut target) = setup();
        run_loop.start();
        run_loop.frame(0.0, &mut game, &mut target);

        run_loop.stop();
        assert_eq!(run_loop.state(), LoopState::Stopped);
        assert!(!run_loop.frame(TICK_MS, &mut game, &mut target));
        assert_eq!(game.ticks, 1);

        // Restart after a long pause: no catch-up burst
        run_loop.start();
        assert!(run_loop.frame(60_000.0, &mut game, &mut target));
        assert_eq!(game.ticks, 2);
    }

    #[test]
    fn test_clock_going_backwards_runs_nothing() {
        let (mut run_loop, mut game, _) = setup();
        run_loop.start();
        run_loop.advance(1000.0, &mut game);
        assert_eq!(run_loop.advance(500.0, &mut game), 0);
    }
}
