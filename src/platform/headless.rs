//! Headless frame driver
//!
//! Stands in for the browser's animation-frame scheduler: it calls
//! [`RunLoop::frame`] at a fixed synthetic refresh rate until the loop stops
//! or the frame budget runs out.

use super::RunLoop;
use crate::renderer::RenderTarget;
use crate::sim::Game;

pub struct HeadlessDriver {
    /// Milliseconds between synthetic frames
    frame_interval_ms: f64,
    now_ms: f64,
}

impl HeadlessDriver {
    pub fn new(refresh_hz: f64) -> Self {
        Self {
            frame_interval_ms: 1000.0 / refresh_hz,
            now_ms: 0.0,
        }
    }

    /// Current synthetic clock (ms)
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Run up to `max_frames` frames; returns how many were rendered
    ///
    /// `before_frame` runs ahead of every frame with the frame index, which is
    /// where scripted input (or a call to stop the loop) goes.
    pub fn run<F>(
        &mut self,
        run_loop: &mut RunLoop,
        game: &mut Game,
        target: &mut dyn RenderTarget,
        max_frames: u64,
        mut before_frame: F,
    ) -> u64
    where
        F: FnMut(u64, &mut Game, &mut RunLoop),
    {
        let mut rendered = 0;
        while rendered < max_frames {
            before_frame(rendered, game, run_loop);
            if !run_loop.frame(self.now_ms, game, target) {
                break;
            }
            rendered += 1;
            self.now_ms += self.frame_interval_ms;
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::renderer::DrawList;
    use crate::sim::keys;

    fn config() -> GameConfig {
        GameConfig {
            tick_rate_hz: 64.0,
            ..Default::default()
        }
    }

    fn ticks_after_one_second(refresh_hz: f64) -> u64 {
        let config = config();
        let mut run_loop = RunLoop::new(&config);
        let mut game = Game::new(config, 5).unwrap();
        let mut target = DrawList::new(800.0, 600.0);
        run_loop.start();

        let mut driver = HeadlessDriver::new(refresh_hz);
        driver.run(
            &mut run_loop,
            &mut game,
            &mut target,
            refresh_hz as u64,
            |_, _, _| {},
        );
        game.ticks
    }

    #[test]
    fn test_tick_rate_independent_of_refresh_rate() {
        assert_eq!(ticks_after_one_second(32.0), 63);
        assert_eq!(ticks_after_one_second(64.0), 64);
        assert_eq!(ticks_after_one_second(128.0), 64);
    }

    #[test]
    fn test_stopped_loop_ends_run() {
        let config = config();
        let mut run_loop = RunLoop::new(&config);
        let mut game = Game::new(config, 5).unwrap();
        let mut target = DrawList::new(800.0, 600.0);
        run_loop.start();

        let mut driver = HeadlessDriver::new(60.0);
        let rendered = driver.run(
            &mut run_loop,
            &mut game,
            &mut target,
            1000,
            |frame, _, rl| {
                if frame == 10 {
                    rl.stop();
                }
            },
        );
        assert_eq!(rendered, 10);
        assert!(!run_loop.is_running());
    }

    #[test]
    fn test_scripted_input_reaches_game() {
        let config = config();
        let mut run_loop = RunLoop::new(&config);
        let mut game = Game::new(config, 5).unwrap();
        let mut target = DrawList::new(800.0, 600.0);
        run_loop.start();

        let mut driver = HeadlessDriver::new(64.0);
        driver.run(&mut run_loop, &mut game, &mut target, 5, |frame, game, _| {
            if frame == 0 {
                game.key_down(keys::ARROW_UP);
            }
        });
        assert_eq!(game.ticks, 5);
        assert_eq!(game.player.y, 200.0 - 5.0 * 9.0);
    }
}
