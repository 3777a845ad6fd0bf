//! Paddle entity: player and heuristic movement

use super::{Arena, Ball};
use crate::renderer::{Color, Rect, RenderTarget};

/// Vertical movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Parse `"up"` / `"down"`; anything else is not a direction
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// A vertical paddle
///
/// `x` is fixed at construction; paddles only move vertically.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub is_player_controlled: bool,
    /// Units per tick
    pub speed: f32,
}

impl Paddle {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        is_player_controlled: bool,
        speed: f32,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            is_player_controlled,
            speed,
        }
    }

    /// Fill color depends only on the control mode
    pub fn draw(&self, target: &mut dyn RenderTarget, player_color: Color, ai_color: Color) {
        let color = if self.is_player_controlled {
            player_color
        } else {
            ai_color
        };
        target.fill_rect(self.rect(), color);
    }

    /// Move one step if the pre-move position allows it
    ///
    /// Up needs `y > 0`, down needs `y + height < arena height`. The check
    /// happens before the step, so a paddle can end a step past either edge
    /// when `speed` does not divide the gap.
    pub fn move_dir(&mut self, direction: Direction, arena: Arena) {
        match direction {
            Direction::Up if self.y > 0.0 => self.y -= self.speed,
            Direction::Down if self.y + self.height < arena.height => self.y += self.speed,
            _ => {}
        }
    }

    /// String-keyed movement; unknown names do nothing
    pub fn move_named(&mut self, direction: &str, arena: Arena) {
        if let Some(direction) = Direction::parse(direction) {
            self.move_dir(direction, arena);
        }
    }

    /// Step toward a ball's height with no boundary checks
    pub fn auto_move(&mut self, ball: &Ball) {
        if let Some(direction) = self.tracking_direction(ball) {
            match direction {
                Direction::Up => self.y -= self.speed,
                Direction::Down => self.y += self.speed,
            }
        }
    }

    /// Which way the heuristic wants to go; `None` when the ball is level with the center
    pub fn tracking_direction(&self, ball: &Ball) -> Option<Direction> {
        let center = self.center_y();
        if ball.pos.y < center {
            Some(Direction::Up)
        } else if ball.pos.y > center {
            Some(Direction::Down)
        } else {
            None
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Whether `y` lies within the paddle's vertical span, edges included
    #[inline]
    pub fn spans(&self, y: f32) -> bool {
        y >= self.y && y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use glam::Vec2;
    use proptest::prelude::*;

    const ARENA: Arena = Arena::new(800.0, 600.0);

    fn player_at(y: f32) -> Paddle {
        Paddle::new(0.0, y, 10.0, 200.0, true, 9.0)
    }

    fn ball_at_y(y: f32) -> Ball {
        Ball::new(Vec2::new(400.0, y), 10.0, Vec2::new(4.0, 4.0), Color::RED)
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(Direction::parse("up"), Some(Direction::Up));
        assert_eq!(Direction::parse("down"), Some(Direction::Down));
        assert_eq!(Direction::parse("left"), None);
        assert_eq!(Direction::parse("UP"), None);
    }

    #[test]
    fn test_move_up_guard_uses_pre_move_value() {
        let mut paddle = player_at(4.0);
        paddle.move_dir(Direction::Up, ARENA);
        assert_eq!(paddle.y, -5.0);

        // Now y <= 0, further moves up are refused
        paddle.move_dir(Direction::Up, ARENA);
        assert_eq!(paddle.y, -5.0);
    }

    #[test]
    fn test_move_down_stops_at_bottom() {
        let mut paddle = player_at(400.0);
        paddle.move_dir(Direction::Down, ARENA);
        assert_eq!(paddle.y, 400.0);

        let mut paddle = player_at(395.0);
        paddle.move_dir(Direction::Down, ARENA);
        assert_eq!(paddle.y, 404.0);
        paddle.move_dir(Direction::Down, ARENA);
        assert_eq!(paddle.y, 404.0);
    }

    #[test]
    fn test_unknown_direction_is_noop() {
        let mut paddle = player_at(200.0);
        paddle.move_named("sideways", ARENA);
        paddle.move_named("", ARENA);
        assert_eq!(paddle.y, 200.0);

        paddle.move_named("down", ARENA);
        assert_eq!(paddle.y, 209.0);
    }

    #[test]
    fn test_auto_move_tracks_ball() {
        let mut ai = Paddle::new(790.0, 200.0, 10.0, 200.0, false, 9.0);
        ai.auto_move(&ball_at_y(50.0));
        assert_eq!(ai.y, 191.0);

        ai.auto_move(&ball_at_y(580.0));
        assert_eq!(ai.y, 200.0);

        // Level with the center: no movement
        ai.auto_move(&ball_at_y(300.0));
        assert_eq!(ai.y, 200.0);
    }

    #[test]
    fn test_auto_move_ignores_arena_bounds() {
        let mut ai = Paddle::new(790.0, 0.0, 10.0, 200.0, false, 9.0);
        ai.auto_move(&ball_at_y(0.0));
        assert_eq!(ai.y, -9.0);
    }

    #[test]
    fn test_draw_color_from_control_mode() {
        let mut list = DrawList::new(800.0, 600.0);
        player_at(200.0).draw(&mut list, Color::BLUE, Color::GREEN);
        Paddle::new(790.0, 200.0, 10.0, 200.0, false, 9.0).draw(
            &mut list,
            Color::BLUE,
            Color::GREEN,
        );

        assert_eq!(
            list.commands,
            vec![
                DrawCommand::Rect {
                    rect: Rect::new(0.0, 200.0, 10.0, 200.0),
                    color: Color::BLUE,
                },
                DrawCommand::Rect {
                    rect: Rect::new(790.0, 200.0, 10.0, 200.0),
                    color: Color::GREEN,
                },
            ]
        );
    }

    #[test]
    fn test_spans_is_inclusive() {
        let paddle = player_at(200.0);
        assert!(paddle.spans(200.0));
        assert!(paddle.spans(400.0));
        assert!(!paddle.spans(199.9));
        assert!(!paddle.spans(400.1));
    }

    proptest! {
        #[test]
        fn prop_player_paddle_never_runs_away(
            start in 0.0f32..=400.0,
            moves in prop::collection::vec(any::<bool>(), 0..500),
        ) {
            let mut paddle = player_at(start);
            for up in moves {
                let direction = if up { Direction::Up } else { Direction::Down };
                paddle.move_dir(direction, ARENA);
                // The pre-move guard allows at most one step past either edge
                prop_assert!(paddle.y >= -paddle.speed);
                prop_assert!(paddle.y + paddle.height <= ARENA.height + paddle.speed);
            }
        }
    }
}
