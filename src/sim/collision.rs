//! Ball versus paddle contact tests
//!
//! Contact only looks at the ball's leading edge horizontally and its center
//! point vertically. A ball whose center is just above or below a paddle
//! passes by even if its rim overlaps.

use super::{Ball, Paddle};

/// The ball's left edge has reached the left paddle's face and its center is
/// within the paddle's span
pub fn hits_left_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.left() <= paddle.x + paddle.width && paddle.spans(ball.pos.y)
}

/// The ball's right edge has reached the right paddle's face and its center is
/// within the paddle's span
pub fn hits_right_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.right() >= paddle.x && paddle.spans(ball.pos.y)
}

/// Flip horizontal velocity once per paddle in contact
///
/// The two checks are independent. A ball touching both paddles in the same
/// tick is flipped twice, leaving its velocity unchanged. Returns the number
/// of flips applied.
pub fn deflect_off_paddles(ball: &mut Ball, left: &Paddle, right: &Paddle) -> u32 {
    let mut flips = 0;

    if hits_left_paddle(ball, left) {
        ball.vel.x = -ball.vel.x;
        flips += 1;
    }

    if hits_right_paddle(ball, right) {
        ball.vel.x = -ball.vel.x;
        flips += 1;
    }

    flips
}
