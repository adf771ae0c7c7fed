use crate::ball::Ball;
use crate::constants::{
    PADDLE_BOTTOM_MARGIN, PADDLE_HEIGHT, PADDLE_SPEED, PADDLE_WIDTH, WORLD_HEIGHT, WORLD_WIDTH,
};
use crate::geometry::Rect;

/// The computer-controlled paddle.
///
/// Every tick the paddle predicts where the ball will cross the bottom edge and
/// steps toward that point at full speed. It never reacts to player input.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub rect: Rect,
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}

impl Paddle {
    pub fn new() -> Self {
        Paddle {
            rect: Rect::new(
                WORLD_WIDTH / 2 - PADDLE_WIDTH / 2,
                WORLD_HEIGHT - PADDLE_BOTTOM_MARGIN,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
        }
    }

    #[cfg(test)]
    pub fn at(x: i32) -> Self {
        let mut paddle = Paddle::new();
        paddle.rect.x = x;
        paddle
    }

    pub fn follow(&mut self, ball: &Ball) {
        let target_x = self.choose_target_x(ball);
        self.step_toward(target_x);
    }

    /// Predicts the x coordinate at which a falling ball reaches the bottom edge.
    ///
    /// The ball is assumed to travel in a straight line at its current velocity;
    /// wall bounces on the way down are accounted for only by folding the
    /// landing point back into the field. A ball that is not falling leaves the
    /// paddle where it is.
    pub fn choose_target_x(&self, ball: &Ball) -> f32 {
        if ball.velocity.y <= 0 {
            return self.rect.center_x() as f32;
        }

        let time_to_bottom = (WORLD_HEIGHT - ball.rect.bottom()) as f32 / ball.velocity.y as f32;
        let predicted_x = ball.rect.left() as f32 + ball.velocity.x as f32 * time_to_bottom;

        fold_into_field(predicted_x)
    }

    /// Moves one full step toward `target_x`, or holds when already there or
    /// pressed against the wall on that side.
    pub fn step_toward(&mut self, target_x: f32) {
        let center_x = self.rect.center_x() as f32;

        if target_x < center_x && self.rect.left() > 0 {
            self.rect.x = (self.rect.x - PADDLE_SPEED).max(0);
        } else if target_x > center_x && self.rect.right() < WORLD_WIDTH {
            self.rect.x = (self.rect.x + PADDLE_SPEED).min(WORLD_WIDTH - self.rect.width);
        }
    }
}

/// Reflects an x coordinate off the side walls, as many times as needed, into `[0, WORLD_WIDTH]`.
pub fn fold_into_field(x: f32) -> f32 {
    let width = WORLD_WIDTH as f32;
    let folded = x.rem_euclid(2.0 * width);

    if folded > width {
        2.0 * width - folded
    } else {
        folded
    }
}
