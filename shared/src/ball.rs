use cgmath::Vector2;
use rand::Rng;

use crate::constants::{BALL_RADIUS, BALL_SPEED, PIERCE_LIMIT, WORLD_HEIGHT, WORLD_WIDTH};
use crate::geometry::Rect;

/// The ball, tracked through the bounding square of its circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    pub velocity: Vector2<i32>,
    pub pierce_count: u32,
    pub pierce_limit: u32,
}

impl Ball {
    pub fn new(x: i32, y: i32, velocity: Vector2<i32>) -> Self {
        Ball {
            rect: Rect::new(x, y, BALL_RADIUS * 2, BALL_RADIUS * 2),
            velocity,
            pierce_count: 0,
            pierce_limit: PIERCE_LIMIT,
        }
    }

    /// Serves a ball from the middle of the field, heading up and to a random side.
    pub fn launch<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let dx = if rng.random_bool(0.5) {
            BALL_SPEED
        } else {
            -BALL_SPEED
        };

        Ball::new(WORLD_WIDTH / 2, WORLD_HEIGHT / 2, Vector2::new(dx, -BALL_SPEED))
    }

    pub fn with_pierce_limit(mut self, pierce_limit: u32) -> Self {
        debug_assert!(pierce_limit > 0);
        self.pierce_limit = pierce_limit;
        self
    }

    /// Moves one tick along the current velocity, then bounces off the side and top walls.
    ///
    /// The position is left as computed, so the ball may sit slightly past a wall
    /// for the tick on which it bounces. The bottom edge is open.
    pub fn advance(&mut self) {
        self.rect.translate(self.velocity);

        if self.rect.left() <= 0 || self.rect.right() >= WORLD_WIDTH {
            self.velocity.x = -self.velocity.x;
        }

        if self.rect.top() <= 0 {
            self.velocity.y = -self.velocity.y;
        }
    }

    pub fn bounce_off_paddle(&mut self) {
        self.velocity.y = -self.velocity.y;
        self.reset_pierce_count();
    }

    /// Counts a brick passed through. Returns true when this hit exhausted the
    /// pierce limit and turned the ball around.
    pub fn register_brick_hit(&mut self) -> bool {
        self.pierce_count += 1;

        if self.pierce_count >= self.pierce_limit {
            self.velocity.y = -self.velocity.y;
            self.reset_pierce_count();
            return true;
        }

        false
    }

    pub fn reset_pierce_count(&mut self) {
        self.pierce_count = 0;
    }

    pub fn is_out_of_field(&self) -> bool {
        self.rect.top() > WORLD_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn advance_moves_by_velocity() {
        let mut ball = Ball::new(400, 300, Vector2::new(4, 4));
        ball.advance();

        assert_eq!((ball.rect.x, ball.rect.y), (404, 304));
        assert_eq!(ball.velocity, Vector2::new(4, 4));
    }

    #[test]
    fn left_wall_flips_dx_without_clamping() {
        let mut ball = Ball::new(2, 300, Vector2::new(-4, 4));
        ball.advance();

        assert_eq!(ball.rect.x, -2);
        assert_eq!(ball.velocity, Vector2::new(4, 4));
    }

    #[test]
    fn touching_left_wall_counts_as_contact() {
        let mut ball = Ball::new(4, 300, Vector2::new(-4, 4));
        ball.advance();

        assert_eq!(ball.rect.left(), 0);
        assert_eq!(ball.velocity.x, 4);
    }

    #[test]
    fn right_wall_flips_dx() {
        let mut ball = Ball::new(776, 300, Vector2::new(4, 4));
        ball.advance();

        assert_eq!(ball.rect.right(), WORLD_WIDTH);
        assert_eq!(ball.velocity, Vector2::new(-4, 4));
    }

    #[test]
    fn top_wall_flips_dy_only() {
        let mut ball = Ball::new(400, 2, Vector2::new(4, -4));
        ball.advance();

        assert_eq!(ball.rect.y, -2);
        assert_eq!(ball.velocity, Vector2::new(4, 4));
    }

    #[test]
    fn bottom_edge_does_not_reflect() {
        let mut ball = Ball::new(400, 590, Vector2::new(4, 4));
        ball.advance();

        assert!(ball.rect.bottom() > WORLD_HEIGHT);
        assert_eq!(ball.velocity, Vector2::new(4, 4));
    }

    #[test]
    fn brick_hit_with_default_limit_bounces_immediately() {
        let mut ball = Ball::new(400, 300, Vector2::new(4, -4));

        assert!(ball.register_brick_hit());
        assert_eq!(ball.velocity.y, 4);
        assert_eq!(ball.pierce_count, 0);
    }

    #[test]
    fn ball_pierces_until_limit() {
        let mut ball = Ball::new(400, 300, Vector2::new(4, -4)).with_pierce_limit(3);

        assert!(!ball.register_brick_hit());
        assert!(!ball.register_brick_hit());
        assert_eq!(ball.pierce_count, 2);
        assert_eq!(ball.velocity.y, -4);

        assert!(ball.register_brick_hit());
        assert_eq!(ball.pierce_count, 0);
        assert_eq!(ball.velocity.y, 4);
    }

    #[test]
    fn paddle_bounce_resets_pierce_count() {
        let mut ball = Ball::new(400, 550, Vector2::new(-4, 4)).with_pierce_limit(3);
        ball.register_brick_hit();
        ball.register_brick_hit();

        ball.bounce_off_paddle();

        assert_eq!(ball.pierce_count, 0);
        assert_eq!(ball.velocity, Vector2::new(-4, -4));
    }

    #[test]
    fn out_of_field_only_past_bottom_edge() {
        assert!(!Ball::new(400, WORLD_HEIGHT, Vector2::new(0, 4)).is_out_of_field());
        assert!(Ball::new(400, WORLD_HEIGHT + 1, Vector2::new(0, 4)).is_out_of_field());
    }

    proptest! {
        #[test]
        fn reflection_follows_post_step_edges(
            x in -10..810i32,
            y in -10..610i32,
            dx in prop_oneof![Just(-BALL_SPEED), Just(BALL_SPEED)],
            dy in prop_oneof![Just(-BALL_SPEED), Just(BALL_SPEED)],
        ) {
            let mut ball = Ball::new(x, y, Vector2::new(dx, dy));
            ball.advance();

            let hit_side = ball.rect.left() <= 0 || ball.rect.right() >= WORLD_WIDTH;
            let hit_top = ball.rect.top() <= 0;

            prop_assert_eq!(ball.velocity.x, if hit_side { -dx } else { dx });
            prop_assert_eq!(ball.velocity.y, if hit_top { -dy } else { dy });
        }
    }

    #[test]
    fn launch_serves_upwards_from_center() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..16 {
            let ball = Ball::launch(&mut rng);
            assert_eq!((ball.rect.x, ball.rect.y), (400, 300));
            assert_eq!(ball.velocity.y, -BALL_SPEED);
            assert_eq!(ball.velocity.x.abs(), BALL_SPEED);
            assert_eq!(ball.pierce_count, 0);
        }
    }
}
