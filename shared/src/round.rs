use log::{debug, info};
use rand::Rng;

use crate::constants::BRICK_REWARD;
use crate::world_data::WorldData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Playing,
    Ended { won: bool },
}

/// One playthrough, from a full board until the ball is lost or the board is cleared.
#[derive(Debug, Clone)]
pub struct Round {
    world: WorldData,
    state: RoundState,
    ticks: u64,
}

impl Round {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let round = Round::from_world(WorldData::create(rng));
        info!(
            "Round started with {} bricks, ball heading {}",
            round.world.board.len(),
            if round.world.ball.velocity.x < 0 { "left" } else { "right" }
        );
        round
    }

    pub fn from_world(world: WorldData) -> Self {
        Round {
            world,
            state: RoundState::Playing,
            ticks: 0,
        }
    }

    pub fn world(&self) -> &WorldData {
        &self.world
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.world.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advances the simulation by one frame and returns the resulting state.
    ///
    /// At most one brick is destroyed per tick. Ticking a finished round is a no-op.
    pub fn tick(&mut self) -> RoundState {
        if self.state != RoundState::Playing {
            return self.state;
        }

        self.ticks += 1;

        let world = &mut self.world;

        world.ball.advance();
        world.paddle.follow(&world.ball);

        if world.ball.rect.overlaps(&world.paddle.rect) {
            world.ball.bounce_off_paddle();
            debug!("Ball bounced off paddle at x={}", world.ball.rect.center_x());
        }

        if let Some(index) = world.board.first_hit(&world.ball.rect) {
            let brick = world.board.remove_brick(index);
            world.score += BRICK_REWARD;
            let bounced = world.ball.register_brick_hit();
            debug!(
                "Brick at ({}, {}) destroyed, score {}, bounced: {}",
                brick.rect.x, brick.rect.y, world.score, bounced
            );
        }

        if world.ball.is_out_of_field() {
            self.state = RoundState::Ended { won: false };
        } else if world.board.is_empty() {
            self.state = RoundState::Ended { won: true };
        }

        if let RoundState::Ended { won } = self.state {
            info!(
                "Round {} after {} ticks with score {}",
                if won { "won" } else { "lost" },
                self.ticks,
                world.score
            );
        }

        self.state
    }
}
