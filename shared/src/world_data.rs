use rand::Rng;

use crate::ball::Ball;
use crate::board::Board;
use crate::paddle::Paddle;

/// Everything a single round owns.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldData {
    pub paddle: Paddle,
    pub ball: Ball,
    pub board: Board,
    pub score: u32,
}

impl WorldData {
    pub fn new(paddle: Paddle, ball: Ball, board: Board) -> Self {
        WorldData {
            paddle,
            ball,
            board,
            score: 0,
        }
    }

    /// Fresh paddle, freshly served ball and a full board.
    pub fn create<R: Rng + ?Sized>(rng: &mut R) -> Self {
        WorldData::new(Paddle::new(), Ball::launch(rng), Board::generate())
    }
}
