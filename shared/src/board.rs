use crate::constants::{
    BRICKS_IN_ROW, BRICK_HEIGHT, BRICK_OFFSET_LEFT, BRICK_OFFSET_TOP, BRICK_PADDING, BRICK_ROWS,
    BRICK_WIDTH,
};
use crate::geometry::Rect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brick {
    pub rect: Rect,
}

impl Brick {
    pub fn new(x: i32, y: i32) -> Self {
        Brick {
            rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
        }
    }
}

/// The bricks still standing, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    bricks: Vec<Brick>,
}

impl Default for Board {
    fn default() -> Self {
        Self::generate()
    }
}

impl Board {
    pub fn generate() -> Self {
        let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICKS_IN_ROW);

        for row_index in 0..BRICK_ROWS as i32 {
            for brick_index in 0..BRICKS_IN_ROW as i32 {
                bricks.push(Brick::new(
                    BRICK_OFFSET_LEFT + brick_index * (BRICK_WIDTH + BRICK_PADDING),
                    BRICK_OFFSET_TOP + row_index * (BRICK_HEIGHT + BRICK_PADDING),
                ));
            }
        }

        Board { bricks }
    }

    pub fn from_bricks(bricks: Vec<Brick>) -> Self {
        Board { bricks }
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Index of the first brick, in board order, that overlaps `rect`.
    pub fn first_hit(&self, rect: &Rect) -> Option<usize> {
        self.bricks.iter().position(|brick| brick.rect.overlaps(rect))
    }

    /// Removes the brick at `index`, keeping the order of the rest.
    pub fn remove_brick(&mut self, index: usize) -> Brick {
        self.bricks.remove(index)
    }
}
