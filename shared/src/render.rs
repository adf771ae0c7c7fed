//! Frame layout, independent of the windowing backend.
//!
//! The game describes each frame as a handful of draw calls against a
//! [`Surface`]. The client implements it on top of raylib; tests record the
//! calls instead.

use crate::constants::{SCORE_TEXT_Y, WORLD_HEIGHT, WORLD_WIDTH};
use crate::geometry::Rect;
use crate::world_data::WorldData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Background,
    Paddle,
    Ball,
    Brick,
    Text,
    LossTitle,
    WinTitle,
}

pub trait Surface {
    fn clear(&mut self, paint: Paint);

    fn fill_rect(&mut self, rect: Rect, paint: Paint);

    /// Fills the ellipse inscribed in `bounds`.
    fn fill_ellipse(&mut self, bounds: Rect, paint: Paint);

    /// Width in pixels of `text` in the game font.
    fn text_width(&self, text: &str) -> i32;

    fn write_text(&mut self, text: &str, x: i32, y: i32, paint: Paint);
}

pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, world: &WorldData) {
    surface.clear(Paint::Background);
    surface.fill_rect(world.paddle.rect, Paint::Paddle);
    surface.fill_ellipse(world.ball.rect, Paint::Ball);

    for brick in world.board.bricks() {
        surface.fill_rect(brick.rect, Paint::Brick);
    }

    write_centered(surface, &format!("Score: {}", world.score), SCORE_TEXT_Y, Paint::Text);
}

pub fn draw_end_screen<S: Surface + ?Sized>(surface: &mut S, score: u32, won: bool) {
    let middle = WORLD_HEIGHT / 2;

    surface.clear(Paint::Background);

    if won {
        write_centered(surface, "You Win!", middle - 50, Paint::WinTitle);
    } else {
        write_centered(surface, "Game Over!", middle - 50, Paint::LossTitle);
    }

    write_centered(surface, &format!("Your Score: {}", score), middle, Paint::Text);
    write_centered(surface, "Press any key to restart", middle + 50, Paint::Text);
}

fn write_centered<S: Surface + ?Sized>(surface: &mut S, text: &str, y: i32, paint: Paint) {
    let x = WORLD_WIDTH / 2 - surface.text_width(text) / 2;
    surface.write_text(text, x, y, paint);
}
