pub const WORLD_WIDTH: i32 = 800;
pub const WORLD_HEIGHT: i32 = 600;

pub const FRAMES_PER_SECOND: u32 = 60;
pub const GAME_LOOP_TIMESTEP_SECONDS: f32 = 1.0 / FRAMES_PER_SECOND as f32;

pub const PADDLE_WIDTH: i32 = 100;
pub const PADDLE_HEIGHT: i32 = 10;
pub const PADDLE_SPEED: i32 = 10;
pub const PADDLE_BOTTOM_MARGIN: i32 = 30;

pub const BALL_RADIUS: i32 = 10;
pub const BALL_SPEED: i32 = 4;
pub const PIERCE_LIMIT: u32 = 1;

pub const BRICK_WIDTH: i32 = 75;
pub const BRICK_HEIGHT: i32 = 20;
pub const BRICK_ROWS: usize = 5;
pub const BRICKS_IN_ROW: usize = 10;
pub const BRICK_PADDING: i32 = 5;
pub const BRICK_OFFSET_TOP: i32 = 50;
pub const BRICK_OFFSET_LEFT: i32 = 35;
pub const BRICK_REWARD: u32 = 10;

pub const FONT_SIZE: i32 = 24;
pub const SCORE_TEXT_Y: i32 = 10;
