pub mod ball;
pub mod board;
pub mod constants;
pub mod geometry;
pub mod logging;
pub mod paddle;
pub mod render;
pub mod round;
pub mod world_data;
