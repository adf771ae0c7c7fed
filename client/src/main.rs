use log::info;
use rand::rngs::ThreadRng;
use raylib::color::Color;
use raylib::drawing::{RaylibDraw, RaylibDrawHandle};
use raylib::init;
use raylib::text::measure_text;
use raylib::{RaylibHandle, RaylibThread};
use shared::constants::{FONT_SIZE, GAME_LOOP_TIMESTEP_SECONDS, WORLD_HEIGHT, WORLD_WIDTH};
use shared::geometry::Rect;
use shared::logging::init_logging;
use shared::render::{draw_end_screen, draw_frame, Paint, Surface};
use shared::round::{Round, RoundState};
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{info_span, Instrument};

/// What the session loop does once a round's end screen is dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionControl {
    Restart,
    Quit,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    let (mut handle, thread) = init()
        .size(WORLD_WIDTH, WORLD_HEIGHT)
        .title("Brick Breaker")
        .build();

    let mut ticker = interval(Duration::from_secs_f32(GAME_LOOP_TIMESTEP_SECONDS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut rng = rand::rng();
    let mut round_number: u64 = 0;

    loop {
        round_number += 1;

        let control = play_round(&mut handle, &thread, &mut ticker, &mut rng)
            .instrument(info_span!("round", number = round_number))
            .await;

        if control == SessionControl::Quit {
            break;
        }
    }

    info!("Quit after {} rounds", round_number);
}

async fn play_round(
    handle: &mut RaylibHandle,
    thread: &RaylibThread,
    ticker: &mut Interval,
    rng: &mut ThreadRng,
) -> SessionControl {
    let mut round = Round::new(rng);

    loop {
        if handle.window_should_close() {
            return SessionControl::Quit;
        }

        let state = round.tick();

        draw_frame(&mut RaylibSurface(handle.begin_drawing(thread)), round.world());

        ticker.tick().await;

        if let RoundState::Ended { won } = state {
            return wait_for_restart(handle, thread, ticker, round.score(), won).await;
        }
    }
}

async fn wait_for_restart(
    handle: &mut RaylibHandle,
    thread: &RaylibThread,
    ticker: &mut Interval,
    score: u32,
    won: bool,
) -> SessionControl {
    loop {
        if handle.window_should_close() {
            return SessionControl::Quit;
        }

        draw_end_screen(&mut RaylibSurface(handle.begin_drawing(thread)), score, won);

        if handle.get_key_pressed().is_some() {
            return SessionControl::Restart;
        }

        ticker.tick().await;
    }
}

fn color_of(paint: Paint) -> Color {
    match paint {
        Paint::Background => Color::new(0, 0, 0, 255),
        Paint::Paddle => Color::new(0, 0, 255, 255),
        Paint::Ball | Paint::LossTitle => Color::new(255, 0, 0, 255),
        Paint::Brick | Paint::WinTitle => Color::new(0, 255, 0, 255),
        Paint::Text => Color::new(255, 255, 255, 255),
    }
}

/// One frame of the raylib window, presented when dropped.
struct RaylibSurface<'a>(RaylibDrawHandle<'a>);

impl Surface for RaylibSurface<'_> {
    fn clear(&mut self, paint: Paint) {
        self.0.clear_background(color_of(paint));
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        self.0.draw_rectangle(rect.x, rect.y, rect.width, rect.height, color_of(paint));
    }

    fn fill_ellipse(&mut self, bounds: Rect, paint: Paint) {
        self.0.draw_ellipse(
            bounds.center_x(),
            bounds.center_y(),
            bounds.width as f32 / 2.0,
            bounds.height as f32 / 2.0,
            color_of(paint),
        );
    }

    fn text_width(&self, text: &str) -> i32 {
        measure_text(text, FONT_SIZE)
    }

    fn write_text(&mut self, text: &str, x: i32, y: i32, paint: Paint) {
        self.0.draw_text(text, x, y, FONT_SIZE, color_of(paint));
    }
}
