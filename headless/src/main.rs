use log::{info, warn};
use shared::logging::init_logging;
use shared::round::{Round, RoundState};
use tracing::info_span;

/// Ten minutes of play at sixty frames per second.
const MAX_HEADLESS_TICKS: u64 = 60 * 60 * 10;

fn main() {
    init_logging();

    let mut rng = rand::rng();
    let _span = info_span!("headless round").entered();

    let mut round = Round::new(&mut rng);
    let mut state = RoundState::Playing;

    while state == RoundState::Playing && round.ticks() < MAX_HEADLESS_TICKS {
        state = round.tick();
    }

    let bricks_left = round.world().board.len();

    match state {
        RoundState::Ended { won } => info!(
            "Outcome: {}, score {}, ticks {}, bricks left {}",
            if won { "won" } else { "lost" },
            round.score(),
            round.ticks(),
            bricks_left
        ),
        RoundState::Playing => warn!(
            "Outcome: unfinished after {} ticks, score {}, bricks left {}",
            round.ticks(),
            round.score(),
            bricks_left
        ),
    }
}
