//! Microroids entry point
//!
//! Picks a board, wires the collaborator seams, and runs the self-paced
//! ~30 Hz loop. Without real board hardware the autopilot flies a demo
//! against a headless renderer and a logging feedback sink.
//!
//! Usage: `microroids [board-name | config.json] [seed]`

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, anyhow, ensure};

use microroids::board::BoardConfig;
use microroids::consts::TICK_DT;
use microroids::feedback::{FeedbackSink, LogFeedback};
use microroids::input::{Autopilot, InputSource};
use microroids::render::NullRenderer;
use microroids::sim::{GameState, tick};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let board_arg = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "macropad".to_string());
    let config = if board_arg.ends_with(".json") {
        let json = std::fs::read_to_string(&board_arg)
            .with_context(|| format!("reading board config {board_arg}"))?;
        BoardConfig::from_json(&json)
            .with_context(|| format!("parsing board config {board_arg}"))?
    } else {
        BoardConfig::from_name(&board_arg)
            .ok_or_else(|| anyhow!("unknown board {board_arg:?}, expected macropad or funhouse"))?
    };
    // Refuse to run with a config the sim cannot make sense of
    ensure!(
        config.tile_size > 0 && config.shot_tile_size > 0,
        "board {:?} has a zero tile size",
        config.name
    );
    ensure!(
        config.num_roids > 0 && config.num_shots > 0,
        "board {:?} has empty entity pools",
        config.name
    );
    ensure!(
        config.screen_w > 0 && config.screen_h > 0,
        "board {:?} has a zero-sized screen",
        config.name
    );

    let seed = match std::env::args().nth(2) {
        Some(s) => s.parse::<u64>().context("seed must be a u64")?,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0),
    };

    let mut state = GameState::new(config, seed);
    let mut pilot = Autopilot;
    let mut feedback = LogFeedback;
    let mut renderer = NullRenderer;

    let frame_budget = Duration::from_secs_f32(TICK_DT);
    loop {
        let frame_start = Instant::now();

        let input = pilot.poll(&state);
        tick(&mut state, &input);
        for event in state.drain_events() {
            feedback.handle(event);
        }
        state.draw(&mut renderer);

        if state.time_ticks % 30 == 0 {
            log::debug!("t={} score {:03}", state.time_ticks, state.score);
        }

        // Self-pace: measure what the tick cost and sleep off the remainder
        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }
}
