use serde::Serialize;

use skyhop_core::game_trait::{Game, GameEvent, GamePhase};
use skyhop_core::input::InputState;
use skyhop_core::time::FixedStep;
use skyhop_platformer::Platformer;

use crate::script::InputScript;

/// Outcome of a scripted run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub level: String,
    /// Script frames consumed.
    pub frames: u64,
    /// Simulation ticks run; differs from `frames` when the script frame
    /// rate is not the simulation tick rate.
    pub ticks: u64,
    pub outcome: GamePhase,
    pub collected_coins: u32,
    pub total_coins: u32,
    pub time_left: f32,
    pub events: Vec<GameEvent>,
}

/// Start `game` and feed it `script` until the script ends or the round
/// completes.
///
/// Script frames are host frames; each one advances a [`FixedStep`] clock
/// at the game's tick rate and runs the ticks it yields.
pub fn run(game: &mut Platformer, script: &InputScript) -> RunSummary {
    let mut clock = FixedStep::new(game.config().tick_rate_hz);
    let frame_dt = 1.0 / script.frame_rate.unwrap_or(game.config().tick_rate_hz);

    game.start();
    let mut input = InputState::default();
    let mut events = Vec::new();
    let mut frames = 0u64;
    let mut ticks = 0u64;

    'frames: for step in script.frames() {
        input.set_left(step.left);
        input.set_right(step.right);
        input.set_jump_held(step.jump);
        frames += 1;

        for _ in 0..clock.advance(frame_dt) {
            let tick_events = game.update(clock.step(), &mut input);
            ticks += 1;
            for event in &tick_events {
                if event.is_round_end() {
                    tracing::info!(frame = frames, tick = ticks, ?event, "Round ended");
                } else {
                    tracing::trace!(frame = frames, tick = ticks, ?event, "Game event");
                }
            }
            events.extend(tick_events);

            if game.is_round_complete() {
                break 'frames;
            }
        }
    }

    let level = game.level();
    RunSummary {
        level: level.name().to_string(),
        frames,
        ticks,
        outcome: game.phase(),
        collected_coins: level.collected_coins(),
        total_coins: level.total_coins(),
        time_left: level.time_left(),
        events,
    }
}
