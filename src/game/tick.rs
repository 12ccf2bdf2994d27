//! Simulation Tick
//!
//! The per-tick loop: applies both fighters' intents in identity order,
//! advances the multi-tick hit reactions, recomputes high-level states and
//! facing, and adjudicates end-of-match. Single-threaded and cooperative -
//! everything but the hit reaction completes within the tick that invoked it.

use tracing::info;

use crate::config::MatchConfig;
use crate::game::actions::apply_frame;
use crate::game::events::GameEvent;
use crate::game::input::{FrameInput, InputRecording};
use crate::game::state::{FighterId, MatchPhase, MatchState};

/// Result of a tick.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this tick
    pub events: Vec<GameEvent>,
    /// Whether the match ended this tick
    pub match_ended: bool,
    /// Winner (if the match ended with one fighter standing)
    pub winner: Option<FighterId>,
}

/// Run one simulation tick.
///
/// # Determinism
///
/// Deterministic for a given seed and input sequence: fighters are processed
/// in identity order, and all randomness comes from `state.rng`.
pub fn tick(
    state: &mut MatchState,
    inputs: &[FrameInput; 2],
    config: &MatchConfig,
    dt: f32,
) -> TickResult {
    let mut result = TickResult::default();

    match state.phase {
        MatchPhase::Countdown { ticks_remaining } => {
            if ticks_remaining == 0 {
                state.phase = MatchPhase::Playing;
                info!("fight!");
            } else {
                state.phase = MatchPhase::Countdown {
                    ticks_remaining: ticks_remaining - 1,
                };
            }
            return result;
        }
        MatchPhase::Ended => {
            result.match_ended = true;
            result.winner = state.winner();
            return result;
        }
        MatchPhase::Playing => {}
    }

    state.tick += 1;
    state.clock += dt;

    // 1. Apply fighter intents in identity order.
    //    Both act against the states left by the previous tick, so a
    //    simultaneous exchange resolves fairly.
    let mut moved = [false; 2];
    for id in FighterId::BOTH {
        moved[id.index()] = apply_frame(state, id, &inputs[id.index()], dt, config);
    }

    // 2. Advance hit reactions and decay pose/daze timers
    advance_effects(state, dt);

    // 3. Recompute high-level states
    for id in FighterId::BOTH {
        let was_moved = moved[id.index()];
        state.fighter_mut(id).refresh_state(was_moved, config);
    }

    // 4. Face the opponent
    update_facing(state);

    // 5. End conditions
    check_end_conditions(state, &mut result);

    result.events = state.take_events();
    result
}

/// Advance the per-fighter timed effects.
fn advance_effects(state: &mut MatchState, dt: f32) {
    let MatchState { fighters, rng, .. } = state;
    for fighter in fighters.iter_mut() {
        fighter.reaction.advance(dt, rng);
        fighter.punch_timer = (fighter.punch_timer - dt).max(0.0);
        fighter.daze_timer = (fighter.daze_timer - dt).max(0.0);
    }
}

/// Point each fighter at its opponent. Facing is always exactly +1 or -1.
fn update_facing(state: &mut MatchState) {
    for id in FighterId::BOTH {
        let opponent_x = state.opponent_of(id).position.x;
        let fighter = state.fighter_mut(id);
        fighter.facing = if opponent_x >= fighter.position.x {
            1.0
        } else {
            -1.0
        };
    }
}

/// End the match when a fighter goes down.
fn check_end_conditions(state: &mut MatchState, result: &mut TickResult) {
    let tick = state.tick;
    let downed: Vec<FighterId> = state
        .fighters
        .iter()
        .filter(|f| f.is_down())
        .map(|f| f.id)
        .collect();
    if downed.is_empty() {
        return;
    }

    for id in &downed {
        state.push_event(GameEvent::fighter_downed(tick, *id, id.opponent()));
    }

    state.phase = MatchPhase::Ended;

    // A simultaneous double-down is a draw
    let winner = match downed.as_slice() {
        [single] => Some(single.opponent()),
        _ => None,
    };

    result.match_ended = true;
    result.winner = winner;
    state.push_event(GameEvent::match_ended(tick, winner));

    info!(?winner, tick, "match ended");
}

/// Replay a match from recorded inputs at a fixed timestep.
///
/// Returns the final state and all events. Feeding back a recording made
/// with the same seed reproduces the original match exactly.
pub fn replay_match(
    mut state: MatchState,
    recordings: &[InputRecording; 2],
    tick_count: u32,
    config: &MatchConfig,
) -> (MatchState, Vec<GameEvent>) {
    let mut all_events = Vec::new();
    state.start();

    for _ in 0..tick_count {
        let upcoming = state.tick;
        let inputs = [
            recordings[0].input_at(upcoming),
            recordings[1].input_at(upcoming),
        ];

        let result = tick(&mut state, &inputs, config, crate::TICK_DT);
        all_events.extend(result.events);

        if result.match_ended {
            break;
        }
    }

    (state, all_events)
}

// =============================================================================
// TESTS
// =============================================================================
