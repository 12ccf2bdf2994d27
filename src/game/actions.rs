//! Action Resolution
//!
//! Per-tick entry point for one fighter's sampled intent: applies movement,
//! updates the guard, and adjudicates punch attempts against range, guard,
//! and liveness. Every failure path is a policy no-op with an explicit cost;
//! nothing in here raises an error.

use tracing::debug;

use crate::config::MatchConfig;
use crate::game::events::{GameEvent, PunchOutcome};
use crate::game::input::FrameInput;
use crate::game::range::in_range;
use crate::game::state::{FighterId, MatchState};

/// Apply one fighter's frame input. Returns whether the fighter moved.
///
/// When the owner gate refuses the fighter (countdown, dazed, downed), the
/// guard is forced down and nothing else happens.
pub fn apply_frame(
    state: &mut MatchState,
    id: FighterId,
    input: &FrameInput,
    dt: f32,
    config: &MatchConfig,
) -> bool {
    if !state.can_act(id) {
        set_blocking(state, id, false);
        return false;
    }

    // Guard only engages with the opponent in punch range
    let guard = input.block_held && {
        let fighter = state.fighter(id);
        let opponent = state.opponent_of(id);
        in_range(fighter, Some(opponent), config.punch_range)
    };
    set_blocking(state, id, guard);

    // Horizontal movement only; vertical intent is ignored entirely
    let mut moved = false;
    if input.has_movement() {
        let fighter = state.fighter_mut(id);
        fighter.position.x += input.movement.x * config.move_speed * dt;
        moved = true;
    }

    if input.punch_pressed && !state.fighter(id).is_blocking() {
        resolve_attack(state, id, config);
    }

    moved
}

/// Update a fighter's guard flag, emitting an event on change.
fn set_blocking(state: &mut MatchState, id: FighterId, blocking: bool) {
    let tick = state.tick;
    let fighter = state.fighter_mut(id);
    let changed = fighter.blocking != blocking;
    fighter.blocking = blocking;
    if changed {
        state.push_event(GameEvent::block_changed(tick, id, blocking));
    }
}

/// Adjudicate a punch attempt.
///
/// Tiered cost: a whiff (no target or out of range) costs the attacker 1
/// exhaustion, a guarded punch costs 2, a clean hit costs nothing and starts
/// the defender's hit reaction.
pub fn resolve_attack(state: &mut MatchState, id: FighterId, config: &MatchConfig) -> PunchOutcome {
    let tick = state.tick;

    let outcome;
    let mut knockback_dir = None;
    {
        let (attacker, defender) = state.pair_mut(id);

        // The punch pose window opens on every attempt, landed or not
        attacker.punch_timer = config.punch_duration;
        attacker.punch_started_tick = Some(tick);

        outcome = if defender.is_down() {
            PunchOutcome::NoTarget
        } else if !in_range(attacker, Some(&*defender), config.punch_range) {
            PunchOutcome::OutOfRange
        } else if defender.is_blocking() {
            PunchOutcome::Blocked
        } else {
            PunchOutcome::Hit
        };

        match outcome {
            PunchOutcome::NoTarget | PunchOutcome::OutOfRange => attacker.add_exhaustion(1.0),
            PunchOutcome::Blocked => attacker.add_exhaustion(2.0),
            PunchOutcome::Hit => {
                defender.register_hit_taken(config);
                let dir =
                    defender.play_hit_reaction(Some(attacker.position.x), &config.reaction);
                knockback_dir = Some(dir);
            }
        }
    }

    debug!(attacker = id.index(), ?outcome, "punch attempt");

    state.push_event(GameEvent::punch_attempted(tick, id, outcome));
    if let Some(dir) = knockback_dir {
        state.push_event(GameEvent::hit_reaction_started(tick, id.opponent(), dir));
    }

    outcome
}

// =============================================================================
// TESTS
// =============================================================================
