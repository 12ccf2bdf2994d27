//! Game Events
//!
//! Events generated during simulation for passive observers (match-history
//! timeline, demo logging) and replay inspection. Observers never feed back
//! into the simulation.

use serde::{Deserialize, Serialize};

use crate::game::state::FighterId;

/// Outcome of a punch attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PunchOutcome {
    /// Opponent missing or already downed; attacker pays 1 exhaustion
    NoTarget,
    /// Opponent beyond punch range; attacker pays 1 exhaustion
    OutOfRange,
    /// Opponent guarded in range; attacker pays 2 exhaustion
    Blocked,
    /// Clean hit; the defender's hit reaction starts
    Hit,
}

/// Game event data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEventData {
    /// A punch was attempted, with its adjudicated outcome
    PunchAttempted {
        /// Attacking fighter
        attacker: FighterId,
        /// How the attack resolved
        outcome: PunchOutcome,
    },

    /// A fighter's guard engaged or dropped
    BlockChanged {
        /// Fighter whose guard changed
        fighter: FighterId,
        /// New guard state
        blocking: bool,
    },

    /// A hit reaction started on a fighter
    HitReactionStarted {
        /// Reacting fighter
        fighter: FighterId,
        /// Knockback direction (+1 or -1)
        knockback_dir: f32,
    },

    /// A fighter was downed
    FighterDowned {
        /// Downed fighter
        fighter: FighterId,
        /// The fighter who landed the final punch
        by: FighterId,
    },

    /// The match ended
    MatchEnded {
        /// Winner, if the match ended with one fighter standing
        winner: Option<FighterId>,
        /// Total match length in ticks
        duration_ticks: u32,
    },
}

/// A game event with the tick it occurred on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Tick when the event occurred
    pub tick: u32,
    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a punch attempted event.
    pub fn punch_attempted(tick: u32, attacker: FighterId, outcome: PunchOutcome) -> Self {
        Self {
            tick,
            data: GameEventData::PunchAttempted { attacker, outcome },
        }
    }

    /// Create a block changed event.
    pub fn block_changed(tick: u32, fighter: FighterId, blocking: bool) -> Self {
        Self {
            tick,
            data: GameEventData::BlockChanged { fighter, blocking },
        }
    }

    /// Create a hit reaction started event.
    pub fn hit_reaction_started(tick: u32, fighter: FighterId, knockback_dir: f32) -> Self {
        Self {
            tick,
            data: GameEventData::HitReactionStarted {
                fighter,
                knockback_dir,
            },
        }
    }

    /// Create a fighter downed event.
    pub fn fighter_downed(tick: u32, fighter: FighterId, by: FighterId) -> Self {
        Self {
            tick,
            data: GameEventData::FighterDowned { fighter, by },
        }
    }

    /// Create a match ended event.
    pub fn match_ended(tick: u32, winner: Option<FighterId>) -> Self {
        Self {
            tick,
            data: GameEventData::MatchEnded {
                winner,
                duration_ticks: tick,
            },
        }
    }
}
