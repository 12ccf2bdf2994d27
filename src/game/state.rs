//! Match State Definitions
//!
//! Fighter and match state for the two-fighter simulation. Fighters are
//! stored in a fixed-size array indexed by identity, so iteration order is
//! always identity order and the simulation stays deterministic.

use serde::{Deserialize, Serialize};

use crate::config::{MatchConfig, ReactionConfig};
use crate::core::rng::DeterministicRng;
use crate::core::vec2::Vec2;
use crate::game::events::GameEvent;
use crate::game::reaction::{knockback_direction, HitReaction};

/// Horizontal distance from the arena center to each spawn point.
pub const SPAWN_OFFSET_X: f32 = 1.5;

// =============================================================================
// FIGHTER ID
// =============================================================================

/// Fighter identity index (0 or 1).
///
/// Doubles as the palette key for sprite generation.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct FighterId(u8);

impl FighterId {
    /// The left-side fighter (identity 0).
    pub const P1: FighterId = FighterId(0);

    /// The right-side fighter (identity 1).
    pub const P2: FighterId = FighterId(1);

    /// Both identities in processing order.
    pub const BOTH: [FighterId; 2] = [Self::P1, Self::P2];

    /// Array index for this identity.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other fighter's identity.
    #[inline]
    pub const fn opponent(self) -> FighterId {
        FighterId(1 - self.0)
    }
}

// =============================================================================
// FIGHTER STATE
// =============================================================================

/// High-level fighter state driving both combat gating and pose selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FighterState {
    /// Standing, no intent
    #[default]
    Idle,
    /// Horizontal movement applied this tick
    Moving,
    /// Guard up (engaged only in punch range)
    Blocking,
    /// Punch pose window after an attack attempt
    Punching,
    /// Hit-stun window after taking a punch
    Dazed,
    /// Downed; the match is over for this fighter
    Dead,
}

/// State of a single fighter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Fighter {
    /// Identity index (0 or 1)
    pub id: FighterId,

    /// Current position
    pub position: Vec2,

    /// Unscaled render scale recorded at spawn
    pub base_scale: Vec2,

    /// Facing direction, always exactly -1 or +1
    pub facing: f32,

    /// Current high-level state
    pub state: FighterState,

    /// Guard engaged this tick
    pub blocking: bool,

    /// Accumulated cost of wasted and guarded attacks.
    /// Consumed by an external stamina system.
    pub exhaustion: f32,

    /// Punches taken this match
    pub hits_taken: u32,

    /// Seconds remaining in the punch pose window
    pub punch_timer: f32,

    /// Seconds remaining in the post-hit daze window
    pub daze_timer: f32,

    /// Tick on which the most recent punch attempt started
    pub punch_started_tick: Option<u32>,

    /// This fighter's hit-reaction effect
    pub reaction: HitReaction,
}

impl Fighter {
    /// Create a fighter at a spawn position, facing the arena center.
    pub fn new(id: FighterId, position: Vec2, facing: f32) -> Self {
        Self {
            id,
            position,
            base_scale: Vec2::ONE,
            facing,
            state: FighterState::Idle,
            blocking: false,
            exhaustion: 0.0,
            hits_taken: 0,
            punch_timer: 0.0,
            daze_timer: 0.0,
            punch_started_tick: None,
            reaction: HitReaction::idle(),
        }
    }

    /// Queryable guard state.
    #[inline]
    pub fn is_blocking(&self) -> bool {
        self.blocking
    }

    /// Whether this fighter has been downed.
    #[inline]
    pub fn is_down(&self) -> bool {
        self.state == FighterState::Dead
    }

    /// Charge the cost of a wasted or guarded attack.
    pub fn add_exhaustion(&mut self, amount: f32) {
        self.exhaustion += amount;
    }

    /// Register a clean punch landing on this fighter.
    ///
    /// Bumps the hit count and opens the daze window. Downing (when the hit
    /// count reaches the configured maximum) is adjudicated by the tick loop.
    pub fn register_hit_taken(&mut self, config: &MatchConfig) {
        self.hits_taken += 1;
        self.daze_timer = config.daze_duration;
    }

    /// Start this fighter's hit reaction, knocking it away from the attacker.
    ///
    /// Returns the knockback direction. Restartable: an active reaction is
    /// cancelled and replaced, and the knockback of the cancelled run is not
    /// applied again - only the new run's displacement happens here.
    pub fn play_hit_reaction(&mut self, attacker_x: Option<f32>, config: &ReactionConfig) -> f32 {
        let direction = match attacker_x {
            Some(x) => {
                let dir = knockback_direction(self.position.x, x);
                self.position.x += dir * config.knockback_distance;
                dir
            }
            None => 0.0,
        };
        self.reaction.trigger(config);
        direction
    }

    /// Recompute the high-level state from this tick's resolved facts.
    ///
    /// Priority: downed beats dazed beats punching beats blocking beats
    /// movement.
    pub fn refresh_state(&mut self, moved: bool, config: &MatchConfig) {
        self.state = if self.hits_taken >= config.max_hits_to_down {
            FighterState::Dead
        } else if self.daze_timer > 0.0 {
            FighterState::Dazed
        } else if self.punch_timer > 0.0 {
            FighterState::Punching
        } else if self.blocking {
            FighterState::Blocking
        } else if moved {
            FighterState::Moving
        } else {
            FighterState::Idle
        };
    }
}

// =============================================================================
// MATCH PHASE
// =============================================================================

/// Current phase of the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Countdown before the fight goes live
    Countdown {
        /// Ticks left before Playing
        ticks_remaining: u32,
    },
    /// Active gameplay
    Playing,
    /// Match over
    Ended,
}

// =============================================================================
// MATCH STATE
// =============================================================================

/// Complete state of a match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    /// Current tick
    pub tick: u32,

    /// Accumulated simulation clock in seconds.
    /// Drives shared-wall-clock animation frame selection.
    pub clock: f32,

    /// Current match phase
    pub phase: MatchPhase,

    /// RNG seed (for replay)
    pub rng_seed: u64,

    /// Deterministic RNG state
    #[serde(skip)]
    pub rng: DeterministicRng,

    /// Both fighters, indexed by identity
    pub fighters: [Fighter; 2],

    /// Events generated this tick (drained each tick)
    #[serde(skip)]
    pending_events: Vec<GameEvent>,
}

impl MatchState {
    /// Create a new match in its countdown phase.
    ///
    /// Fighter 0 spawns on the left facing right, fighter 1 mirrored.
    pub fn new(rng_seed: u64, config: &MatchConfig) -> Self {
        Self {
            tick: 0,
            clock: 0.0,
            phase: MatchPhase::Countdown {
                ticks_remaining: config.countdown_ticks,
            },
            rng_seed,
            rng: DeterministicRng::new(rng_seed),
            fighters: [
                Fighter::new(FighterId::P1, Vec2::new(-SPAWN_OFFSET_X, 0.0), 1.0),
                Fighter::new(FighterId::P2, Vec2::new(SPAWN_OFFSET_X, 0.0), -1.0),
            ],
            pending_events: Vec::new(),
        }
    }

    /// Skip the countdown and go straight to Playing. Test and demo helper.
    pub fn start(&mut self) {
        self.phase = MatchPhase::Playing;
    }

    /// Get a fighter by identity.
    #[inline]
    pub fn fighter(&self, id: FighterId) -> &Fighter {
        &self.fighters[id.index()]
    }

    /// Get a fighter mutably by identity.
    #[inline]
    pub fn fighter_mut(&mut self, id: FighterId) -> &mut Fighter {
        &mut self.fighters[id.index()]
    }

    /// Get a fighter's opponent.
    #[inline]
    pub fn opponent_of(&self, id: FighterId) -> &Fighter {
        &self.fighters[id.opponent().index()]
    }

    /// Split-borrow a fighter and its opponent, in that order.
    pub fn pair_mut(&mut self, id: FighterId) -> (&mut Fighter, &mut Fighter) {
        let [first, second] = &mut self.fighters;
        match id.index() {
            0 => (first, second),
            _ => (second, first),
        }
    }

    /// Owner gate: whether a fighter may act this tick.
    ///
    /// Requires a live match and a fighter that is neither dazed nor downed.
    pub fn can_act(&self, id: FighterId) -> bool {
        self.phase == MatchPhase::Playing
            && !matches!(
                self.fighter(id).state,
                FighterState::Dazed | FighterState::Dead
            )
    }

    /// Check if the match has ended.
    pub fn is_ended(&self) -> bool {
        self.phase == MatchPhase::Ended
    }

    /// The fighter left standing, once the match has ended by a down.
    ///
    /// A simultaneous double-down has no winner.
    pub fn winner(&self) -> Option<FighterId> {
        if !self.is_ended() {
            return None;
        }
        let downed: Vec<FighterId> = self
            .fighters
            .iter()
            .filter(|f| f.is_down())
            .map(|f| f.id)
            .collect();
        match downed.as_slice() {
            [single] => Some(single.opponent()),
            _ => None,
        }
    }

    /// Push a game event.
    pub fn push_event(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }

    /// Take pending events (consumes them).
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_state() -> MatchState {
        let mut state = MatchState::new(1, &MatchConfig::default());
        state.start();
        state
    }

    #[test]
    fn test_identity_opponent() {
        assert_eq!(FighterId::P1.opponent(), FighterId::P2);
        assert_eq!(FighterId::P2.opponent(), FighterId::P1);
        assert_eq!(FighterId::P1.index(), 0);
        assert_eq!(FighterId::P2.index(), 1);
    }

    #[test]
    fn test_spawn_layout() {
        let state = playing_state();
        let p1 = state.fighter(FighterId::P1);
        let p2 = state.fighter(FighterId::P2);

        assert!(p1.position.x < p2.position.x);
        assert_eq!(p1.facing, 1.0);
        assert_eq!(p2.facing, -1.0);
    }

    #[test]
    fn test_pair_mut_split() {
        let mut state = playing_state();
        let (attacker, defender) = state.pair_mut(FighterId::P2);
        assert_eq!(attacker.id, FighterId::P2);
        assert_eq!(defender.id, FighterId::P1);
    }

    #[test]
    fn test_can_act_gates() {
        let config = MatchConfig::default();
        let mut state = MatchState::new(1, &config);

        // Countdown: nobody acts
        assert!(!state.can_act(FighterId::P1));

        state.start();
        assert!(state.can_act(FighterId::P1));

        // Dazed fighters cannot act
        state.fighter_mut(FighterId::P1).state = FighterState::Dazed;
        assert!(!state.can_act(FighterId::P1));
        assert!(state.can_act(FighterId::P2));

        // Nor can downed ones
        state.fighter_mut(FighterId::P1).state = FighterState::Dead;
        assert!(!state.can_act(FighterId::P1));
    }

    #[test]
    fn test_refresh_state_priority() {
        let config = MatchConfig::default();
        let mut fighter = Fighter::new(FighterId::P1, Vec2::ZERO, 1.0);

        fighter.refresh_state(false, &config);
        assert_eq!(fighter.state, FighterState::Idle);

        fighter.refresh_state(true, &config);
        assert_eq!(fighter.state, FighterState::Moving);

        fighter.blocking = true;
        fighter.refresh_state(true, &config);
        assert_eq!(fighter.state, FighterState::Blocking);

        fighter.punch_timer = 0.2;
        fighter.refresh_state(false, &config);
        assert_eq!(fighter.state, FighterState::Punching);

        fighter.daze_timer = 0.5;
        fighter.refresh_state(false, &config);
        assert_eq!(fighter.state, FighterState::Dazed);

        fighter.hits_taken = config.max_hits_to_down;
        fighter.refresh_state(false, &config);
        assert_eq!(fighter.state, FighterState::Dead);
    }

    #[test]
    fn test_hit_reaction_knockback_applied_once() {
        let reaction_config = ReactionConfig::default();
        let mut fighter = Fighter::new(FighterId::P2, Vec2::new(2.0, 0.0), -1.0);

        // Attacker to the left: knocked right
        let dir = fighter.play_hit_reaction(Some(0.0), &reaction_config);
        assert_eq!(dir, 1.0);
        let after_first = 2.0 + reaction_config.knockback_distance;
        assert_eq!(fighter.position.x, after_first);

        // Retrigger applies exactly one more knockback, not a double one
        let dir = fighter.play_hit_reaction(Some(0.0), &reaction_config);
        assert_eq!(dir, 1.0);
        assert_eq!(
            fighter.position.x,
            after_first + reaction_config.knockback_distance
        );
    }

    #[test]
    fn test_winner_is_standing_fighter() {
        let config = MatchConfig::default();
        let mut state = playing_state();

        assert_eq!(state.winner(), None);

        let p2 = state.fighter_mut(FighterId::P2);
        p2.hits_taken = config.max_hits_to_down;
        p2.refresh_state(false, &config);
        state.phase = MatchPhase::Ended;

        assert_eq!(state.winner(), Some(FighterId::P1));
    }
}
