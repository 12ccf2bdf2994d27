//! Game Logic Module
//!
//! All combat simulation code. Deterministic for a given seed and input
//! sequence.
//!
//! ## Module Structure
//!
//! - `input`: frame inputs and delta-compressed recordings
//! - `state`: fighter and match state
//! - `actions`: per-tick action resolution and attack adjudication
//! - `range`: punch-range predicate
//! - `reaction`: the timed knockback/shake/flash hit reaction
//! - `tick`: the per-tick simulation loop and replay
//! - `events`: event stream for passive observers

pub mod actions;
pub mod events;
pub mod input;
pub mod range;
pub mod reaction;
pub mod state;
pub mod tick;

// Re-export key types
pub use events::{GameEvent, GameEventData, PunchOutcome};
pub use input::{FrameInput, InputRecording};
pub use reaction::HitReaction;
pub use state::{Fighter, FighterId, FighterState, MatchPhase, MatchState};
pub use tick::TickResult;
