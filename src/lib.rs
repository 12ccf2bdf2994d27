//! # Pixel Brawl
//!
//! Deterministic per-tick combat and presentation core for a two-fighter
//! local brawler.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       PIXEL BRAWL                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                 │
//! │  ├── vec2.rs     - 2D vector math                           │
//! │  └── rng.rs      - Deterministic Xorshift128+ PRNG          │
//! │                                                             │
//! │  game/           - Combat simulation (deterministic)        │
//! │  ├── input.rs    - Frame inputs and replay recordings       │
//! │  ├── state.rs    - Fighter and match state                  │
//! │  ├── actions.rs  - Movement, guard, attack adjudication     │
//! │  ├── range.rs    - Punch-range predicate                    │
//! │  ├── reaction.rs - Timed knockback/shake/flash effect       │
//! │  ├── tick.rs     - Per-tick simulation loop                 │
//! │  └── events.rs   - Event stream for passive observers       │
//! │                                                             │
//! │  render/         - Presentation (reads, never writes, sim)  │
//! │  ├── color.rs    - Palettes and tint overlays               │
//! │  ├── pose.rs     - Authored pose layout tables              │
//! │  ├── sprite.rs   - Procedural 32x32 sprite compositing      │
//! │  └── animator.rs - Pose animation, scale smoothing, mirror  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! The simulation is deterministic for a given RNG seed and input sequence:
//! fighters are processed in identity order, all randomness (the hit-shake
//! jitter) comes from the seeded [`core::rng::DeterministicRng`], and replays
//! recorded with [`game::input::InputRecording`] reproduce a match exactly.
//!
//! Sprite generation is a pure function of (identity, pose layout): each
//! fighter's sprite set is composited once at animator construction and read
//! immutably from then on.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod game;
pub mod render;

// Re-export commonly used types
pub use config::{ConfigError, MatchConfig, ReactionConfig};
pub use core::rng::DeterministicRng;
pub use core::vec2::Vec2;
pub use game::input::{FrameInput, InputRecording};
pub use game::state::{Fighter, FighterId, FighterState, MatchPhase, MatchState};
pub use game::tick::{replay_match, tick, TickResult};
pub use render::animator::{MatchVisuals, PoseAnimator, VisualFrame};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulation tick rate (Hz)
pub const TICK_RATE: u32 = 60;

/// Fixed timestep per tick in seconds
pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;
