//! Core deterministic primitives.
//!
//! Simulation-grade building blocks: vector math and seeded randomness.
//! Everything the tick loop computes from these is replayable.

pub mod rng;
pub mod vec2;

// Re-export core types
pub use rng::DeterministicRng;
pub use vec2::Vec2;
