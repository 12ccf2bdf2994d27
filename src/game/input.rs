//! Frame Input
//!
//! One tick's sampled intent for a fighter, plus a delta-compressed recording
//! used for replays and determinism checks.

use serde::{Deserialize, Serialize};

use crate::core::vec2::Vec2;

/// Sampled intent for a single tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Movement stick state; only the X component moves the fighter
    pub movement: Vec2,
    /// Block button held this tick
    pub block_held: bool,
    /// Punch button pressed this tick (edge, not level)
    pub punch_pressed: bool,
}

impl FrameInput {
    /// Squared deadzone below which movement input is ignored.
    pub const DEADZONE_SQ: f32 = 0.01;

    /// Create a neutral input frame (no intent).
    pub const fn neutral() -> Self {
        Self {
            movement: Vec2::ZERO,
            block_held: false,
            punch_pressed: false,
        }
    }

    /// Create input with a movement vector.
    pub const fn with_movement(x: f32, y: f32) -> Self {
        Self {
            movement: Vec2::new(x, y),
            block_held: false,
            punch_pressed: false,
        }
    }

    /// Create input with the punch button pressed.
    pub const fn punch() -> Self {
        Self {
            movement: Vec2::ZERO,
            block_held: false,
            punch_pressed: true,
        }
    }

    /// Create input with the block button held.
    pub const fn block() -> Self {
        Self {
            movement: Vec2::ZERO,
            block_held: true,
            punch_pressed: false,
        }
    }

    /// Whether the movement input clears the deadzone.
    #[inline]
    pub fn has_movement(&self) -> bool {
        self.movement.length_squared() >= Self::DEADZONE_SQ
    }

    /// Whether this is a fully neutral frame.
    #[inline]
    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }
}

/// Input state change at a specific tick.
///
/// Only stored when input CHANGES (not every tick), which keeps full-match
/// recordings small.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct InputDelta {
    /// Tick when this input state began
    pub tick: u32,
    /// The new input state
    pub frame: FrameInput,
}

/// Delta-compressed input recording for one fighter in one match.
///
/// Used for replay playback and the determinism tests: feeding a recording
/// back through the tick loop with the same RNG seed must reproduce the
/// match exactly.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InputRecording {
    /// RNG seed the recorded match ran with
    pub rng_seed: u64,

    /// Last tick covered by the recording
    pub end_tick: u32,

    /// Delta-compressed input data
    deltas: Vec<InputDelta>,

    /// Last recorded input (for delta comparison)
    #[serde(skip)]
    last_frame: FrameInput,
}

impl InputRecording {
    /// Create a new recording.
    pub fn new(rng_seed: u64) -> Self {
        Self {
            rng_seed,
            end_tick: 0,
            deltas: Vec::new(),
            last_frame: FrameInput::neutral(),
        }
    }

    /// Record input for a tick.
    ///
    /// Only stores an entry if the input changed from the previous frame.
    pub fn record(&mut self, tick: u32, frame: FrameInput) {
        self.end_tick = tick;

        if frame != self.last_frame {
            self.deltas.push(InputDelta { tick, frame });
            self.last_frame = frame;
        }
    }

    /// Get the input in effect at a specific tick.
    ///
    /// Uses binary search over the deltas.
    pub fn input_at(&self, tick: u32) -> FrameInput {
        let idx = self.deltas.partition_point(|d| d.tick <= tick);
        if idx == 0 {
            // Before the first delta - neutral
            FrameInput::neutral()
        } else {
            self.deltas[idx - 1].frame
        }
    }

    /// Number of delta entries.
    pub fn delta_count(&self) -> usize {
        self.deltas.len()
    }

    /// All recorded deltas.
    pub fn deltas(&self) -> &[InputDelta] {
        &self.deltas
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadzone() {
        assert!(!FrameInput::with_movement(0.05, 0.05).has_movement());
        assert!(FrameInput::with_movement(0.5, 0.0).has_movement());
        // Exactly on the boundary counts as movement
        assert!(FrameInput::with_movement(0.1, 0.0).has_movement());
    }

    #[test]
    fn test_neutral_frame() {
        assert!(FrameInput::neutral().is_neutral());
        assert!(!FrameInput::punch().is_neutral());
        assert!(!FrameInput::block().is_neutral());
    }

    #[test]
    fn test_recording_delta_compression() {
        let mut recording = InputRecording::new(12345);

        // Record same input multiple times
        let frame = FrameInput::with_movement(1.0, 0.0);
        for tick in 0..4 {
            recording.record(tick, frame);
        }

        // Should only have 1 delta (input didn't change)
        assert_eq!(recording.delta_count(), 1);

        // Change input
        recording.record(4, FrameInput::block());
        assert_eq!(recording.delta_count(), 2);
    }

    #[test]
    fn test_recording_input_at() {
        let mut recording = InputRecording::new(0);

        let frame1 = FrameInput::with_movement(0.5, 0.0);
        let frame2 = FrameInput::punch();

        recording.record(10, frame1);
        recording.record(20, frame2);

        // Before first delta
        assert!(recording.input_at(5).is_neutral());

        // At and between deltas
        assert_eq!(recording.input_at(10), frame1);
        assert_eq!(recording.input_at(15), frame1);

        // At and after last delta
        assert_eq!(recording.input_at(20), frame2);
        assert_eq!(recording.input_at(100), frame2);
    }
}
