//! Hit Reaction Effect
//!
//! The one multi-tick effect in the simulation: a knockback followed by a
//! decaying positional shake and a visibility flash, running for a fixed
//! duration. The effect is explicit suspended state advanced by the tick
//! loop; there is no queue and no stacking - retriggering while active
//! cancels the current run and starts over.

use serde::{Deserialize, Serialize};

use crate::config::ReactionConfig;
use crate::core::rng::DeterministicRng;
use crate::core::vec2::Vec2;

/// Knockback direction for a reacting fighter.
///
/// Points away from the attacker; an exact tie breaks to +1 so the
/// displacement is never zero.
#[inline]
pub fn knockback_direction(actor_x: f32, attacker_x: f32) -> f32 {
    if actor_x - attacker_x >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Timed hit-reaction state for one fighter.
///
/// State machine: Idle -> Active -> Idle. While active it owns the fighter's
/// shake offset and visibility; on completion (or preemption) both are reset
/// so a fighter is never left invisible or displaced.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HitReaction {
    active: bool,
    elapsed: f32,
    duration: f32,
    flash_count: u32,
    shake_intensity: f32,
    flash_step: u32,

    /// Current shake offset, resampled every tick while active
    pub shake_offset: Vec2,
    /// Current visibility; toggled by the flash, forced true when idle
    pub visible: bool,
}

impl HitReaction {
    /// Create an idle reaction.
    pub fn idle() -> Self {
        Self {
            active: false,
            elapsed: 0.0,
            duration: 0.0,
            flash_count: 0,
            shake_intensity: 0.0,
            flash_step: 0,
            shake_offset: Vec2::ZERO,
            visible: true,
        }
    }

    /// Whether the effect is currently running.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds elapsed in the current run.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Start (or restart) the effect.
    ///
    /// If a run is active it is cancelled first: shake zeroed and visibility
    /// forced true, atomically within this call, so no state from the stale
    /// run leaks into the new one.
    pub fn trigger(&mut self, config: &ReactionConfig) {
        if self.active {
            self.reset_visuals();
        }

        self.active = true;
        self.elapsed = 0.0;
        self.flash_step = 0;
        self.duration = config.duration;
        self.flash_count = config.flash_count;
        self.shake_intensity = config.shake_intensity;
    }

    /// Advance the effect by one tick. Returns whether it is still active.
    ///
    /// Per tick while active: the shake offset is resampled from `rng` with a
    /// linearly decaying magnitude, and visibility toggles on flash-step
    /// parity (even steps visible). The flash interval divides the duration
    /// into `2 * flash_count` steps.
    pub fn advance(&mut self, dt: f32, rng: &mut DeterministicRng) -> bool {
        if !self.active {
            return false;
        }

        let decay = (1.0 - self.elapsed / self.duration).clamp(0.0, 1.0);
        self.shake_offset = Vec2::new(
            rng.symmetric_f32(self.shake_intensity) * decay,
            rng.symmetric_f32(self.shake_intensity) * decay,
        );

        self.elapsed += dt;

        let total_steps = self.flash_count * 2;
        let interval = self.duration / total_steps as f32;
        let step = (self.elapsed / interval).floor() as u32;
        if step != self.flash_step && step < total_steps {
            self.flash_step = step;
            self.visible = step % 2 == 0;
        }

        if self.elapsed >= self.duration {
            self.active = false;
            self.reset_visuals();
            return false;
        }

        true
    }

    fn reset_visuals(&mut self) {
        self.shake_offset = Vec2::ZERO;
        self.visible = true;
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn config() -> ReactionConfig {
        ReactionConfig::default()
    }

    fn run_to_completion(reaction: &mut HitReaction, rng: &mut DeterministicRng) -> u32 {
        let mut ticks = 0;
        while reaction.advance(DT, rng) {
            ticks += 1;
            assert!(ticks < 10_000, "reaction never completed");
        }
        ticks
    }

    #[test]
    fn test_knockback_direction_never_zero() {
        assert_eq!(knockback_direction(2.0, 0.0), 1.0);
        assert_eq!(knockback_direction(0.0, 2.0), -1.0);
        // Zero distance breaks toward +1, never 0
        assert_eq!(knockback_direction(1.0, 1.0), 1.0);
    }

    #[test]
    fn test_completes_clean() {
        let mut rng = DeterministicRng::new(7);
        let mut reaction = HitReaction::idle();
        reaction.trigger(&config());

        run_to_completion(&mut reaction, &mut rng);

        assert!(!reaction.is_active());
        assert_eq!(reaction.shake_offset, Vec2::ZERO);
        assert!(reaction.visible);
    }

    #[test]
    fn test_flash_toggle_count() {
        let cfg = config();
        let mut rng = DeterministicRng::new(11);
        let mut reaction = HitReaction::idle();
        reaction.trigger(&cfg);

        let mut toggles = 0;
        let mut last_visible = reaction.visible;
        loop {
            let still_active = reaction.advance(DT, &mut rng);
            if reaction.visible != last_visible {
                toggles += 1;
                last_visible = reaction.visible;
            }
            if !still_active {
                break;
            }
        }

        // Duration D with flash count F yields exactly 2F visibility
        // toggles, ending visible.
        assert_eq!(toggles, cfg.flash_count * 2);
        assert!(reaction.visible);
    }

    #[test]
    fn test_shake_bounded_by_decaying_intensity() {
        let cfg = config();
        let mut rng = DeterministicRng::new(23);
        let mut reaction = HitReaction::idle();
        reaction.trigger(&cfg);

        loop {
            let elapsed_before = reaction.elapsed();
            let decay = (1.0 - elapsed_before / cfg.duration).clamp(0.0, 1.0);
            let still_active = reaction.advance(DT, &mut rng);
            let bound = cfg.shake_intensity * decay + f32::EPSILON;
            assert!(reaction.shake_offset.x.abs() <= bound);
            assert!(reaction.shake_offset.y.abs() <= bound);
            if !still_active {
                break;
            }
        }

        // Decay has reached zero: offset is exactly zero after completion
        assert_eq!(reaction.shake_offset, Vec2::ZERO);
    }

    #[test]
    fn test_retrigger_resets_before_restart() {
        let cfg = config();
        let mut rng = DeterministicRng::new(31);
        let mut reaction = HitReaction::idle();
        reaction.trigger(&cfg);

        // Run partway: some shake accumulated, maybe invisible
        for _ in 0..8 {
            reaction.advance(DT, &mut rng);
        }

        reaction.trigger(&cfg);
        assert!(reaction.is_active());
        assert_eq!(reaction.elapsed(), 0.0);
        assert_eq!(reaction.shake_offset, Vec2::ZERO);
        assert!(reaction.visible);
    }

    #[test]
    fn test_advance_is_noop_when_idle() {
        let mut rng = DeterministicRng::new(1);
        let mut reaction = HitReaction::idle();

        assert!(!reaction.advance(DT, &mut rng));
        assert_eq!(reaction.shake_offset, Vec2::ZERO);
        assert!(reaction.visible);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_shake_always_within_intensity(seed in any::<u64>(), dt in 0.001f32..0.05) {
                let cfg = config();
                let mut rng = DeterministicRng::new(seed);
                let mut reaction = HitReaction::idle();
                reaction.trigger(&cfg);

                let mut guard = 0;
                while reaction.advance(dt, &mut rng) {
                    prop_assert!(reaction.shake_offset.x.abs() <= cfg.shake_intensity);
                    prop_assert!(reaction.shake_offset.y.abs() <= cfg.shake_intensity);
                    guard += 1;
                    prop_assert!(guard < 100_000);
                }

                // Always ends clean regardless of timestep
                prop_assert!(reaction.visible);
                prop_assert_eq!(reaction.shake_offset, Vec2::ZERO);
            }
        }
    }

    #[test]
    fn test_deterministic_shake_sequence() {
        let cfg = config();
        let mut rng1 = DeterministicRng::new(99);
        let mut rng2 = DeterministicRng::new(99);
        let mut r1 = HitReaction::idle();
        let mut r2 = HitReaction::idle();
        r1.trigger(&cfg);
        r2.trigger(&cfg);

        loop {
            let a1 = r1.advance(DT, &mut rng1);
            let a2 = r2.advance(DT, &mut rng2);
            assert_eq!(r1.shake_offset, r2.shake_offset);
            assert_eq!(r1.visible, r2.visible);
            assert_eq!(a1, a2);
            if !a1 {
                break;
            }
        }
    }
}
