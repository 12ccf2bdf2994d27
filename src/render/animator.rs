//! Pose Animator
//!
//! Per-tick visual state for a fighter: pose category and animation frame,
//! smoothed anisotropic scale with facing mirror, tint, and shake offset.
//! Runs every tick for every fighter, independent of input.
//!
//! Frame selection deliberately uses the shared match clock rather than
//! per-fighter elapsed pose time: two fighters entering the same pose at
//! different moments can show different frames simultaneously. Observed
//! behavior, kept as-is.

use crate::config::MatchConfig;
use crate::core::vec2::Vec2;
use crate::game::state::{Fighter, FighterId, FighterState, MatchState};
use crate::render::color::{Rgba, DAZED_TINT, HIT_REACTION_TINT};
use crate::render::pose::{PoseCategory, FRAMES_PER_POSE};
use crate::render::sprite::{PixelBuffer, SpriteSet};

/// One tick's render output for a fighter.
///
/// The embedding renderer draws `sprites.frame(category, frame)` at the
/// fighter's position plus `offset`, scaled by `scale`, modulated by `tint`,
/// skipping the draw entirely when `visible` is false.
#[derive(Clone, Copy, Debug)]
pub struct VisualFrame {
    /// Pose category to draw
    pub category: PoseCategory,
    /// Animation frame within the category (0 or 1)
    pub frame: usize,
    /// Render scale; the X sign carries the facing mirror
    pub scale: Vec2,
    /// Tint: reaction color, dazed tint, or neutral white
    pub tint: Rgba,
    /// Positional shake offset (zero unless hit-reacting)
    pub offset: Vec2,
    /// Whether the fighter is drawn at all this tick
    pub visible: bool,
}

/// Pose animator for one fighter.
///
/// Owns the fighter's immutable sprite cache, built at construction - sprite
/// construction always precedes first render.
pub struct PoseAnimator {
    base_scale: Vec2,
    scale: Vec2,
    facing: f32,
    lead_right: bool,
    active_punch: PoseCategory,
    sprites: SpriteSet,
}

impl PoseAnimator {
    /// Create an animator, building the sprite cache for `identity`.
    pub fn new(identity: FighterId, base_scale: Vec2, facing: f32) -> Self {
        Self {
            base_scale,
            scale: Vec2::new(base_scale.x.abs() * facing, base_scale.y),
            facing,
            lead_right: false,
            active_punch: PoseCategory::PunchRight,
            sprites: SpriteSet::build(identity),
        }
    }

    /// This fighter's cached sprites.
    pub fn sprites(&self) -> &SpriteSet {
        &self.sprites
    }

    /// Resolve a visual frame to its cached sprite.
    #[inline]
    pub fn sprite(&self, frame: &VisualFrame) -> &PixelBuffer {
        self.sprites.frame(frame.category, frame.frame)
    }

    /// Current facing mirror (+1 or -1).
    pub fn facing(&self) -> f32 {
        self.facing
    }

    /// Begin a fresh punch sequence, leading with the right arm.
    pub fn start_new_punch(&mut self) {
        self.lead_right = true;
        self.active_punch = PoseCategory::PunchRight;
    }

    /// Interrupt the punch pose: flip the lead arm for the next punch and
    /// snap the scale mirror back to the base pose.
    pub fn reset_punch_pose(&mut self) {
        self.lead_right = !self.lead_right;
        self.active_punch = if self.lead_right {
            PoseCategory::PunchRight
        } else {
            PoseCategory::PunchLeft
        };
        self.scale = Vec2::new(self.base_scale.x.abs() * self.facing, self.base_scale.y);
    }

    /// Advance the visual state one tick and produce the frame to render.
    pub fn update(
        &mut self,
        fighter: &Fighter,
        clock: f32,
        dt: f32,
        config: &MatchConfig,
    ) -> VisualFrame {
        // Facing is recomputed by the simulation every tick; mirror follows it
        self.facing = fighter.facing;

        let base = self.base_scale;
        let (category, target) = match fighter.state {
            FighterState::Moving => (
                PoseCategory::Idle,
                Vec2::new(base.x * 1.05, base.y * 0.95),
            ),
            FighterState::Blocking => (
                PoseCategory::Block,
                Vec2::new(base.x * 0.85, base.y * 1.08),
            ),
            FighterState::Punching => (
                self.active_punch,
                Vec2::new(base.x * 1.2, base.y * 0.92),
            ),
            FighterState::Dazed => (PoseCategory::Dazed, Vec2::new(base.x, base.y * 0.8)),
            FighterState::Idle | FighterState::Dead => (PoseCategory::Idle, base),
        };

        // Mirror is folded into the target before smoothing, so flipping and
        // interpolation never fight each other
        let target = Vec2::new(target.x.abs() * self.facing, target.y);
        self.scale = self.scale.lerp(target, config.visual_smoothing * dt);

        // Shared wall-clock frame selection
        let frame = (clock * config.animation_fps).floor() as u64 % FRAMES_PER_POSE as u64;

        let reaction = &fighter.reaction;
        let tint = if reaction.is_active() {
            HIT_REACTION_TINT
        } else if category == PoseCategory::Dazed {
            DAZED_TINT
        } else {
            Rgba::WHITE
        };
        let offset = if reaction.is_active() {
            reaction.shake_offset
        } else {
            Vec2::ZERO
        };

        VisualFrame {
            category,
            frame: frame as usize,
            scale: self.scale,
            tint,
            offset,
            visible: reaction.visible,
        }
    }
}

/// Both fighters' animators, driven in lockstep with the simulation.
///
/// Acts as the punch-lifecycle driver: a punch attempt recorded by the
/// simulation interrupts that fighter's pose (flipping the lead arm) before
/// the tick's visual update.
pub struct MatchVisuals {
    animators: [PoseAnimator; 2],
    last_punch_seen: [Option<u32>; 2],
}

impl MatchVisuals {
    /// Build animators (and sprite caches) for both fighters.
    pub fn new(state: &MatchState) -> Self {
        let build = |id: FighterId| {
            let fighter = state.fighter(id);
            PoseAnimator::new(id, fighter.base_scale, fighter.facing)
        };
        Self {
            animators: [build(FighterId::P1), build(FighterId::P2)],
            last_punch_seen: [None, None],
        }
    }

    /// A fighter's animator.
    pub fn animator(&self, id: FighterId) -> &PoseAnimator {
        &self.animators[id.index()]
    }

    /// A fighter's animator, mutably (external punch-lifecycle drivers).
    pub fn animator_mut(&mut self, id: FighterId) -> &mut PoseAnimator {
        &mut self.animators[id.index()]
    }

    /// Produce both fighters' visual frames for the current tick.
    pub fn update(&mut self, state: &MatchState, config: &MatchConfig, dt: f32) -> [VisualFrame; 2] {
        FighterId::BOTH.map(|id| {
            let fighter = state.fighter(id);
            let slot = id.index();

            // Each newly started punch interrupts the pose exactly once
            if fighter.punch_started_tick.is_some()
                && fighter.punch_started_tick != self.last_punch_seen[slot]
            {
                self.last_punch_seen[slot] = fighter.punch_started_tick;
                self.animators[slot].reset_punch_pose();
            }

            self.animators[slot].update(fighter, state.clock, dt, config)
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
