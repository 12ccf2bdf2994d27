//! Pose Layouts
//!
//! A pose layout is eight named rectangles on the fixed 32x32 sprite canvas.
//! Each pose category carries exactly two layouts (two animation frames);
//! the tables below are the authored frame data for both fighters, with the
//! palette supplying the per-identity colors.

use serde::{Deserialize, Serialize};

/// Animation frames per pose category.
pub const FRAMES_PER_POSE: usize = 2;

/// Axis-aligned body-part rectangle in sprite pixel coordinates.
///
/// Coordinates may land partially or fully outside the canvas; compositing
/// clips them silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartRect {
    /// Left edge
    pub x: i32,
    /// Bottom edge
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl PartRect {
    /// Create a rectangle.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// One pose frame: the eight body-part rectangles composited into a sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoseLayout {
    /// Head block
    pub head: PartRect,
    /// Torso block
    pub torso: PartRect,
    /// Leading arm (the punching side)
    pub lead_arm: PartRect,
    /// Rear arm
    pub rear_arm: PartRect,
    /// Left leg
    pub left_leg: PartRect,
    /// Right leg
    pub right_leg: PartRect,
    /// Left eye
    pub left_eye: PartRect,
    /// Right eye
    pub right_eye: PartRect,
}

/// Pose category: the stance a sprite frame belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoseCategory {
    /// Relaxed stance
    Idle,
    /// Guard up
    Block,
    /// Right-lead punch
    PunchRight,
    /// Left-lead punch (crossing over)
    PunchLeft,
    /// Hit-stunned wobble
    Dazed,
}

impl PoseCategory {
    /// All categories, in sprite-cache order.
    pub const ALL: [PoseCategory; 5] = [
        PoseCategory::Idle,
        PoseCategory::Block,
        PoseCategory::PunchRight,
        PoseCategory::PunchLeft,
        PoseCategory::Dazed,
    ];

    /// Cache index for this category.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The two authored animation frames for this category.
    pub const fn frames(self) -> &'static [PoseLayout; FRAMES_PER_POSE] {
        match self {
            PoseCategory::Idle => &IDLE_FRAMES,
            PoseCategory::Block => &BLOCK_FRAMES,
            PoseCategory::PunchRight => &PUNCH_RIGHT_FRAMES,
            PoseCategory::PunchLeft => &PUNCH_LEFT_FRAMES,
            PoseCategory::Dazed => &DAZED_FRAMES,
        }
    }
}

const IDLE_FRAMES: [PoseLayout; FRAMES_PER_POSE] = [
    PoseLayout {
        head: PartRect::new(10, 21, 12, 8),
        torso: PartRect::new(9, 9, 14, 12),
        lead_arm: PartRect::new(23, 10, 3, 8),
        rear_arm: PartRect::new(6, 10, 3, 8),
        left_leg: PartRect::new(10, 2, 5, 7),
        right_leg: PartRect::new(17, 2, 5, 7),
        left_eye: PartRect::new(13, 23, 2, 2),
        right_eye: PartRect::new(17, 23, 2, 2),
    },
    // Frame 2: the whole figure bobs up one pixel
    PoseLayout {
        head: PartRect::new(10, 22, 12, 8),
        torso: PartRect::new(9, 10, 14, 12),
        lead_arm: PartRect::new(23, 11, 3, 8),
        rear_arm: PartRect::new(6, 11, 3, 8),
        left_leg: PartRect::new(10, 3, 5, 7),
        right_leg: PartRect::new(17, 3, 5, 7),
        left_eye: PartRect::new(13, 24, 2, 2),
        right_eye: PartRect::new(17, 24, 2, 2),
    },
];

const BLOCK_FRAMES: [PoseLayout; FRAMES_PER_POSE] = [
    // Both arms raised in front of the face
    PoseLayout {
        head: PartRect::new(10, 20, 12, 8),
        torso: PartRect::new(9, 8, 14, 12),
        lead_arm: PartRect::new(22, 15, 4, 7),
        rear_arm: PartRect::new(21, 9, 4, 7),
        left_leg: PartRect::new(10, 1, 5, 7),
        right_leg: PartRect::new(17, 1, 5, 7),
        left_eye: PartRect::new(13, 22, 2, 2),
        right_eye: PartRect::new(17, 22, 2, 2),
    },
    PoseLayout {
        head: PartRect::new(10, 20, 12, 8),
        torso: PartRect::new(9, 8, 14, 12),
        lead_arm: PartRect::new(22, 14, 4, 7),
        rear_arm: PartRect::new(21, 10, 4, 7),
        left_leg: PartRect::new(10, 1, 5, 7),
        right_leg: PartRect::new(17, 1, 5, 7),
        left_eye: PartRect::new(13, 22, 2, 2),
        right_eye: PartRect::new(17, 22, 2, 2),
    },
];

const PUNCH_RIGHT_FRAMES: [PoseLayout; FRAMES_PER_POSE] = [
    // Lead arm extended; wide arm rectangles trigger the fist overlay
    PoseLayout {
        head: PartRect::new(9, 21, 12, 8),
        torso: PartRect::new(8, 9, 14, 12),
        lead_arm: PartRect::new(22, 13, 9, 4),
        rear_arm: PartRect::new(5, 8, 3, 6),
        left_leg: PartRect::new(9, 2, 5, 7),
        right_leg: PartRect::new(16, 2, 5, 7),
        left_eye: PartRect::new(12, 23, 2, 2),
        right_eye: PartRect::new(16, 23, 2, 2),
    },
    // Frame 2: full extension, body leans in
    PoseLayout {
        head: PartRect::new(8, 21, 12, 8),
        torso: PartRect::new(7, 9, 14, 12),
        lead_arm: PartRect::new(21, 14, 10, 4),
        rear_arm: PartRect::new(4, 7, 3, 6),
        left_leg: PartRect::new(8, 2, 5, 7),
        right_leg: PartRect::new(15, 2, 5, 7),
        left_eye: PartRect::new(11, 23, 2, 2),
        right_eye: PartRect::new(15, 23, 2, 2),
    },
];

const PUNCH_LEFT_FRAMES: [PoseLayout; FRAMES_PER_POSE] = [
    // Narrower torso: the fighter turns sideways for the cross
    PoseLayout {
        head: PartRect::new(11, 21, 12, 8),
        torso: PartRect::new(10, 9, 11, 12),
        lead_arm: PartRect::new(21, 15, 9, 4),
        rear_arm: PartRect::new(21, 8, 3, 6),
        left_leg: PartRect::new(11, 2, 5, 7),
        right_leg: PartRect::new(16, 2, 5, 7),
        left_eye: PartRect::new(14, 23, 2, 2),
        right_eye: PartRect::new(18, 23, 2, 2),
    },
    PoseLayout {
        head: PartRect::new(12, 21, 12, 8),
        torso: PartRect::new(11, 9, 11, 12),
        lead_arm: PartRect::new(22, 16, 9, 4),
        rear_arm: PartRect::new(22, 7, 3, 6),
        left_leg: PartRect::new(12, 2, 5, 7),
        right_leg: PartRect::new(17, 2, 5, 7),
        left_eye: PartRect::new(15, 23, 2, 2),
        right_eye: PartRect::new(19, 23, 2, 2),
    },
];

const DAZED_FRAMES: [PoseLayout; FRAMES_PER_POSE] = [
    // Slumped: everything sits lower, eyes narrow to slits
    PoseLayout {
        head: PartRect::new(10, 19, 12, 8),
        torso: PartRect::new(9, 7, 14, 12),
        lead_arm: PartRect::new(23, 6, 3, 7),
        rear_arm: PartRect::new(6, 7, 3, 7),
        left_leg: PartRect::new(10, 1, 5, 6),
        right_leg: PartRect::new(17, 1, 5, 6),
        left_eye: PartRect::new(13, 21, 2, 1),
        right_eye: PartRect::new(17, 21, 2, 1),
    },
    PoseLayout {
        head: PartRect::new(11, 19, 12, 8),
        torso: PartRect::new(10, 7, 14, 12),
        lead_arm: PartRect::new(24, 5, 3, 7),
        rear_arm: PartRect::new(7, 6, 3, 7),
        left_leg: PartRect::new(11, 1, 5, 6),
        right_leg: PartRect::new(18, 1, 5, 6),
        left_eye: PartRect::new(14, 21, 2, 1),
        right_eye: PartRect::new(18, 21, 2, 1),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_two_frames() {
        for category in PoseCategory::ALL {
            assert_eq!(category.frames().len(), FRAMES_PER_POSE);
        }
    }

    #[test]
    fn test_category_indices_are_dense() {
        for (expected, category) in PoseCategory::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), expected);
        }
    }

    #[test]
    fn test_punch_frames_have_extended_lead_arm() {
        // The fist overlay keys off a lead arm wider than 5 pixels; both
        // punch sets rely on that, and no other category does.
        for category in PoseCategory::ALL {
            let extended = matches!(category, PoseCategory::PunchRight | PoseCategory::PunchLeft);
            for layout in category.frames() {
                assert_eq!(layout.lead_arm.w > 5, extended, "category {category:?}");
            }
        }
    }
}
