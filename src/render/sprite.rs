//! Procedural Sprite Generation
//!
//! Composites a pose layout's body-part rectangles into a 32x32 pixel buffer
//! using the fighter's palette. Building is a pure function of (identity,
//! layout); each fighter's full sprite set is built once at animator
//! construction and never regenerated.

use std::fmt;

use crate::game::state::FighterId;
use crate::render::color::{Palette, Rgba};
use crate::render::pose::{PartRect, PoseCategory, PoseLayout, FRAMES_PER_POSE};

/// Sprite canvas width and height in pixels.
pub const CANVAS_SIZE: usize = 32;

/// A 32x32 RGBA pixel buffer.
///
/// Immutable once composited; renderers read it by reference.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: [Rgba; CANVAS_SIZE * CANVAS_SIZE],
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelBuffer {
    /// Create a fully transparent buffer.
    pub fn new() -> Self {
        Self {
            pixels: [Rgba::TRANSPARENT; CANVAS_SIZE * CANVAS_SIZE],
        }
    }

    /// Read one pixel. `x` and `y` must be within the canvas.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * CANVAS_SIZE + x]
    }

    /// Raw pixel data in row-major order.
    pub fn as_pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Fill a rectangle, overwriting whatever was painted before.
    ///
    /// The rectangle is clipped to the canvas; out-of-bounds geometry is
    /// silently dropped, never an error.
    pub fn fill_rect(&mut self, rect: PartRect, color: Rgba) {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = (rect.x + rect.w).min(CANVAS_SIZE as i32);
        let y1 = (rect.y + rect.h).min(CANVAS_SIZE as i32);

        for y in y0..y1 {
            for x in x0..x1 {
                self.pixels[y as usize * CANVAS_SIZE + x as usize] = color;
            }
        }
    }
}

// Debug shows occupancy, not a thousand pixel values
impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opaque = self.pixels.iter().filter(|p| p.a != 0).count();
        write!(
            f,
            "PixelBuffer({CANVAS_SIZE}x{CANVAS_SIZE}, {opaque} opaque px)"
        )
    }
}

/// Composite one pose layout into a sprite for the given identity.
///
/// Deterministic pure function: identical inputs always yield pixel-identical
/// buffers.
pub fn build(identity: FighterId, layout: &PoseLayout) -> PixelBuffer {
    let palette = Palette::for_identity(identity);
    let mut buffer = PixelBuffer::new();

    // Fixed paint order, back to front
    buffer.fill_rect(layout.left_leg, palette.accent);
    buffer.fill_rect(layout.right_leg, palette.accent);
    buffer.fill_rect(layout.rear_arm, palette.accent);
    buffer.fill_rect(layout.torso, palette.body);
    buffer.fill_rect(layout.head, palette.body);
    buffer.fill_rect(layout.lead_arm, palette.accent);
    buffer.fill_rect(layout.left_eye, palette.eye);
    buffer.fill_rect(layout.right_eye, palette.eye);

    // An extended lead arm (wider than 5 px) gets a fist at its far edge,
    // one pixel above the arm's top, capped at 6 px tall
    if layout.lead_arm.w > 5 {
        let fist = PartRect::new(
            layout.lead_arm.x + layout.lead_arm.w - 3,
            layout.lead_arm.y - 1,
            3,
            (layout.lead_arm.h + 2).min(6),
        );
        buffer.fill_rect(fist, palette.fist);
    }

    buffer
}

/// One fighter's complete sprite cache: every pose category's two frames.
#[derive(Clone, Debug)]
pub struct SpriteSet {
    identity: FighterId,
    frames: Vec<PixelBuffer>,
}

impl SpriteSet {
    /// Build the full cache for an identity.
    ///
    /// 5 categories x 2 frames = 10 composites; with two fighters that is 20
    /// builds per match, all up front.
    pub fn build(identity: FighterId) -> Self {
        let mut frames = Vec::with_capacity(PoseCategory::ALL.len() * FRAMES_PER_POSE);
        for category in PoseCategory::ALL {
            for layout in category.frames() {
                frames.push(build(identity, layout));
            }
        }
        Self { identity, frames }
    }

    /// The identity this cache was built for.
    pub fn identity(&self) -> FighterId {
        self.identity
    }

    /// Number of cached sprites.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the cache is empty (it never is after `build`).
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Look up a cached sprite.
    #[inline]
    pub fn frame(&self, category: PoseCategory, frame: usize) -> &PixelBuffer {
        debug_assert!(frame < FRAMES_PER_POSE);
        &self.frames[category.index() * FRAMES_PER_POSE + frame]
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_deterministic() {
        for identity in [FighterId::P1, FighterId::P2] {
            for category in PoseCategory::ALL {
                for layout in category.frames() {
                    let a = build(identity, layout);
                    let b = build(identity, layout);
                    assert!(a == b, "{identity:?} {category:?} not pixel-identical");
                }
            }
        }
    }

    #[test]
    fn test_canvas_starts_transparent() {
        let buffer = PixelBuffer::new();
        assert!(buffer
            .as_pixels()
            .iter()
            .all(|&p| p == Rgba::TRANSPARENT));
    }

    #[test]
    fn test_fill_rect_clips_silently() {
        let mut buffer = PixelBuffer::new();
        let red = Rgba::opaque(255, 0, 0);

        // Straddles the bottom-left corner: only the 5x5 inside survives
        buffer.fill_rect(PartRect::new(-5, -5, 10, 10), red);
        let painted = buffer.as_pixels().iter().filter(|&&p| p == red).count();
        assert_eq!(painted, 25);
        assert_eq!(buffer.pixel(0, 0), red);
        assert_eq!(buffer.pixel(5, 5), Rgba::TRANSPARENT);

        // Fully outside: nothing happens, no panic
        let mut buffer = PixelBuffer::new();
        buffer.fill_rect(PartRect::new(40, 40, 10, 10), red);
        buffer.fill_rect(PartRect::new(-20, 0, 10, 10), red);
        assert!(buffer.as_pixels().iter().all(|&p| p == Rgba::TRANSPARENT));
    }

    #[test]
    fn test_eyes_paint_over_head() {
        let layout = &PoseCategory::Idle.frames()[0];
        let buffer = build(FighterId::P1, layout);
        let palette = Palette::for_identity(FighterId::P1);

        // Eye rectangles sit inside the head; the later paint wins
        let eye = layout.left_eye;
        assert_eq!(
            buffer.pixel(eye.x as usize, eye.y as usize),
            palette.eye
        );
        // Head pixels outside the eyes keep the body tone
        assert_eq!(
            buffer.pixel(layout.head.x as usize, (layout.head.y + 1) as usize),
            palette.body
        );
    }

    #[test]
    fn test_fist_only_on_extended_arm() {
        let p1 = Palette::for_identity(FighterId::P1);

        // Punch frame: fist overlay at the arm's far edge
        let layout = &PoseCategory::PunchRight.frames()[0];
        let buffer = build(FighterId::P1, layout);
        let fist_x = (layout.lead_arm.x + layout.lead_arm.w - 3) as usize;
        let fist_y = (layout.lead_arm.y - 1) as usize;
        assert_eq!(buffer.pixel(fist_x, fist_y), p1.fist);

        // Idle frame: narrow arm, no fist tone anywhere
        let idle = build(FighterId::P1, &PoseCategory::Idle.frames()[0]);
        assert!(idle.as_pixels().iter().all(|&p| p != p1.fist));
    }

    #[test]
    fn test_identities_produce_distinct_sprites() {
        let layout = &PoseCategory::Idle.frames()[0];
        let p1 = build(FighterId::P1, layout);
        let p2 = build(FighterId::P2, layout);
        assert!(p1 != p2);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_fill_rect_never_paints_out_of_bounds(
                x in -64i32..64,
                y in -64i32..64,
                w in -8i32..64,
                h in -8i32..64,
            ) {
                let red = Rgba::opaque(255, 0, 0);
                let mut buffer = PixelBuffer::new();
                buffer.fill_rect(PartRect::new(x, y, w, h), red);

                let clipped_w =
                    (x + w).clamp(0, CANVAS_SIZE as i32) - x.clamp(0, CANVAS_SIZE as i32);
                let clipped_h =
                    (y + h).clamp(0, CANVAS_SIZE as i32) - y.clamp(0, CANVAS_SIZE as i32);
                let expected = (clipped_w.max(0) * clipped_h.max(0)) as usize;

                let painted = buffer.as_pixels().iter().filter(|&&p| p == red).count();
                prop_assert_eq!(painted, expected);
            }
        }
    }

    #[test]
    fn test_sprite_set_caches_all_frames() {
        let set = SpriteSet::build(FighterId::P1);
        assert_eq!(set.len(), PoseCategory::ALL.len() * FRAMES_PER_POSE);
        assert_eq!(set.identity(), FighterId::P1);

        // Every cached frame matches a fresh build
        for category in PoseCategory::ALL {
            for (i, layout) in category.frames().iter().enumerate() {
                assert!(*set.frame(category, i) == build(FighterId::P1, layout));
            }
        }
    }
}
