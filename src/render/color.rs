//! Colors and Palettes
//!
//! 8-bit RGBA color, the per-identity fighter palettes, and the fixed tint
//! overlays used by the pose animator.

use serde::{Deserialize, Serialize};

use crate::game::state::FighterId;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Opaque white: the neutral tint.
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    /// Create a color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Tint applied while a fighter's hit reaction is active.
pub const HIT_REACTION_TINT: Rgba = Rgba::opaque(255, 51, 51);

/// Tint applied while a fighter is dazed (and not hit-reacting).
pub const DAZED_TINT: Rgba = Rgba::opaque(255, 217, 89);

/// The four tones a fighter sprite is painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Head and torso
    pub body: Rgba,
    /// Limbs
    pub accent: Rgba,
    /// Eyes
    pub eye: Rgba,
    /// Extended-punch fist overlay
    pub fist: Rgba,
}

impl Palette {
    /// The palette for a fighter identity.
    pub const fn for_identity(id: FighterId) -> Palette {
        match id.index() {
            0 => Palette {
                body: Rgba::opaque(237, 189, 130),
                accent: Rgba::opaque(214, 61, 71),
                eye: Rgba::opaque(26, 26, 26),
                fist: Rgba::opaque(242, 89, 77),
            },
            _ => Palette {
                body: Rgba::opaque(191, 219, 140),
                accent: Rgba::opaque(71, 115, 224),
                eye: Rgba::opaque(26, 26, 26),
                fist: Rgba::opaque(89, 140, 242),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ_by_identity() {
        let p1 = Palette::for_identity(FighterId::P1);
        let p2 = Palette::for_identity(FighterId::P2);

        assert_ne!(p1.body, p2.body);
        assert_ne!(p1.accent, p2.accent);
        assert_ne!(p1.fist, p2.fist);
        // Shared eye tone
        assert_eq!(p1.eye, p2.eye);
    }

    #[test]
    fn test_tints_are_opaque() {
        assert_eq!(HIT_REACTION_TINT.a, 255);
        assert_eq!(DAZED_TINT.a, 255);
        assert_eq!(Rgba::WHITE.a, 255);
        assert_eq!(Rgba::TRANSPARENT.a, 0);
    }
}
