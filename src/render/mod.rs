//! Presentation Module
//!
//! Everything the embedding renderer needs to draw a fighter: procedurally
//! composited pixel sprites, pose layout tables, palettes, and the per-tick
//! pose animator. Nothing here feeds back into combat resolution.
//!
//! ## Module Structure
//!
//! - `color`: RGBA, per-identity palettes, tint overlays
//! - `pose`: pose categories and authored body-part layout tables
//! - `sprite`: 32x32 pixel-buffer compositing and the per-fighter cache
//! - `animator`: per-tick visual state (scale, frame, tint, mirror, shake)

pub mod animator;
pub mod color;
pub mod pose;
pub mod sprite;

// Re-export key types
pub use animator::{MatchVisuals, PoseAnimator, VisualFrame};
pub use color::{Palette, Rgba};
pub use pose::{PartRect, PoseCategory, PoseLayout};
pub use sprite::{PixelBuffer, SpriteSet, CANVAS_SIZE};
