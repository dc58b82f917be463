//! ASCII conversion engine for asciigram.
//!
//! Converts pixel frames to rows of glyphs: brightness formulas, target
//! fitting, glyph lookup and row assembly.

pub mod brightness;
pub mod fit;
pub mod glyph;
pub mod renderer;

pub use renderer::{AsciiRenderer, Rows};
