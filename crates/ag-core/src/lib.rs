//! Configuration, types, and shared structures for asciigram.
//!
//! This crate contains the image buffer, glyph ramps, render configuration
//! and the collaborator traits shared across the asciigram workspace.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;
pub mod traits;

pub use charset::GlyphRamp;
pub use config::{BrightnessMode, GridSize, RenderConfig};
pub use error::CoreError;
pub use frame::FrameBuffer;
