//! Image sources for asciigram: decoding from disk and resizing.

pub mod image;
pub mod resize;

pub use crate::image::load_image;
pub use resize::Resizer;
