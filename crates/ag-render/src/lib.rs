//! Output side of asciigram: terminal size discovery, line sinks and the
//! [`AsciiArt`] entry point tying image, renderer and sink together.

pub mod art;
pub mod sink;
pub mod terminal;

pub use art::{AsciiArt, Target};
pub use sink::{FileSink, StdoutSink, VecSink};
pub use terminal::{CrosstermTerminal, FixedTerminal};
